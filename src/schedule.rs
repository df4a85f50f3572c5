use crate::data::{Instance, JobId, Objectives, Sequence, Time, Timetable};
use log::trace;
use ndarray::Array2;
use rand::seq::SliceRandom;
use std::cmp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
  // An operation starts once its job left the previous machine and the machine is free
  Permutation,
  // Jobs pass through all machines without waiting in between
  NoWait,
}

impl Default for Timing {
  fn default() -> Self {
    Timing::Permutation
  }
}

pub fn get_timetable(inst: &Instance, seq: &[JobId], timing: Timing) -> Timetable {
  match timing {
    Timing::Permutation => get_permutation_timetable(inst, seq),
    Timing::NoWait => get_no_wait_timetable(inst, seq),
  }
}

fn get_permutation_timetable(inst: &Instance, seq: &[JobId]) -> Timetable {
  let shape = (inst.n_machines, seq.len());
  let mut begin = Array2::<Time>::zeros(shape);
  let mut end = Array2::<Time>::zeros(shape);

  for i in 0..inst.n_machines {
    for (j, &job) in seq.iter().enumerate() {
      let machine_free = if j > 0 { end[[i, j - 1]] } else { 0 };
      let job_arrives = if i > 0 { end[[i - 1, j]] } else { 0 };

      begin[[i, j]] = cmp::max(machine_free, job_arrives);
      end[[i, j]] = begin[[i, j]] + inst.duration(i, job);
    }
  }

  trace!("begin={:?}", begin);
  trace!("end={:?}", end);

  return Timetable {
    begin: begin,
    end: end,
  };
}

fn get_no_wait_timetable(inst: &Instance, seq: &[JobId]) -> Timetable {
  let shape = (inst.n_machines, seq.len());
  let mut begin = Array2::<Time>::zeros(shape);
  let mut end = Array2::<Time>::zeros(shape);

  for (j, &job) in seq.iter().enumerate() {
    // Earliest start on the first machine such that no machine is still busy
    // with the preceding job when this one reaches it
    let mut start = 0;
    if j > 0 {
      let mut offset = 0;
      for i in 0..inst.n_machines {
        start = cmp::max(start, end[[i, j - 1]].saturating_sub(offset));
        offset += inst.duration(i, job);
      }
    }

    let mut t = start;
    for i in 0..inst.n_machines {
      begin[[i, j]] = t;
      t += inst.duration(i, job);
      end[[i, j]] = t;
    }
  }

  trace!("begin={:?}", begin);
  trace!("end={:?}", end);

  return Timetable {
    begin: begin,
    end: end,
  };
}

pub fn evaluate(timetable: &Timetable) -> Objectives {
  let (n_machines, n_positions) = timetable.shape();
  if n_machines == 0 || n_positions == 0 {
    return Objectives {
      makespan: 0,
      total_flow_time: 0,
    };
  }

  let last_machine = timetable.end.row(n_machines - 1);
  return Objectives {
    makespan: last_machine[n_positions - 1],
    total_flow_time: last_machine.sum(),
  };
}

pub fn random_sequence<R: rand::Rng>(inst: &Instance, rng: &mut R) -> Sequence {
  let mut seq = inst.identity_sequence();
  seq.shuffle(rng);
  return seq;
}

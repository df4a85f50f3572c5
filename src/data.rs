use ndarray::Array2;

pub type Machine = usize;
pub type JobId = usize;
pub type Time = u64;

pub type Sequence = Vec<JobId>;

#[derive(Debug, Clone)]
pub struct Instance {
  pub n_machines: usize,
  pub n_jobs: usize,

  // durations[[machine, job]]
  pub durations: Array2<Time>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timetable {
  // Indexed by [machine, position in sequence], not by job id
  pub begin: Array2<Time>,
  pub end: Array2<Time>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Objectives {
  pub makespan: Time,
  pub total_flow_time: Time,
}

impl Instance {
  pub fn new(durations: Array2<Time>) -> Self {
    let (n_machines, n_jobs) = durations.dim();
    return Self {
      n_machines: n_machines,
      n_jobs: n_jobs,
      durations: durations,
    };
  }

  pub fn duration(&self, machine: Machine, job: JobId) -> Time {
    return self.durations[[machine, job]];
  }

  pub fn shape(&self) -> (usize, usize) {
    return (self.n_machines, self.n_jobs);
  }

  pub fn identity_sequence(&self) -> Sequence {
    return (0..self.n_jobs).collect();
  }
}

impl Timetable {
  pub fn shape(&self) -> (usize, usize) {
    return self.begin.dim();
  }
}

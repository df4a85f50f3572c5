use crate::data::{Instance, JobId, Machine, Objectives, Time, Timetable};
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
  }
}

/// One color per job index, drawn once per run so that a job keeps its color
/// across all charts of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct JobColors {
  colors: Vec<Rgb>,
}

impl JobColors {
  pub fn random<R: rand::Rng>(n_jobs: usize, rng: &mut R) -> Self {
    let colors = (0..n_jobs)
      .map(|_| Rgb(rng.gen(), rng.gen(), rng.gen()))
      .collect();
    return Self { colors: colors };
  }

  pub fn get(&self, job: JobId) -> Rgb {
    return self.colors[job];
  }

  pub fn len(&self) -> usize {
    return self.colors.len();
  }
}

/// A single bar of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
  pub machine: Machine,
  pub job: JobId,
  pub start: Time,
  pub finish: Time,
}

impl Record {
  pub fn machine_label(&self) -> String {
    return machine_label(self.machine);
  }

  pub fn job_label(&self) -> String {
    return job_label(self.job);
  }

  pub fn length(&self) -> Time {
    return self.finish - self.start;
  }
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "{},{},{},{}",
      self.machine_label(),
      self.start,
      self.finish,
      self.job_label()
    )
  }
}

pub fn machine_label(machine: Machine) -> String {
  return format!("M{}", machine + 1);
}

pub fn job_label(job: JobId) -> String {
  return format!("J{}", job + 1);
}

#[derive(Debug, Clone)]
pub struct GanttChart {
  pub title: String,
  pub n_machines: usize,
  pub n_jobs: usize,
  pub records: Vec<Record>,
  pub colors: JobColors,
  pub objectives: Objectives,
}

impl GanttChart {
  pub fn new(
    inst: &Instance,
    seq: &[JobId],
    timetable: &Timetable,
    objectives: Objectives,
    colors: &JobColors,
  ) -> Self {
    let mut records = Vec::with_capacity(inst.n_machines * seq.len());
    for machine in 0..inst.n_machines {
      for (position, &job) in seq.iter().enumerate() {
        records.push(Record {
          machine: machine,
          job: job,
          start: timetable.begin[[machine, position]],
          finish: timetable.end[[machine, position]],
        });
      }
    }

    return Self {
      title: format!(
        "MKS = {}, TFT = {}",
        objectives.makespan, objectives.total_flow_time
      ),
      n_machines: inst.n_machines,
      n_jobs: inst.n_jobs,
      records: records,
      colors: colors.clone(),
      objectives: objectives,
    };
  }

  /// File name a saved chart is written to, e.g. `[4, 7].png`.
  pub fn file_name(&self) -> String {
    return format!(
      "[{}, {}].png",
      self.objectives.makespan, self.objectives.total_flow_time
    );
  }

  pub fn horizon(&self) -> Time {
    return self.records.iter().map(|r| r.finish).max().unwrap_or(0);
  }

  pub fn machine_records(&self, machine: Machine) -> impl Iterator<Item = &Record> {
    return self.records.iter().filter(move |r| r.machine == machine);
  }

  /// Records in long form, one `machine,start,finish,job` line each.
  pub fn to_csv(&self) -> String {
    return self.records.iter().map(|r| format!("{}\n", r)).join("");
  }
}

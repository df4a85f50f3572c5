use crate::data::{Instance, JobId, Sequence, Time};
use log::debug;
use ndarray::Array2;
use std::error::Error;
use std::fs;
use std::path::Path;

pub fn load_instance(path: &Path) -> Result<Instance, Box<dyn Error>> {
  let contents = fs::read_to_string(path)
    .map_err(|e| format!("cannot read instance file {}: {}", path.display(), e))?;
  let instance = parse_instance(&contents)?;
  debug!(
    "Loaded instance {} with {} machines and {} jobs",
    path.display(),
    instance.n_machines,
    instance.n_jobs
  );
  return Ok(instance);
}

// Keeps every sum of processing times within Time
pub const MAX_DURATION: Time = u32::MAX as Time;

/// Parses a processing-time matrix: one row per machine, one column per job.
/// Values may be written as floats (`1.0e+00`); fractions are truncated.
pub fn parse_instance(contents: &str) -> Result<Instance, Box<dyn Error>> {
  let mut values: Vec<Time> = Vec::new();
  let mut n_machines = 0;
  let mut n_jobs = None;

  for (line_no, line) in contents.lines().enumerate() {
    if line.trim().is_empty() {
      continue;
    }

    let mut row_len = 0;
    for (col, item) in line.split_whitespace().enumerate() {
      let duration = parse_duration(item).map_err(|e| {
        format!(
          "invalid processing time {:?} at line {}, column {}: {}",
          item,
          line_no + 1,
          col + 1,
          e
        )
      })?;
      values.push(duration);
      row_len += 1;
    }

    match n_jobs {
      None => n_jobs = Some(row_len),
      Some(n) if n != row_len => Err(format!(
        "line {} has {} values, expected {}",
        line_no + 1,
        row_len,
        n
      ))?,
      Some(_) => {}
    }
    n_machines += 1;
  }

  let n_jobs = n_jobs.ok_or("instance contains no processing times")?;
  let durations = Array2::from_shape_vec((n_machines, n_jobs), values)?;

  Ok(Instance::new(durations))
}

fn parse_duration(item: &str) -> Result<Time, Box<dyn Error>> {
  let value: f64 = item.parse()?;
  if !value.is_finite() || value < 0.0 {
    Err("expected a non-negative number")?;
  }
  if value > MAX_DURATION as f64 {
    Err(format!("exceeds the maximum of {}", MAX_DURATION))?;
  }
  return Ok(value.trunc() as Time);
}

pub fn load_permutations(path: &Path, n_jobs: usize) -> Result<Vec<Sequence>, Box<dyn Error>> {
  let contents = fs::read_to_string(path)
    .map_err(|e| format!("cannot read permutation file {}: {}", path.display(), e))?;
  let permutations = parse_permutations(&contents, n_jobs)?;
  debug!(
    "Loaded {} permutations from {}",
    permutations.len(),
    path.display()
  );
  return Ok(permutations);
}

/// One permutation per non-blank line; malformed lines are reported with their line number.
pub fn parse_permutations(contents: &str, n_jobs: usize) -> Result<Vec<Sequence>, Box<dyn Error>> {
  let mut permutations = Vec::new();

  for (line_no, line) in contents.lines().enumerate() {
    if line.trim().is_empty() {
      continue;
    }
    let sequence = parse_permutation(line)
      .and_then(|seq| validate_permutation(&seq, n_jobs).map(|_| seq))
      .map_err(|e| format!("permutation file line {}: {}", line_no + 1, e))?;
    permutations.push(sequence);
  }

  Ok(permutations)
}

/// Accepts both `1, 0` and `1 0`.
pub fn parse_permutation(line: &str) -> Result<Sequence, Box<dyn Error>> {
  let items: Vec<&str> = if line.contains(',') {
    line.split(',').map(|item| item.trim()).collect()
  } else {
    line.split_whitespace().collect()
  };

  let mut sequence = Vec::with_capacity(items.len());
  for item in items {
    let job: JobId = item
      .parse()
      .map_err(|e| format!("invalid job index {:?}: {}", item, e))?;
    sequence.push(job);
  }

  Ok(sequence)
}

pub fn validate_permutation(sequence: &[JobId], n_jobs: usize) -> Result<(), Box<dyn Error>> {
  if sequence.len() != n_jobs {
    Err(format!(
      "expected {} job indices, found {}",
      n_jobs,
      sequence.len()
    ))?;
  }

  if let Some(&job) = sequence.iter().find(|&&job| job >= n_jobs) {
    Err(format!("job index {} out of range 0..{}", job, n_jobs))?;
  }

  let mut seen = vec![false; n_jobs];
  for &job in sequence {
    if seen[job] {
      Err(format!("job index {} appears more than once", job))?;
    }
    seen[job] = true;
  }

  Ok(())
}

use crate::chart::{GanttChart, JobColors};
use crate::data::{Instance, Sequence};
use crate::render::Renderer;
use crate::schedule::{evaluate, get_timetable, random_sequence, Timing};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::error::Error;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct Config {
  // Without a seed colors and random permutations differ from run to run
  pub seed: Option<u64>,
  pub timing: Timing,
}

/// Builds one chart per permutation. With no permutations a single random one
/// is drawn. Job colors are drawn once and shared by all charts.
pub fn build_charts(
  inst: &Instance,
  permutations: Option<Vec<Sequence>>,
  config: &Config,
) -> Vec<GanttChart> {
  let mut rng = match config.seed {
    Some(seed) => ChaChaRng::seed_from_u64(seed),
    None => ChaChaRng::from_entropy(),
  };

  let permutations = permutations.unwrap_or_else(|| {
    let seq = random_sequence(inst, &mut rng);
    debug!("Generated random permutation {:?}", seq);
    vec![seq]
  });
  let colors = JobColors::random(inst.n_jobs, &mut rng);

  return permutations
    .iter()
    .map(|seq| {
      let timetable = get_timetable(inst, seq, config.timing);
      let objectives = evaluate(&timetable);
      info!(
        "Permutation {:?}: makespan {}, total flow time {}",
        seq, objectives.makespan, objectives.total_flow_time
      );
      GanttChart::new(inst, seq, &timetable, objectives, &colors)
    })
    .collect();
}

/// Hands every chart to the renderer, optionally writing its records as CSV first.
pub fn show_charts(
  charts: &[GanttChart],
  renderer: &mut dyn Renderer,
  mut records: Option<&mut dyn Write>,
) -> Result<(), Box<dyn Error>> {
  for chart in charts {
    if let Some(out) = records.as_mut() {
      write!(out, "{}", chart.to_csv())?;
    }
    renderer.render(chart)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use ndarray::arr2;

  #[derive(Default)]
  struct RecordingRenderer {
    titles: Vec<String>,
  }

  impl Renderer for RecordingRenderer {
    fn render(&mut self, chart: &GanttChart) -> Result<(), Box<dyn Error>> {
      self.titles.push(chart.title.clone());
      Ok(())
    }
  }

  fn instance() -> Instance {
    Instance::new(arr2(&[[1, 2, 3], [2, 1, 4]]))
  }

  #[test]
  fn test_one_chart_per_permutation() {
    let permutations = vec![vec![0, 1, 2], vec![2, 1, 0]];
    let charts = build_charts(&instance(), Some(permutations), &Config::default());
    assert_eq!(2, charts.len());
    assert_eq!(charts[0].colors, charts[1].colors);

    let mut renderer = RecordingRenderer::default();
    let mut csv = Vec::new();
    show_charts(&charts, &mut renderer, Some(&mut csv as &mut dyn Write)).unwrap();
    assert_eq!(
      vec!["MKS = 10, TFT = 17", "MKS = 10, TFT = 25"],
      renderer.titles
    );

    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(12, csv.lines().count());
    assert!(csv.starts_with("M1,0,1,J1\nM1,1,3,J2\n"));
    assert!(csv.ends_with("M2,8,10,J1\n"));
  }

  #[test]
  fn test_random_permutation_when_none_given() {
    let config = Config {
      seed: Some(11),
      timing: Timing::Permutation,
    };
    let charts = build_charts(&instance(), None, &config);
    assert_eq!(1, charts.len());
    assert_eq!(6, charts[0].records.len());

    let again = build_charts(&instance(), None, &config);
    assert_eq!(charts[0].records, again[0].records);
    assert_eq!(charts[0].colors, again[0].colors);
  }

  #[test]
  fn test_no_wait_timing_is_used() {
    let config = Config {
      seed: Some(1),
      timing: Timing::NoWait,
    };
    let inst = Instance::new(arr2(&[[1, 1], [5, 1]]));
    let charts = build_charts(&inst, Some(vec![vec![0, 1]]), &config);
    assert_eq!(7, charts[0].objectives.makespan);
  }
}

use crate::chart::{machine_label, GanttChart};
use crate::render::Renderer;
use log::info;
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

// 10x5 inches at 100 dpi
const SIZE: (u32, u32) = (1000, 500);
const BAR_HEIGHT: f64 = 0.8;

pub struct PngRenderer {
  pub output_dir: PathBuf,
  pub written: Vec<PathBuf>,
}

impl PngRenderer {
  pub fn new(output_dir: &Path) -> Self {
    return Self {
      output_dir: output_dir.to_path_buf(),
      written: Vec::new(),
    };
  }

  pub fn path_for(&self, chart: &GanttChart) -> PathBuf {
    return self.output_dir.join(chart.file_name());
  }
}

impl Renderer for PngRenderer {
  fn render(&mut self, chart: &GanttChart) -> Result<(), Box<dyn Error>> {
    let path = self.path_for(chart);
    draw_chart(chart, &path)?;
    info!(
      "Saved chart {} to {} ({} written)",
      chart.title,
      path.display(),
      self.written.len() + 1
    );
    self.written.push(path);
    Ok(())
  }
}

fn draw_chart(chart: &GanttChart, path: &Path) -> Result<(), Box<dyn Error>> {
  let root = BitMapBackend::new(path, SIZE).into_drawing_area();
  root.fill(&WHITE)?;

  let n_machines = chart.n_machines as f64;
  let x_max = chart.horizon().max(1) as f64 * 1.05;

  let mut ctx = ChartBuilder::on(&root)
    .caption(&chart.title, ("sans-serif", 24))
    .margin(10)
    .x_label_area_size(30)
    .y_label_area_size(40)
    .build_cartesian_2d(0f64..x_max, -0.5f64..n_machines - 0.5)?;

  ctx
    .configure_mesh()
    .disable_y_mesh()
    .y_labels(0)
    .draw()?;

  // M1 is the top row
  let row = |machine: usize| n_machines - 1.0 - machine as f64;

  for record in &chart.records {
    let color = chart.colors.get(record.job);
    let fill = RGBColor(color.0, color.1, color.2);
    let y = row(record.machine);
    let corners = [
      (record.start as f64, y - BAR_HEIGHT / 2.0),
      (record.finish as f64, y + BAR_HEIGHT / 2.0),
    ];

    ctx.draw_series(vec![
      Rectangle::new(corners, fill.filled()),
      Rectangle::new(corners, BLACK.stroke_width(1)),
    ])?;
  }

  let label_style = TextStyle::from(("sans-serif", 16).into_font()).color(&BLACK);
  for machine in 0..chart.n_machines {
    let (x, y) = ctx.backend_coord(&(0.0, row(machine)));
    root.draw(&Text::new(
      machine_label(machine),
      (x - 32, y - 8),
      label_style.clone(),
    ))?;
  }

  root.present()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::chart::JobColors;
  use crate::data::Objectives;

  #[test]
  fn test_path_uses_objectives() {
    let chart = GanttChart {
      title: String::from("MKS = 4, TFT = 7"),
      n_machines: 0,
      n_jobs: 0,
      records: Vec::new(),
      colors: JobColors::random(0, &mut rand::thread_rng()),
      objectives: Objectives {
        makespan: 4,
        total_flow_time: 7,
      },
    };
    let renderer = PngRenderer::new(Path::new("charts"));
    assert_eq!(Path::new("charts/[4, 7].png"), renderer.path_for(&chart));
    assert!(renderer.written.is_empty());
  }
}

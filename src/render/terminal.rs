use crate::chart::{job_label, machine_label, GanttChart, Rgb};
use crate::data::JobId;
use crate::render::Renderer;
use log::debug;
use std::error::Error;
use std::io::Write;

const DEFAULT_WIDTH: usize = 72;

/// Draws charts as text, one row of cells per machine. Each cell shows the
/// job running at the middle of the time slice the cell covers.
pub struct TerminalRenderer<W: Write> {
  out: W,
  pub width: usize,
  pub ansi_colors: bool,
}

impl<W: Write> TerminalRenderer<W> {
  pub fn new(out: W, ansi_colors: bool) -> Self {
    return Self {
      out: out,
      width: DEFAULT_WIDTH,
      ansi_colors: ansi_colors,
    };
  }

  pub fn into_inner(self) -> W {
    return self.out;
  }

  fn cell(&self, job: Option<JobId>, color: Rgb) -> String {
    match job {
      None => String::from(" "),
      Some(_) if self.ansi_colors => {
        format!("\x1b[38;2;{};{};{}m\u{2588}\x1b[0m", color.0, color.1, color.2)
      }
      Some(job) => glyph(job).to_string(),
    }
  }
}

// Single-character stand-in for a job when colors are not available
fn glyph(job: JobId) -> char {
  const GLYPHS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
  return GLYPHS[job % GLYPHS.len()] as char;
}

impl<W: Write> Renderer for TerminalRenderer<W> {
  fn render(&mut self, chart: &GanttChart) -> Result<(), Box<dyn Error>> {
    let horizon = chart.horizon().max(1) as f64;
    let slice = horizon / self.width as f64;
    debug!("Drawing {} with {} time units per cell", chart.title, slice);

    let mut lines = vec![chart.title.clone()];
    for machine in 0..chart.n_machines {
      let mut line = format!("{:>4} |", machine_label(machine));
      for col in 0..self.width {
        let t = (col as f64 + 0.5) * slice;
        let job = chart
          .machine_records(machine)
          .find(|r| (r.start as f64) <= t && t < r.finish as f64)
          .map(|r| r.job);
        let color = job.map(|j| chart.colors.get(j)).unwrap_or(Rgb(0, 0, 0));
        line.push_str(&self.cell(job, color));
      }
      line.push('|');
      lines.push(line);
    }
    lines.push(format!(
      "{:>4} 0{:>width$}",
      "",
      chart.horizon(),
      width = self.width
    ));

    let mut legend = Vec::with_capacity(chart.colors.len());
    for job in 0..chart.colors.len() {
      let marker = self.cell(Some(job), chart.colors.get(job));
      legend.push(format!("{} {}", marker, job_label(job)));
    }
    lines.push(legend.join("  "));

    for line in lines {
      writeln!(self.out, "{}", line)?;
    }
    self.out.flush()?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::chart::JobColors;
  use crate::data::Instance;
  use crate::schedule::{evaluate, get_timetable, Timing};
  use ndarray::arr2;
  use rand::SeedableRng;

  fn render(seq: &[JobId], width: usize, ansi_colors: bool) -> String {
    let inst = Instance::new(arr2(&[[1, 2], [2, 1]]));
    let timetable = get_timetable(&inst, seq, Timing::Permutation);
    let mut rng = rand_chacha::ChaChaRng::seed_from_u64(3);
    let colors = JobColors::random(inst.n_jobs, &mut rng);
    let chart = GanttChart::new(&inst, seq, &timetable, evaluate(&timetable), &colors);

    let mut renderer = TerminalRenderer::new(Vec::new(), ansi_colors);
    renderer.width = width;
    renderer.render(&chart).unwrap();
    String::from_utf8(renderer.into_inner()).unwrap()
  }

  #[test]
  fn test_plain_rows() {
    let text = render(&[0, 1], 8, false);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
      vec![
        "MKS = 4, TFT = 7",
        "  M1 |001111  |",
        "  M2 |  000011|",
        "     0       4",
        "0 J1  1 J2",
      ],
      lines
    );
  }

  #[test]
  fn test_colored_cells() {
    let text = render(&[1, 0], 4, true);
    assert!(text.contains("\x1b[38;2;"));
    assert!(text.starts_with("MKS = 5, TFT = 8\n"));
  }
}

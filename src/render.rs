pub mod png;
pub mod terminal;

use crate::chart::GanttChart;
use std::error::Error;

pub use png::PngRenderer;
pub use terminal::TerminalRenderer;

/// Something a finished chart can be handed to. Save mode writes image files,
/// display mode draws on the terminal; a run uses exactly one of them.
pub trait Renderer {
  fn render(&mut self, chart: &GanttChart) -> Result<(), Box<dyn Error>>;
}

//! Report rendering and output formats

pub mod formatter;
pub mod render;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use render::{ReportRenderer, ReportView};

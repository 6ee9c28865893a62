//! Output formatting module for CLI

mod json;
mod terminal;

pub use json::JsonReport;
pub use terminal::TerminalReport;

use crate::error::ClassLensError;
use crate::rules::results::AuditResult;

/// Trait for rendering an audit result
pub trait ReportRenderer {
    fn render_report(&self, result: &AuditResult) -> Result<String, ClassLensError>;
}

//! Rules module - detection rules and the evaluation engine

pub mod checks;
pub mod engine;
pub mod extract;
pub mod patterns;
pub mod results;

pub use engine::{AuditEngine, Rule};
pub use results::{AuditResult, AuditStatus, Category, Severity, Violation};

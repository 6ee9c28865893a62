//! classlens Library
//!
//! This crate provides the core functionality for auditing utility-class
//! codebases against responsive design standards: file discovery, rule
//! evaluation, and report rendering.

pub mod cli;
pub mod config;
pub mod error;
pub mod rules;
pub mod scanner;

pub use error::ClassLensError;

/// Exit codes for the CLI
pub mod exit_codes {
    /// No violations found
    pub const PASSED: i32 = 0;
    /// Warnings found but nothing blocking
    pub const WARNINGS: i32 = 1;
    /// Critical violations found, or a setup error
    pub const CRITICAL: i32 = 2;
}

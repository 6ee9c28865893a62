//! Error types for classlens
//!
//! This module defines custom error types using `thiserror`. Only setup-level
//! failures are surfaced as errors; per-file read problems during a scan are
//! recovered by skipping the file.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for classlens
#[derive(Error, Debug)]
pub enum ClassLensError {
    /// The project path given on the command line does not exist
    #[error("project path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// The project path given on the command line is not a directory
    #[error("project path is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    /// Failed to write a report file
    #[error("failed to write report '{path}': {source}")]
    ReportWrite {
        /// Path to the report that failed to write
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize the structured report
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

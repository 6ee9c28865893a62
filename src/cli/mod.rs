//! # CLI Module
//!
//! Command-line interface for classlens using `clap`.
//!
//! ```bash
//! # Human-readable audit of a project tree
//! classlens ./frontend
//!
//! # Structured report on stdout
//! classlens ./frontend --json
//!
//! # Structured report written to a file
//! classlens ./frontend --json --output report.json
//! ```
//!
//! Exit codes: 0 no violations, 1 warnings only, 2 critical violations
//! (also used for setup errors such as a missing project path).

pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// Static responsive audit for utility-class codebases
#[derive(Parser, Debug)]
#[command(name = "classlens", version, about, long_about = None)]
pub struct Cli {
    /// Path to the project directory to scan
    pub project_path: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the JSON report to a file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

//! classlens - static responsive audit for utility-class codebases
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use classlens::cli::output::{JsonReport, ReportRenderer, TerminalReport};
use classlens::cli::Cli;
use classlens::config::AuditConfig;
use classlens::error::ClassLensError;
use classlens::exit_codes;
use classlens::rules::AuditEngine;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(exit_codes::CRITICAL);
        }
    }
}

fn run(cli: &Cli) -> Result<i32, ClassLensError> {
    let root = &cli.project_path;
    if !root.exists() {
        return Err(ClassLensError::RootNotFound(root.clone()));
    }
    if !root.is_dir() {
        return Err(ClassLensError::RootNotDirectory(root.clone()));
    }

    let engine = AuditEngine::new(AuditConfig::default());
    let result = engine.run(root);

    if cli.json || cli.output.is_some() {
        let report = JsonReport::new().render_report(&result)?;
        match &cli.output {
            Some(path) => {
                std::fs::write(path, &report).map_err(|e| ClassLensError::ReportWrite {
                    path: path.display().to_string(),
                    source: e,
                })?;
                println!("JSON report written to: {}", path.display());
            }
            None => println!("{}", report),
        }
    } else {
        let report = TerminalReport::new().render_report(&result)?;
        print!("{}", report);
    }

    Ok(result.status().exit_code())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

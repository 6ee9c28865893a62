//! Terminal report formatting with colors

use colored::Colorize;

use super::ReportRenderer;
use crate::error::ClassLensError;
use crate::rules::results::{AuditResult, AuditStatus, Severity, Violation};

/// Characters of a snippet shown in the terminal before truncation.
const DISPLAY_SNIPPET_LEN: usize = 60;

pub struct TerminalReport;

impl TerminalReport {
    pub fn new() -> Self {
        Self
    }

    fn rule_line(&self, violation: &Violation) -> String {
        let marker = match violation.severity {
            Severity::Critical => "!!".red().bold(),
            Severity::Warning => "!".yellow().bold(),
        };
        format!(
            "    [{}] Line {}: {}\n        {}\n",
            marker,
            violation.line_number,
            violation.rule.cyan(),
            violation.message
        )
    }

    fn snippet_line(&self, violation: &Violation) -> String {
        if violation.snippet.is_empty() {
            return String::new();
        }
        let display = if violation.snippet.chars().count() > DISPLAY_SNIPPET_LEN {
            let cut: String = violation.snippet.chars().take(DISPLAY_SNIPPET_LEN).collect();
            format!("{}...", cut)
        } else {
            violation.snippet.clone()
        };
        format!("        Snippet: {}\n", display.dimmed())
    }

    fn format_files(&self, result: &AuditResult) -> String {
        let mut output = String::new();

        for (file_path, mut violations) in result.violations_by_file() {
            violations.sort_by_key(|v| v.line_number);

            output.push_str(&format!("  {}\n", file_path.white().bold()));
            output.push_str(&format!("  {}\n", "-".repeat(file_path.len()).dimmed()));
            for violation in violations {
                output.push_str(&self.rule_line(violation));
                output.push_str(&self.snippet_line(violation));
            }
            output.push('\n');
        }

        output
    }

    fn format_summary(&self, result: &AuditResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=".repeat(70)));
        output.push_str(&format!("{}\n", "SUMMARY".bold()));
        output.push_str(&format!("{}\n", "=".repeat(70)));
        output.push_str(&format!("  Files scanned:       {}\n", result.files_scanned));
        output.push_str(&format!(
            "  Total violations:    {}\n",
            result.total_violations()
        ));
        output.push_str(&format!(
            "  Critical:            {}\n",
            result.critical_count().to_string().red().bold()
        ));
        output.push_str(&format!(
            "  Warnings:            {}\n",
            result.warning_count().to_string().yellow().bold()
        ));
        output.push('\n');

        output.push_str("  By Category:\n");
        for (category, count) in result.violations_by_category() {
            if count > 0 {
                output.push_str(&format!("    {}: {}\n", category, count));
            }
        }
        output.push_str(&format!("{}\n", "=".repeat(70)));

        let status_line = match result.status() {
            AuditStatus::Failed => "STATUS: FAILED (critical violations)".red().bold(),
            AuditStatus::PassedWithWarnings => "STATUS: PASSED WITH WARNINGS".yellow().bold(),
            AuditStatus::Passed => "STATUS: PASSED".green().bold(),
        };
        output.push_str(&format!("{}\n", status_line));
        output.push_str(&format!("{}\n", "=".repeat(70)));

        output
    }
}

impl Default for TerminalReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalReport {
    fn render_report(&self, result: &AuditResult) -> Result<String, ClassLensError> {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=".repeat(70)));
        output.push_str(&format!("{}\n", "RESPONSIVE AUDIT REPORT".bold()));
        output.push_str(&format!("{}\n\n", "=".repeat(70)));

        if result.violations().is_empty() {
            output.push_str(&format!("  {}\n\n", "No violations found!".green()));
        } else {
            output.push_str(&self.format_files(result));
        }

        output.push_str(&self.format_summary(result));

        Ok(output)
    }
}

//! # Audit Result Structures
//!
//! This module defines the data structures for representing audit violations
//! and results.
//!
//! ## Overview
//!
//! - [`Severity`] - Violation severity levels (Critical, Warning)
//! - [`Category`] - The closed set of detection categories
//! - [`Violation`] - Individual violation with location and suggested fix
//! - [`AuditResult`] - Collection of violations from an audit run
//! - [`AuditStatus`] - Three-way status ladder driving the process exit code
//!
//! ## Examples
//!
//! ```rust
//! use classlens::rules::results::{AuditResult, Category, Severity, Violation};
//!
//! let mut result = AuditResult::new();
//! result.add_violation(Violation::new(
//!     "src/App.tsx",
//!     12,
//!     Category::InlineStyle,
//!     Severity::Critical,
//!     "inline_style_layout",
//!     "<div style={{width: '120px'}}>",
//!     "Inline style with layout property 'width'. Use utility classes instead.",
//! ));
//!
//! assert_eq!(result.critical_count(), 1);
//! assert_eq!(result.status().exit_code(), 2);
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

/// Maximum characters kept in a line-level snippet.
pub const LINE_SNIPPET_LEN: usize = 100;

/// Maximum characters kept in a class-string snippet.
pub const CLASS_SNIPPET_LEN: usize = 80;

/// Severity levels for audit violations.
///
/// - **Critical** - blocks the audit (exit code 2); e.g. invalid breakpoints,
///   inline layout styles.
/// - **Warning** - should be addressed (exit code 1); e.g. ordering problems,
///   hardcoded pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

/// Detection categories.
///
/// This is a closed set: adding a category requires adding at least one rule
/// that emits it, and the per-category summary breakdown is exhaustive over
/// [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BreakpointCompliance,
    HardcodedSize,
    LayoutAntipattern,
    ResponsiveCoverage,
    FlexGridPattern,
    InlineStyle,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 6] = [
        Category::BreakpointCompliance,
        Category::HardcodedSize,
        Category::LayoutAntipattern,
        Category::ResponsiveCoverage,
        Category::FlexGridPattern,
        Category::InlineStyle,
    ];

    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BreakpointCompliance => "breakpoint_compliance",
            Category::HardcodedSize => "hardcoded_size",
            Category::LayoutAntipattern => "layout_antipattern",
            Category::ResponsiveCoverage => "responsive_coverage",
            Category::FlexGridPattern => "flex_grid_pattern",
            Category::InlineStyle => "inline_style",
        }
    }
}

/// A single audit violation: one rule firing on one line.
///
/// Violations are created by rules during line evaluation and are never
/// mutated afterward.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// Path of the offending file, relative to the scanned root.
    #[serde(rename = "file")]
    pub file_path: String,

    /// 1-based line number within the file.
    #[serde(rename = "line")]
    pub line_number: usize,

    /// Category of the rule that produced this violation.
    pub category: Category,

    /// Severity of the violation.
    pub severity: Severity,

    /// Stable rule identifier (e.g. "invalid_breakpoint").
    /// Each rule id maps to exactly one category.
    pub rule: &'static str,

    /// Bounded excerpt of the offending line or class string.
    pub snippet: String,

    /// Human-readable explanation, with a suggested fix when applicable.
    pub message: String,
}

impl Violation {
    /// Create a new violation. The snippet is truncated to the line budget;
    /// callers holding a class-string snippet should pre-truncate with
    /// [`truncate_snippet`] and the class budget.
    pub fn new(
        file_path: impl Into<String>,
        line_number: usize,
        category: Category,
        severity: Severity,
        rule: &'static str,
        snippet: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line_number,
            category,
            severity,
            rule,
            snippet: truncate_snippet(snippet.trim(), LINE_SNIPPET_LEN),
            message: message.into(),
        }
    }
}

/// Truncate a snippet to `max` characters, respecting char boundaries.
pub fn truncate_snippet(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Overall status of an audit run, derived from violation counts.
///
/// This three-way ladder is the single source of truth for the exit status;
/// renderers must consume it rather than recompute it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStatus {
    Passed,
    PassedWithWarnings,
    Failed,
}

impl AuditStatus {
    /// Process exit code for CI callers: 0 passed, 1 warnings, 2 critical.
    pub fn exit_code(&self) -> i32 {
        match self {
            AuditStatus::Passed => 0,
            AuditStatus::PassedWithWarnings => 1,
            AuditStatus::Failed => 2,
        }
    }
}

/// Collection of violations from a complete audit run.
///
/// Violations are stored in discovery order. The result is populated by the
/// engine across all scanned files and conceptually frozen once the engine
/// returns.
#[derive(Debug, Clone, Default)]
pub struct AuditResult {
    violations: Vec<Violation>,
    /// Number of files yielded by the walker, including unreadable ones.
    pub files_scanned: usize,
}

impl AuditResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Add multiple violations.
    pub fn add_violations(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    /// All violations, in discovery order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Total number of violations.
    pub fn total_violations(&self) -> usize {
        self.violations.len()
    }

    /// Number of critical violations.
    pub fn critical_count(&self) -> usize {
        self.count_by_severity(Severity::Critical)
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.count_by_severity(Severity::Warning)
    }

    /// Count violations of a given severity.
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    /// Per-category counts, every category present (zeros included).
    pub fn violations_by_category(&self) -> BTreeMap<&'static str, usize> {
        let mut counts: BTreeMap<&'static str, usize> =
            Category::ALL.iter().map(|c| (c.as_str(), 0)).collect();
        for v in &self.violations {
            *counts.entry(v.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Violations grouped by file, files in sorted order.
    pub fn violations_by_file(&self) -> BTreeMap<&str, Vec<&Violation>> {
        let mut by_file: BTreeMap<&str, Vec<&Violation>> = BTreeMap::new();
        for v in &self.violations {
            by_file.entry(v.file_path.as_str()).or_default().push(v);
        }
        by_file
    }

    /// Derive the overall status: any critical fails, else any warning
    /// passes-with-warnings, else passed.
    pub fn status(&self) -> AuditStatus {
        if self.critical_count() > 0 {
            AuditStatus::Failed
        } else if self.warning_count() > 0 {
            AuditStatus::PassedWithWarnings
        } else {
            AuditStatus::Passed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn violation(severity: Severity, category: Category, rule: &'static str) -> Violation {
        Violation::new(
            "src/App.tsx",
            3,
            category,
            severity,
            rule,
            "<div class=\"flex\">",
            "test message",
        )
    }

    #[test]
    fn test_status_ladder() {
        let mut result = AuditResult::new();
        assert_eq!(result.status(), AuditStatus::Passed);
        assert_eq!(result.status().exit_code(), 0);

        result.add_violation(violation(
            Severity::Warning,
            Category::HardcodedSize,
            "hardcoded_px_value",
        ));
        assert_eq!(result.status(), AuditStatus::PassedWithWarnings);
        assert_eq!(result.status().exit_code(), 1);

        result.add_violation(violation(
            Severity::Critical,
            Category::BreakpointCompliance,
            "invalid_breakpoint",
        ));
        assert_eq!(result.status(), AuditStatus::Failed);
        assert_eq!(result.status().exit_code(), 2);

        // Adding more warnings never moves the status away from Failed
        result.add_violation(violation(
            Severity::Warning,
            Category::LayoutAntipattern,
            "h_screen_no_responsive",
        ));
        assert_eq!(result.status(), AuditStatus::Failed);
    }

    #[test]
    fn test_counts() {
        let mut result = AuditResult::new();
        result.add_violations(vec![
            violation(Severity::Critical, Category::InlineStyle, "inline_style_layout"),
            violation(Severity::Critical, Category::InlineStyle, "custom_media_query"),
            violation(Severity::Warning, Category::FlexGridPattern, "flex_row_no_base"),
        ]);

        assert_eq!(result.total_violations(), 3);
        assert_eq!(result.critical_count(), 2);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_violations_by_category_is_exhaustive() {
        let mut result = AuditResult::new();
        result.add_violation(violation(
            Severity::Warning,
            Category::ResponsiveCoverage,
            "grid_cols_no_responsive",
        ));

        let counts = result.violations_by_category();
        assert_eq!(counts.len(), Category::ALL.len());
        assert_eq!(counts["responsive_coverage"], 1);
        assert_eq!(counts["inline_style"], 0);
        assert_eq!(counts["breakpoint_compliance"], 0);
    }

    #[test]
    fn test_violations_by_file_groups_and_sorts() {
        let mut result = AuditResult::new();
        let mut v1 = violation(Severity::Warning, Category::HardcodedSize, "hardcoded_px_value");
        v1.file_path = "src/b.tsx".to_string();
        let mut v2 = violation(Severity::Warning, Category::HardcodedSize, "hardcoded_px_value");
        v2.file_path = "src/a.tsx".to_string();
        result.add_violations(vec![v1, v2]);

        let by_file = result.violations_by_file();
        let files: Vec<_> = by_file.keys().copied().collect();
        assert_eq!(files, vec!["src/a.tsx", "src/b.tsx"]);
    }

    #[test]
    fn test_snippet_truncation() {
        let long = "x".repeat(250);
        let v = Violation::new(
            "a.tsx",
            1,
            Category::HardcodedSize,
            Severity::Warning,
            "hardcoded_px_value",
            &long,
            "msg",
        );
        assert_eq!(v.snippet.chars().count(), LINE_SNIPPET_LEN);

        // multi-byte input must not panic
        let emoji = "é".repeat(120);
        assert_eq!(truncate_snippet(&emoji, 100).chars().count(), 100);
        assert_eq!(truncate_snippet("short", 100), "short");
    }

    #[test]
    fn test_category_serialized_names() {
        assert_eq!(Category::BreakpointCompliance.as_str(), "breakpoint_compliance");
        for cat in Category::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
        }
    }
}

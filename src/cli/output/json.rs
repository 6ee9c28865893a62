//! JSON report formatting

use serde::Serialize;
use std::collections::BTreeMap;

use super::ReportRenderer;
use crate::error::ClassLensError;
use crate::rules::results::{AuditResult, Violation};

pub struct JsonReport;

impl JsonReport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    summary: Summary<'a>,
    violations: &'a [Violation],
}

#[derive(Serialize)]
struct Summary<'a> {
    files_scanned: usize,
    total_violations: usize,
    critical_violations: usize,
    warnings: usize,
    violations_by_category: BTreeMap<&'a str, usize>,
}

impl ReportRenderer for JsonReport {
    fn render_report(&self, result: &AuditResult) -> Result<String, ClassLensError> {
        let document = ReportDocument {
            summary: Summary {
                files_scanned: result.files_scanned,
                total_violations: result.total_violations(),
                critical_violations: result.critical_count(),
                warnings: result.warning_count(),
                violations_by_category: result.violations_by_category(),
            },
            violations: result.violations(),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::results::{Category, Severity};

    fn sample_result() -> AuditResult {
        let mut result = AuditResult::new();
        result.files_scanned = 3;
        result.add_violation(Violation::new(
            "src/App.tsx",
            12,
            Category::InlineStyle,
            Severity::Critical,
            "inline_style_layout",
            "<div style={{width: '120px'}}>",
            "Inline style with layout property 'width'.",
        ));
        result.add_violation(Violation::new(
            "src/Grid.tsx",
            4,
            Category::FlexGridPattern,
            Severity::Warning,
            "grid_no_escalation",
            "grid grid-cols-4",
            "'grid-cols-4' without breakpoint escalation.",
        ));
        result
    }

    #[test]
    fn test_render_report_summary() {
        let rendered = JsonReport::new().render_report(&sample_result()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["summary"]["files_scanned"], 3);
        assert_eq!(json["summary"]["total_violations"], 2);
        assert_eq!(json["summary"]["critical_violations"], 1);
        assert_eq!(json["summary"]["warnings"], 1);
    }

    #[test]
    fn test_category_breakdown_includes_zeroes() {
        let rendered = JsonReport::new().render_report(&sample_result()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let by_category = json["summary"]["violations_by_category"].as_object().unwrap();
        assert_eq!(by_category.len(), 6);
        assert_eq!(by_category["inline_style"], 1);
        assert_eq!(by_category["flex_grid_pattern"], 1);
        assert_eq!(by_category["breakpoint_compliance"], 0);
        assert_eq!(by_category["hardcoded_size"], 0);
    }

    #[test]
    fn test_violation_fields() {
        let rendered = JsonReport::new().render_report(&sample_result()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let violation = &json["violations"][0];
        assert_eq!(violation["file"], "src/App.tsx");
        assert_eq!(violation["line"], 12);
        assert_eq!(violation["category"], "inline_style");
        assert_eq!(violation["severity"], "critical");
        assert_eq!(violation["rule"], "inline_style_layout");
        assert!(violation["snippet"].as_str().unwrap().contains("120px"));
        assert!(violation["message"].as_str().unwrap().contains("width"));
    }

    #[test]
    fn test_empty_result() {
        let rendered = JsonReport::new().render_report(&AuditResult::new()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["summary"]["total_violations"], 0);
        assert!(json["violations"].as_array().unwrap().is_empty());
    }
}

//! Responsive coverage rules
//!
//! A multi-column grid declared without any breakpoint-scoped grid-cols
//! variant renders the same column count on every screen width.

use crate::rules::engine::{LineContext, Rule};
use crate::rules::patterns::{GRID_COLS_PATTERN, GRID_COLS_RESPONSIVE_ANY_PATTERN};
use crate::rules::results::{
    truncate_snippet, Category, Severity, Violation, CLASS_SNIPPET_LEN,
};
use crate::rules::extract::extract_class_values;

pub struct CoverageRules;

impl Rule for CoverageRules {
    fn category(&self) -> Category {
        Category::ResponsiveCoverage
    }

    fn evaluate(&self, ctx: &LineContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for class_value in extract_class_values(ctx.line) {
            let has_responsive_grid = GRID_COLS_RESPONSIVE_ANY_PATTERN.is_match(class_value);
            if has_responsive_grid {
                continue;
            }

            // First qualifying column count wins; one warning per token group.
            for caps in GRID_COLS_PATTERN.captures_iter(class_value) {
                let value = &caps[1];
                // Arbitrary bracket values are treated as multi-column.
                let cols: u32 = value.parse().unwrap_or(2);
                if cols > 1 {
                    violations.push(Violation::new(
                        ctx.path,
                        ctx.number,
                        Category::ResponsiveCoverage,
                        Severity::Warning,
                        "grid_cols_no_responsive",
                        &truncate_snippet(class_value, CLASS_SNIPPET_LEN),
                        format!(
                            "'grid-cols-{}' without responsive variants. Consider: grid-cols-1 md:grid-cols-{}",
                            value, value
                        ),
                    ));
                    break;
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::engine::tests::ctx_for_line;

    fn evaluate(line: &str) -> Vec<Violation> {
        CoverageRules.evaluate(&ctx_for_line(line))
    }

    #[test]
    fn test_multi_column_without_responsive_variant() {
        let violations = evaluate(r#"<div className="grid grid-cols-3 gap-4">"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "grid_cols_no_responsive");
        assert!(violations[0].message.contains("grid-cols-3"));
    }

    #[test]
    fn test_single_column_is_clean() {
        assert!(evaluate(r#"<div className="grid grid-cols-1">"#).is_empty());
    }

    #[test]
    fn test_responsive_variant_present_is_clean() {
        assert!(evaluate(r#"<div className="grid grid-cols-2 md:grid-cols-4">"#).is_empty());
    }

    #[test]
    fn test_arbitrary_responsive_variant_counts_as_coverage() {
        assert!(evaluate(r#"<div className="grid grid-cols-2 md:grid-cols-[1fr_2fr]">"#).is_empty());
    }

    #[test]
    fn test_arbitrary_value_counts_as_multi_column() {
        let violations = evaluate(r#"<div className="grid grid-cols-[200px_1fr]">"#);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_one_warning_per_token_group() {
        let violations = evaluate(r#"<div className="grid-cols-3 grid-cols-4">"#);
        assert_eq!(violations.len(), 1);
    }
}

//! Flex and grid composition rules
//!
//! The recommended responsive shapes are `flex flex-col md:flex-row` (or the
//! shorter `flex md:flex-row`, which is column on mobile) and a grid that
//! escalates its column count across breakpoints. These rules flag the
//! shapes that skip the mobile base.

use crate::config::AuditConfig;
use crate::rules::engine::{LineContext, Rule};
use crate::rules::extract::{extract_class_values, split_tokens};
use crate::rules::patterns::{GRID_COLS_NUMERIC_PATTERN, GRID_COLS_RESPONSIVE_PATTERN};
use crate::rules::results::{
    truncate_snippet, Category, Severity, Violation, CLASS_SNIPPET_LEN,
};

pub struct FlexGridRules {
    config: AuditConfig,
}

impl FlexGridRules {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn check_flex_direction(&self, class_value: &str, ctx: &LineContext, out: &mut Vec<Violation>) {
        let tokens = split_tokens(class_value);

        let has_flex = tokens.contains(&"flex");
        let has_flex_row = tokens.contains(&"flex-row");
        let has_flex_col = tokens.contains(&"flex-col");
        let has_responsive_flex_row = tokens.iter().any(|t| {
            self.config
                .split_breakpoint(t)
                .is_some_and(|(_, rest)| rest.starts_with("flex-row"))
        });

        if has_flex && has_flex_row && !has_flex_col && !has_responsive_flex_row {
            out.push(Violation::new(
                ctx.path,
                ctx.number,
                Category::FlexGridPattern,
                Severity::Warning,
                "flex_row_no_base",
                &truncate_snippet(class_value, CLASS_SNIPPET_LEN),
                "'flex-row' without 'flex-col' base. Consider: flex flex-col md:flex-row",
            ));
        }
    }

    fn check_grid_escalation(&self, class_value: &str, ctx: &LineContext, out: &mut Vec<Violation>) {
        let grid_cols: Vec<&str> = GRID_COLS_NUMERIC_PATTERN
            .captures_iter(class_value)
            .map(|caps| caps.get(1).map(|m| m.as_str()).unwrap_or_default())
            .collect();
        let responsive_count = GRID_COLS_RESPONSIVE_PATTERN.find_iter(class_value).count();

        if grid_cols.len() == 1 && responsive_count == 0 {
            let cols = grid_cols[0];
            if cols.parse::<u32>().is_ok_and(|n| n > 2) {
                out.push(Violation::new(
                    ctx.path,
                    ctx.number,
                    Category::FlexGridPattern,
                    Severity::Warning,
                    "grid_no_escalation",
                    &truncate_snippet(class_value, CLASS_SNIPPET_LEN),
                    format!(
                        "'grid-cols-{}' without breakpoint escalation. Consider: grid-cols-1 sm:grid-cols-2 md:grid-cols-{}",
                        cols, cols
                    ),
                ));
            }
        }
    }
}

impl Rule for FlexGridRules {
    fn category(&self) -> Category {
        Category::FlexGridPattern
    }

    fn evaluate(&self, ctx: &LineContext) -> Vec<Violation> {
        let mut violations = Vec::new();
        for class_value in extract_class_values(ctx.line) {
            self.check_flex_direction(class_value, ctx, &mut violations);
            self.check_grid_escalation(class_value, ctx, &mut violations);
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::engine::tests::ctx_for_line;

    fn evaluate(line: &str) -> Vec<Violation> {
        let rule = FlexGridRules::new(&AuditConfig::default());
        rule.evaluate(&ctx_for_line(line))
    }

    #[test]
    fn test_flex_row_without_column_base() {
        let violations = evaluate(r#"<div className="flex flex-row gap-2">"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "flex_row_no_base");
    }

    #[test]
    fn test_recommended_pattern_never_flagged() {
        assert!(evaluate(r#"<div className="flex flex-col md:flex-row">"#).is_empty());
        // flex md:flex-row implies column on mobile and is also fine
        assert!(evaluate(r#"<div className="flex md:flex-row">"#).is_empty());
    }

    #[test]
    fn test_flex_row_with_responsive_row_is_clean() {
        assert!(evaluate(r#"<div className="flex flex-row lg:flex-row-reverse">"#).is_empty());
    }

    #[test]
    fn test_grid_no_escalation_above_threshold() {
        let violations = evaluate(r#"<div className="grid grid-cols-4">"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "grid_no_escalation");
        assert!(violations[0].message.contains("md:grid-cols-4"));
    }

    #[test]
    fn test_grid_cols_two_is_under_threshold() {
        // grid-cols-2 alone triggers coverage, not escalation
        let violations = evaluate(r#"<div className="grid grid-cols-2">"#);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_grid_with_responsive_variant_is_clean() {
        assert!(evaluate(r#"<div className="grid grid-cols-1 md:grid-cols-3">"#).is_empty());
    }
}

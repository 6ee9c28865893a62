//! Layout anti-pattern rules
//!
//! Per token group: unqualified absolute/fixed positioning, overflow-hidden
//! on layout containers, and full-viewport height without breakpoint control.
//! Each check fires at most once per token group.

use crate::config::AuditConfig;
use crate::rules::engine::{LineContext, Rule};
use crate::rules::extract::{extract_class_values, split_tokens};
use crate::rules::patterns::LAYOUT_CONTAINER_INDICATORS;
use crate::rules::results::{
    truncate_snippet, Category, Severity, Violation, CLASS_SNIPPET_LEN,
};

pub struct LayoutRules {
    config: AuditConfig,
}

impl LayoutRules {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn has_prefixed(&self, tokens: &[&str], bases: &[&str]) -> bool {
        tokens.iter().any(|t| {
            self.config
                .split_breakpoint(t)
                .is_some_and(|(_, rest)| bases.iter().any(|b| rest.starts_with(b)))
        })
    }

    fn check_group(&self, class_value: &str, ctx: &LineContext, out: &mut Vec<Violation>) {
        let tokens = split_tokens(class_value);
        let snippet = truncate_snippet(class_value, CLASS_SNIPPET_LEN);

        let has_absolute = tokens.contains(&"absolute");
        let has_fixed = tokens.contains(&"fixed");
        let has_responsive_position =
            self.has_prefixed(&tokens, &["absolute", "fixed", "relative", "static"]);

        if (has_absolute || has_fixed) && !has_responsive_position {
            let position_utility = if has_absolute { "absolute" } else { "fixed" };
            out.push(Violation::new(
                ctx.path,
                ctx.number,
                Category::LayoutAntipattern,
                Severity::Warning,
                "position_no_responsive",
                &snippet,
                format!(
                    "'{}' used without responsive override. Consider adding breakpoint variants.",
                    position_utility
                ),
            ));
        }

        if tokens.contains(&"overflow-hidden")
            && LAYOUT_CONTAINER_INDICATORS
                .iter()
                .any(|ind| tokens.contains(ind))
        {
            out.push(Violation::new(
                ctx.path,
                ctx.number,
                Category::LayoutAntipattern,
                Severity::Warning,
                "overflow_hidden_layout",
                &snippet,
                "'overflow-hidden' on layout container may cause clipping issues.",
            ));
        }

        if tokens.contains(&"h-screen") && !self.has_prefixed(&tokens, &["h-"]) {
            out.push(Violation::new(
                ctx.path,
                ctx.number,
                Category::LayoutAntipattern,
                Severity::Warning,
                "h_screen_no_responsive",
                &snippet,
                "'h-screen' without breakpoint control may cause issues on mobile.",
            ));
        }
    }
}

impl Rule for LayoutRules {
    fn category(&self) -> Category {
        Category::LayoutAntipattern
    }

    fn evaluate(&self, ctx: &LineContext) -> Vec<Violation> {
        let mut violations = Vec::new();
        for class_value in extract_class_values(ctx.line) {
            self.check_group(class_value, ctx, &mut violations);
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::engine::tests::ctx_for_line;

    fn evaluate(line: &str) -> Vec<Violation> {
        let rule = LayoutRules::new(&AuditConfig::default());
        rule.evaluate(&ctx_for_line(line))
    }

    #[test]
    fn test_absolute_without_responsive_override() {
        let violations = evaluate(r#"<div className="absolute top-0">"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "position_no_responsive");
        assert!(violations[0].message.contains("'absolute'"));
    }

    #[test]
    fn test_fixed_named_when_absolute_missing() {
        let violations = evaluate(r#"<div className="fixed inset-0">"#);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'fixed'"));
    }

    #[test]
    fn test_responsive_position_override_is_clean() {
        assert!(evaluate(r#"<div className="absolute md:relative top-0">"#).is_empty());
        assert!(evaluate(r#"<div className="fixed lg:static">"#).is_empty());
    }

    #[test]
    fn test_overflow_hidden_on_layout_container() {
        let violations = evaluate(r#"<div className="flex overflow-hidden">"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "overflow_hidden_layout");

        let violations = evaluate(r#"<div className="mx-auto overflow-hidden">"#);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_overflow_hidden_alone_is_clean() {
        assert!(evaluate(r#"<div className="overflow-hidden rounded-lg">"#).is_empty());
    }

    #[test]
    fn test_h_screen_without_responsive_height() {
        let violations = evaluate(r#"<div className="h-screen w-full">"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "h_screen_no_responsive");
    }

    #[test]
    fn test_h_screen_with_responsive_height_is_clean() {
        assert!(evaluate(r#"<div className="h-screen md:h-auto">"#).is_empty());
    }

    #[test]
    fn test_checks_fire_at_most_once_per_group() {
        // absolute + fixed in one group still yields a single position warning
        let violations = evaluate(r#"<div className="absolute fixed">"#);
        assert_eq!(violations.len(), 1);
    }
}

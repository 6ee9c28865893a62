//! Breakpoint compliance rules
//!
//! Two concerns: legality of breakpoint prefixes (only sm/md/lg/xl are
//! allowed) and mobile-first ordering of prefixed utilities within one class
//! string.

use crate::config::AuditConfig;
use crate::rules::engine::{LineContext, Rule};
use crate::rules::extract::{extract_class_values, split_tokens};
use crate::rules::patterns::INVALID_BREAKPOINT_PATTERNS;
use crate::rules::results::{
    truncate_snippet, Category, Severity, Violation, CLASS_SNIPPET_LEN,
};

pub struct BreakpointRules {
    config: AuditConfig,
}

impl BreakpointRules {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn check_legality(&self, class_value: &str, ctx: &LineContext, out: &mut Vec<Violation>) {
        for token in split_tokens(class_value) {
            if INVALID_BREAKPOINT_PATTERNS.iter().any(|p| p.is_match(token)) {
                out.push(Violation::new(
                    ctx.path,
                    ctx.number,
                    Category::BreakpointCompliance,
                    Severity::Critical,
                    "invalid_breakpoint",
                    &truncate_snippet(class_value, CLASS_SNIPPET_LEN),
                    format!(
                        "Invalid breakpoint in '{}'. Only {} are allowed.",
                        token,
                        self.config.breakpoints.join(", ")
                    ),
                ));
            }
        }
    }

    fn check_order(&self, class_value: &str, ctx: &LineContext, out: &mut Vec<Violation>) {
        let tokens = split_tokens(class_value);

        // Ranks per base utility, in appearance order within the class string.
        let mut seen: Vec<(&str, Vec<usize>)> = Vec::new();
        for token in &tokens {
            if let Some((rank, utility)) = self.config.split_breakpoint(token) {
                match seen.iter_mut().find(|(u, _)| *u == utility) {
                    Some((_, ranks)) => ranks.push(rank),
                    None => seen.push((utility, vec![rank])),
                }
            }
        }

        for (utility, ranks) in seen {
            if ranks.len() < 2 {
                continue;
            }
            // One warning per utility at most: first inversion wins.
            if ranks.windows(2).any(|pair| pair[0] > pair[1]) {
                out.push(Violation::new(
                    ctx.path,
                    ctx.number,
                    Category::BreakpointCompliance,
                    Severity::Warning,
                    "breakpoint_order",
                    &truncate_snippet(class_value, CLASS_SNIPPET_LEN),
                    format!(
                        "Breakpoint order violation for '{}'. Use mobile-first order: {}",
                        utility,
                        self.config.breakpoints.join(" -> ")
                    ),
                ));
            }
        }
    }
}

impl Rule for BreakpointRules {
    fn category(&self) -> Category {
        Category::BreakpointCompliance
    }

    fn evaluate(&self, ctx: &LineContext) -> Vec<Violation> {
        let mut violations = Vec::new();
        for class_value in extract_class_values(ctx.line) {
            self.check_legality(class_value, ctx, &mut violations);
            self.check_order(class_value, ctx, &mut violations);
        }
        violations
    }
}

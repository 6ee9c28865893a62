//! Hardcoded size rules
//!
//! Flags bracketed literal pixel magnitudes in utility classes and inline
//! styles that pin a pixel width or height. Both families evaluate the raw
//! line, independent of each other.

use crate::rules::engine::{LineContext, Rule};
use crate::rules::patterns::{HARDCODED_PX_PATTERNS, INLINE_STYLE_PX_PATTERNS};
use crate::rules::results::{Category, Severity, Violation};

pub struct HardcodedSizeRules;

impl Rule for HardcodedSizeRules {
    fn category(&self) -> Category {
        Category::HardcodedSize
    }

    fn evaluate(&self, ctx: &LineContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for pattern in HARDCODED_PX_PATTERNS.iter() {
            if pattern.regex.is_match(ctx.line) {
                violations.push(Violation::new(
                    ctx.path,
                    ctx.number,
                    Category::HardcodedSize,
                    Severity::Warning,
                    "hardcoded_px_value",
                    ctx.line,
                    format!(
                        "Hardcoded pixel value detected ({}). Use scale tokens, %, rem, or em instead.",
                        pattern.name
                    ),
                ));
            }
        }

        // At most one inline-style hit per line, whichever variant matched.
        if INLINE_STYLE_PX_PATTERNS.iter().any(|p| p.is_match(ctx.line)) {
            violations.push(Violation::new(
                ctx.path,
                ctx.number,
                Category::HardcodedSize,
                Severity::Critical,
                "inline_style_px",
                ctx.line,
                "Inline style with pixel value detected. Use utility classes instead.",
            ));
        }

        violations
    }
}

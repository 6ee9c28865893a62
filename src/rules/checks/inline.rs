//! Inline style rules
//!
//! Four independent per-line checks: object-literal style attributes,
//! markup-attribute styles, embedded style blocks, and custom media queries.
//! A single line may trigger several of them.

use lazy_static::lazy_static;
use regex::Regex;

use crate::rules::engine::{LineContext, Rule};
use crate::rules::patterns::{
    LAYOUT_STYLE_PROPS, MEDIA_QUERY_PATTERN, STYLE_ATTR_PATTERN, STYLE_BLOCK_PATTERN,
    STYLE_OBJECT_PATTERN,
};
use crate::rules::results::{Category, Severity, Violation};

lazy_static! {
    /// One `prop\s*:` matcher per layout property, in declaration order.
    static ref LAYOUT_PROP_PATTERNS: Vec<(&'static str, Regex)> = LAYOUT_STYLE_PROPS
        .iter()
        .map(|prop| {
            (*prop, Regex::new(&format!(r"(?i){}\s*:", prop)).unwrap())
        })
        .collect();
}

pub struct InlineStyleRules;

impl InlineStyleRules {
    /// First layout property declared on the line, if any.
    fn first_layout_prop(line: &str) -> Option<&'static str> {
        LAYOUT_PROP_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(line))
            .map(|(prop, _)| *prop)
    }
}

impl Rule for InlineStyleRules {
    fn category(&self) -> Category {
        Category::InlineStyle
    }

    fn evaluate(&self, ctx: &LineContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        if STYLE_OBJECT_PATTERN.is_match(ctx.line) {
            if let Some(prop) = Self::first_layout_prop(ctx.line) {
                violations.push(Violation::new(
                    ctx.path,
                    ctx.number,
                    Category::InlineStyle,
                    Severity::Critical,
                    "inline_style_layout",
                    ctx.line,
                    format!(
                        "Inline style with layout property '{}'. Use utility classes instead.",
                        prop
                    ),
                ));
            }
        }

        if STYLE_ATTR_PATTERN.is_match(ctx.line) {
            if let Some(prop) = Self::first_layout_prop(ctx.line) {
                violations.push(Violation::new(
                    ctx.path,
                    ctx.number,
                    Category::InlineStyle,
                    Severity::Critical,
                    "inline_style_html",
                    ctx.line,
                    format!(
                        "HTML inline style with layout property '{}'. Use utility classes instead.",
                        prop
                    ),
                ));
            }
        }

        if STYLE_BLOCK_PATTERN.is_match(ctx.line) {
            violations.push(Violation::new(
                ctx.path,
                ctx.number,
                Category::InlineStyle,
                Severity::Warning,
                "style_block",
                ctx.line,
                "<style> block detected. Prefer utility classes for styling.",
            ));
        }

        if MEDIA_QUERY_PATTERN.is_match(ctx.line) {
            violations.push(Violation::new(
                ctx.path,
                ctx.number,
                Category::InlineStyle,
                Severity::Critical,
                "custom_media_query",
                ctx.line,
                "Custom @media query detected. Use breakpoint prefixes instead.",
            ));
        }

        violations
    }
}

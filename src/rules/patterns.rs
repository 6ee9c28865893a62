//! Static pattern tables for rule detection

use lazy_static::lazy_static;
use regex::Regex;

/// A named utility pattern, used for hardcoded pixel detection.
pub struct UtilityPattern {
    /// Short family name shown in messages, e.g. "w-[px]".
    pub name: &'static str,
    pub regex: Regex,
}

lazy_static! {
    /// Disallowed breakpoint syntax. Only sm, md, lg, xl are legal; anything
    /// else breakpoint-like is flagged regardless of framework validity.
    pub static ref INVALID_BREAKPOINT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"^2xl:").unwrap(),
        Regex::new(r"^3xl:").unwrap(),
        Regex::new(r"^xs:").unwrap(),
        Regex::new(r"^max-sm:").unwrap(),
        Regex::new(r"^max-md:").unwrap(),
        Regex::new(r"^max-lg:").unwrap(),
        Regex::new(r"^max-xl:").unwrap(),
        Regex::new(r"^max-2xl:").unwrap(),
        Regex::new(r"^min-\[").unwrap(),
        Regex::new(r"^max-\[").unwrap(),
    ];

    /// Utility families written with a bracketed literal pixel magnitude.
    pub static ref HARDCODED_PX_PATTERNS: Vec<UtilityPattern> = vec![
        UtilityPattern { name: "w-[px]", regex: Regex::new(r"\bw-\[\d+px\]").unwrap() },
        UtilityPattern { name: "h-[px]", regex: Regex::new(r"\bh-\[\d+px\]").unwrap() },
        UtilityPattern { name: "min-w-[px]", regex: Regex::new(r"\bmin-w-\[\d+px\]").unwrap() },
        UtilityPattern { name: "max-w-[px]", regex: Regex::new(r"\bmax-w-\[\d+px\]").unwrap() },
        UtilityPattern { name: "min-h-[px]", regex: Regex::new(r"\bmin-h-\[\d+px\]").unwrap() },
        UtilityPattern { name: "max-h-[px]", regex: Regex::new(r"\bmax-h-\[\d+px\]").unwrap() },
        UtilityPattern { name: "gap-[px]", regex: Regex::new(r"\bgap-\[\d+px\]").unwrap() },
        UtilityPattern { name: "p-[px]", regex: Regex::new(r"\bp-\[\d+px\]").unwrap() },
        UtilityPattern { name: "m-[px]", regex: Regex::new(r"\bm-\[\d+px\]").unwrap() },
        UtilityPattern { name: "top-[px]", regex: Regex::new(r"\btop-\[\d+px\]").unwrap() },
        UtilityPattern { name: "right-[px]", regex: Regex::new(r"\bright-\[\d+px\]").unwrap() },
        UtilityPattern { name: "bottom-[px]", regex: Regex::new(r"\bbottom-\[\d+px\]").unwrap() },
        UtilityPattern { name: "left-[px]", regex: Regex::new(r"\bleft-\[\d+px\]").unwrap() },
    ];

    /// Inline style declarations that set a pixel-valued width or height,
    /// in either markup-attribute or object-literal form.
    pub static ref INLINE_STYLE_PX_PATTERNS: Vec<Regex> = vec![
        Regex::new(r#"(?i)style\s*=\s*["'][^"']*width\s*:\s*\d+px"#).unwrap(),
        Regex::new(r#"(?i)style\s*=\s*["'][^"']*height\s*:\s*\d+px"#).unwrap(),
        Regex::new(r#"(?i)style\s*=\s*\{\s*\{[^}]*width\s*:\s*["']?\d+px"#).unwrap(),
        Regex::new(r#"(?i)style\s*=\s*\{\s*\{[^}]*height\s*:\s*["']?\d+px"#).unwrap(),
    ];

    /// Object-literal inline style attribute (`style={{ ... }}`).
    pub static ref STYLE_OBJECT_PATTERN: Regex =
        Regex::new(r"style\s*=\s*\{\s*\{").unwrap();

    /// Markup-attribute inline style (`style="..."` / `style='...'`).
    pub static ref STYLE_ATTR_PATTERN: Regex =
        Regex::new(r#"style\s*=\s*["']"#).unwrap();

    /// Embedded style block start tag.
    pub static ref STYLE_BLOCK_PATTERN: Regex =
        Regex::new(r"(?i)<style[^>]*>").unwrap();

    /// Custom media-query construct.
    pub static ref MEDIA_QUERY_PATTERN: Regex =
        Regex::new(r"@media\s*\(").unwrap();

    /// Grid column-count utility, numeric or arbitrary bracket value.
    pub static ref GRID_COLS_PATTERN: Regex =
        Regex::new(r"\bgrid-cols-(\d+|\[.*?\])").unwrap();

    /// Numeric grid column-count utility only.
    pub static ref GRID_COLS_NUMERIC_PATTERN: Regex =
        Regex::new(r"\bgrid-cols-(\d+)\b").unwrap();

    /// Breakpoint-scoped numeric grid column-count utility.
    pub static ref GRID_COLS_RESPONSIVE_PATTERN: Regex =
        Regex::new(r"\b(?:sm|md|lg|xl):grid-cols-(\d+)\b").unwrap();

    /// Any breakpoint-scoped grid column utility, numeric or arbitrary.
    pub static ref GRID_COLS_RESPONSIVE_ANY_PATTERN: Regex =
        Regex::new(r"\b(?:sm|md|lg|xl):grid-cols-").unwrap();
}

/// Layout property names whose presence in an inline style is flagged.
pub const LAYOUT_STYLE_PROPS: [&str; 8] = [
    "width", "height", "display", "position", "flex", "grid", "margin", "padding",
];

/// Utilities that mark a token group as a layout container.
pub const LAYOUT_CONTAINER_INDICATORS: [&str; 4] = ["flex", "grid", "container", "mx-auto"];

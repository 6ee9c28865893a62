//! Audit configuration
//!
//! All knobs the walker and the rule set depend on live in [`AuditConfig`],
//! built once at startup and passed by reference. Nothing here is mutable
//! process-wide state, so tests can substitute a stricter breakpoint list or
//! a different extension allow-list without side effects.

/// Breakpoint prefixes allowed by the audit, ordered smallest screen first.
/// Rank in this list drives the mobile-first ordering check.
pub const DEFAULT_BREAKPOINTS: [&str; 4] = ["sm", "md", "lg", "xl"];

/// File extensions scanned by default.
pub const DEFAULT_EXTENSIONS: [&str; 6] = ["tsx", "jsx", "ts", "js", "html", "mdx"];

/// Directory segments excluded from scanning.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 7] = [
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "coverage",
];

/// Immutable configuration shared by the file walker and the rule set.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Allowed breakpoint prefixes, smallest to largest.
    pub breakpoints: Vec<String>,
    /// Extension allow-list (without leading dot).
    pub extensions: Vec<String>,
    /// Path segments that exclude a file from scanning.
    pub excluded_dirs: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            breakpoints: DEFAULT_BREAKPOINTS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AuditConfig {
    /// Rank of a breakpoint prefix in the mobile-first order, if allowed.
    pub fn breakpoint_rank(&self, prefix: &str) -> Option<usize> {
        self.breakpoints.iter().position(|bp| bp == prefix)
    }

    /// Split a class token into its breakpoint prefix and base utility,
    /// if the prefix is one of the allowed breakpoints.
    pub fn split_breakpoint<'a>(&self, token: &'a str) -> Option<(usize, &'a str)> {
        let (prefix, rest) = token.split_once(':')?;
        let rank = self.breakpoint_rank(prefix)?;
        Some((rank, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakpoints_ordered() {
        let config = AuditConfig::default();
        assert_eq!(config.breakpoint_rank("sm"), Some(0));
        assert_eq!(config.breakpoint_rank("md"), Some(1));
        assert_eq!(config.breakpoint_rank("lg"), Some(2));
        assert_eq!(config.breakpoint_rank("xl"), Some(3));
        assert_eq!(config.breakpoint_rank("2xl"), None);
        assert_eq!(config.breakpoint_rank("xs"), None);
    }

    #[test]
    fn test_split_breakpoint() {
        let config = AuditConfig::default();
        assert_eq!(config.split_breakpoint("md:flex"), Some((1, "flex")));
        assert_eq!(config.split_breakpoint("flex"), None);
        assert_eq!(config.split_breakpoint("2xl:hidden"), None);
        // hover: and other non-breakpoint variants are not breakpoints
        assert_eq!(config.split_breakpoint("hover:underline"), None);
    }

    #[test]
    fn test_custom_breakpoint_list() {
        let config = AuditConfig {
            breakpoints: vec!["sm".to_string(), "lg".to_string()],
            ..AuditConfig::default()
        };
        assert_eq!(config.breakpoint_rank("lg"), Some(1));
        assert_eq!(config.breakpoint_rank("md"), None);
    }
}

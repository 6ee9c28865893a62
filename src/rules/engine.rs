//! Rule evaluation engine
//!
//! The engine walks candidate files, splits each one into lines, and runs
//! the fixed ordered rule set against every non-trivial line. Evaluation is
//! purely line/file-local, so files are audited in parallel with each file
//! producing a private violation list, merged in stable file order.

use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info};

use super::checks::{
    breakpoints::BreakpointRules, coverage::CoverageRules, flexgrid::FlexGridRules,
    hardcoded::HardcodedSizeRules, inline::InlineStyleRules, layout::LayoutRules,
};
use super::results::{AuditResult, Category, Violation};
use crate::config::AuditConfig;
use crate::scanner::FileWalker;

/// Per-line input bundle handed to every rule. Recreated per line.
pub struct LineContext<'a> {
    /// The raw line text.
    pub line: &'a str,
    /// Full content of the file, for rules needing surrounding context.
    pub content: &'a str,
    /// File path relative to the scanned root.
    pub path: &'a str,
    /// 1-based line number.
    pub number: usize,
}

/// An independent detection unit.
///
/// Rules are total functions over their input: arbitrary text yields zero or
/// more violations, never an error. New rules register by appending to
/// [`default_rules`], never by modifying the engine.
pub trait Rule: Send + Sync {
    /// Category every violation from this rule belongs to.
    fn category(&self) -> Category;

    /// Evaluate one line, returning any violations found.
    fn evaluate(&self, ctx: &LineContext) -> Vec<Violation>;
}

/// The fixed ordered rule set.
pub fn default_rules(config: &AuditConfig) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(BreakpointRules::new(config)),
        Box::new(HardcodedSizeRules),
        Box::new(LayoutRules::new(config)),
        Box::new(CoverageRules),
        Box::new(FlexGridRules::new(config)),
        Box::new(InlineStyleRules),
    ]
}

/// Main audit engine
pub struct AuditEngine {
    walker: FileWalker,
    rules: Vec<Box<dyn Rule>>,
}

impl AuditEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: AuditConfig) -> Self {
        Self {
            walker: FileWalker::new(&config),
            rules: default_rules(&config),
        }
    }

    /// Run the full audit over the tree rooted at `root`.
    ///
    /// `files_scanned` counts every path yielded by the walker, including
    /// files that later fail to read; unreadable files contribute no
    /// violations and no error.
    pub fn run(&self, root: &Path) -> AuditResult {
        let files = self.walker.walk(root);

        let mut result = AuditResult::new();
        result.files_scanned = files.len();

        let per_file: Vec<Vec<Violation>> = files
            .par_iter()
            .map(|path| self.audit_file(root, path))
            .collect();

        for violations in per_file {
            result.add_violations(violations);
        }

        info!(
            files_scanned = result.files_scanned,
            critical = result.critical_count(),
            warnings = result.warning_count(),
            "Audit complete"
        );

        result
    }

    /// Audit a single file. Read failures are swallowed: binary assets can
    /// match a scanned extension by accident.
    fn audit_file(&self, root: &Path, path: &Path) -> Vec<Violation> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable file");
                return Vec::new();
            }
        };

        let rel_path = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();

        let mut violations = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let stripped = line.trim();
            if stripped.is_empty() || stripped.starts_with("//") || stripped.starts_with("/*") {
                continue;
            }

            let ctx = LineContext {
                line,
                content: &content,
                path: &rel_path,
                number: idx + 1,
            };

            for rule in &self.rules {
                violations.extend(rule.evaluate(&ctx));
            }
        }

        debug!(
            path = %rel_path,
            violations = violations.len(),
            "File audited"
        );

        violations
    }
}

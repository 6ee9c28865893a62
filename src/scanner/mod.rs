//! Scanner module - file discovery
//!
//! Yields candidate files under a root, filtered by an extension allow-list
//! and a directory exclusion list, in lexicographic order so reports are
//! reproducible.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::AuditConfig;

/// File discovery collaborator for the audit engine.
pub struct FileWalker {
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
}

impl FileWalker {
    /// Create a walker from the audit configuration.
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            excluded_dirs: config.excluded_dirs.clone(),
        }
    }

    /// Every file under `root` whose extension is allowed and whose path
    /// contains no excluded segment, sorted lexicographically.
    pub fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry.path()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| self.has_allowed_extension(entry.path()))
            .map(|entry| entry.into_path())
            .collect();

        files.sort();
        files
    }

    fn is_excluded(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.excluded_dirs.iter().any(|dir| dir == name))
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }
}

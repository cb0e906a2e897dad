//! Directory listing for `view` on a directory target.
//!
//! The traversal sits behind a trait so hosts can swap in their own
//! implementation; the default walks natively with the `ignore` crate
//! instead of shelling out to `find`.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use super::error::EditError;

pub trait DirectoryLister: Send + Sync {
    /// List entries under `dir`, bounded in depth and excluding hidden
    /// entries. Paths are returned sorted, without `dir` itself.
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, EditError>;
}

/// Depth-limited, hidden-excluding walker built on `ignore::WalkBuilder`.
pub struct IgnoreLister {
    max_depth: usize,
}

impl Default for IgnoreLister {
    fn default() -> Self {
        Self { max_depth: 2 }
    }
}

impl IgnoreLister {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl DirectoryLister for IgnoreLister {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>, EditError> {
        let walker = WalkBuilder::new(dir)
            // Hidden entries stay excluded, but gitignore rules must not
            // apply: the listing reflects what is on disk.
            .standard_filters(false)
            .hidden(true)
            .max_depth(Some(self.max_depth))
            .build();

        let mut entries = Vec::new();
        for entry in walker {
            match entry {
                // depth 0 is `dir` itself
                Ok(e) if e.depth() > 0 => entries.push(e.into_path()),
                Ok(_) => {}
                Err(e) => tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable entry"),
            }
        }
        entries.sort();
        Ok(entries)
    }
}

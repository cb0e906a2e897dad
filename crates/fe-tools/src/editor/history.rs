//! Per-path undo history.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::error::EditError;

/// Stack of prior file contents, keyed by path.
///
/// Grows by one entry per successful mutating edit and shrinks by exactly one
/// per successful undo. State is process-local and lost on restart; the file
/// itself persists on disk. Owned by the tool instance rather than global, so
/// independent sessions do not see each other's history.
///
/// The interior mutex keeps the map coherent if a host dispatches commands
/// concurrently, but read-modify-write ordering across paths is still the
/// host's responsibility (single writer per path).
pub struct HistoryManager {
    entries: Mutex<HashMap<PathBuf, Vec<String>>>,
    max_entries: Option<usize>,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    /// Unbounded history.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_entries: None,
        }
    }

    /// History capped at `limit` entries per path; the oldest entry is
    /// dropped when the cap is exceeded.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_entries: Some(limit),
        }
    }

    pub fn push(&self, path: &Path, content: String) {
        let mut entries = self.entries.lock().unwrap();
        let stack = entries.entry(path.to_path_buf()).or_default();
        stack.push(content);
        if let Some(limit) = self.max_entries {
            if stack.len() > limit {
                stack.remove(0);
            }
        }
    }

    pub fn pop(&self, path: &Path) -> Result<String, EditError> {
        let mut entries = self.entries.lock().unwrap();
        entries
            .get_mut(path)
            .and_then(|stack| stack.pop())
            .ok_or_else(|| EditError::NoHistory(path.display().to_string()))
    }
}

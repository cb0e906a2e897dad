//! Whole-file reads and writes, with OS errors rewrapped to name the path
//! and the operation that failed.

use std::path::Path;

use tokio::fs;

use super::error::EditError;

pub async fn read(path: &Path) -> Result<String, EditError> {
    fs::read_to_string(path).await.map_err(|e| EditError::Io {
        op: "read",
        path: path.display().to_string(),
        source: e,
    })
}

/// Overwrite `path` with `content`.
///
/// This is a plain whole-file overwrite, not a temp-file-plus-rename: a crash
/// mid-write can leave the file partially written.
pub async fn write(path: &Path, content: &str) -> Result<(), EditError> {
    fs::write(path, content).await.map_err(|e| EditError::Io {
        op: "write",
        path: path.display().to_string(),
        source: e,
    })
}

//! Path preconditions checked before any I/O.

use std::path::Path;

use super::error::EditError;
use super::Command;

/// Check that `path` is a valid target for `command`. Pure check, no side
/// effects beyond `stat`.
///
/// Rules:
/// - the path must be absolute;
/// - `create` requires the path to not exist yet, every other command
///   requires it to exist;
/// - only `view` may target a directory.
pub fn validate(command: Command, path: &Path) -> Result<(), EditError> {
    if !path.is_absolute() {
        let suggestion = Path::new("/").join(path);
        return Err(EditError::NotAbsolute {
            path: path.display().to_string(),
            suggestion: suggestion.display().to_string(),
        });
    }

    let exists = path.exists();
    if command == Command::Create {
        if exists {
            return Err(EditError::AlreadyExists(path.display().to_string()));
        }
    } else if !exists {
        return Err(EditError::NotFound(path.display().to_string()));
    }

    if path.is_dir() && command != Command::View {
        return Err(EditError::IsDirectory(path.display().to_string()));
    }

    Ok(())
}

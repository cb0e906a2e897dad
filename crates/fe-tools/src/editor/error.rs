use thiserror::Error;

/// Failures the editor reports back to the calling agent.
///
/// Every variant renders as an actionable diagnostic: validation problems
/// name the offending parameter and the valid bound, replace problems list
/// the occurrence line numbers, and I/O problems name the path and the
/// operation that failed. None of these cross the tool boundary as an `Err`;
/// the dispatcher converts them into `ToolResult` failures.
#[derive(Error, Debug)]
pub enum EditError {
    #[error("Unrecognized command {0}. The allowed commands for the str_replace_editor tool are: view, create, str_replace, insert, undo_edit")]
    UnknownCommand(String),

    #[error("Parameter `{name}` is required for command: {command}")]
    MissingParameter {
        name: &'static str,
        command: &'static str,
    },

    #[error("The path {path} is not an absolute path, it should start with `/`. Maybe you meant {suggestion}?")]
    NotAbsolute { path: String, suggestion: String },

    #[error("The path {0} does not exist. Please provide a valid path.")]
    NotFound(String),

    #[error("File already exists at: {0}. Cannot overwrite files using command `create`.")]
    AlreadyExists(String),

    #[error("The path {0} is a directory and only the `view` command can be used on directories.")]
    IsDirectory(String),

    #[error("No replacement was performed, old_str `{old}` did not appear verbatim in {path}.")]
    NotPresent { old: String, path: String },

    #[error("No replacement was performed. Multiple occurrences of old_str `{old}` in lines {lines:?}. Please ensure it is unique.")]
    NotUnique { old: String, lines: Vec<usize> },

    #[error("Invalid `view_range`: {0}")]
    ViewRange(String),

    #[error("Invalid `insert_line` parameter: {line}. It should be within the range of lines of the file: [0, {max}]")]
    InsertLine { line: i64, max: usize },

    #[error("No edit history found for {0}.")]
    NoHistory(String),

    #[error("Ran into {source} while trying to {op} {path}")]
    Io {
        op: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

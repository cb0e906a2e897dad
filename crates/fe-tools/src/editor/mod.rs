//! The `str_replace_editor` tool: view, create, and edit text files with
//! line-numbered feedback and per-path undo.

mod error;
mod history;
mod render;
mod store;
mod validate;
mod walk;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use fe_core::{
    maybe_truncate, Error, PropertySchema, Tool, ToolDefinition, ToolParameters, ToolResult,
    MAX_RESPONSE_LEN,
};

pub use error::EditError;
pub use history::HistoryManager;
pub use render::{expand_tabs, render, SNIPPET_CONTEXT, TAB_WIDTH};
pub use walk::{DirectoryLister, IgnoreLister};

const TOOL_NAME: &str = "str_replace_editor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    View,
    Create,
    StrReplace,
    Insert,
    UndoEdit,
}

impl Command {
    fn parse(s: &str) -> Result<Self, EditError> {
        match s {
            "view" => Ok(Self::View),
            "create" => Ok(Self::Create),
            "str_replace" => Ok(Self::StrReplace),
            "insert" => Ok(Self::Insert),
            "undo_edit" => Ok(Self::UndoEdit),
            other => Err(EditError::UnknownCommand(other.to_string())),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::StrReplace => "str_replace",
            Self::Insert => "insert",
            Self::UndoEdit => "undo_edit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
struct EditArgs {
    command: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    file_text: Option<String>,
    #[serde(default)]
    view_range: Option<Vec<i64>>,
    #[serde(default)]
    old_str: Option<String>,
    #[serde(default)]
    new_str: Option<String>,
    #[serde(default)]
    insert_line: Option<i64>,
}

/// File editor exposed to the agent.
///
/// Stateless across calls except for the undo history, which lives for the
/// lifetime of this instance. Each host session should own its own
/// `EditTool` so sessions cannot undo each other's edits.
pub struct EditTool {
    history: HistoryManager,
    lister: Box<dyn DirectoryLister>,
}

impl Default for EditTool {
    fn default() -> Self {
        Self::new()
    }
}

impl EditTool {
    pub fn new() -> Self {
        Self {
            history: HistoryManager::new(),
            lister: Box::new(IgnoreLister::default()),
        }
    }

    pub fn with_lister(lister: Box<dyn DirectoryLister>) -> Self {
        Self {
            history: HistoryManager::new(),
            lister,
        }
    }

    /// Cap the undo history at `limit` entries per path.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = HistoryManager::with_limit(limit);
        self
    }

    async fn run(&self, args: EditArgs) -> Result<String, EditError> {
        let command = Command::parse(&args.command)?;
        let path = PathBuf::from(args.path.ok_or(EditError::MissingParameter {
            name: "path",
            command: command.as_str(),
        })?);

        tracing::debug!(command = %command, path = %path.display(), "executing edit command");
        validate::validate(command, &path)?;

        match command {
            Command::View => self.view(&path, args.view_range).await,
            Command::Create => {
                let file_text = args.file_text.ok_or(EditError::MissingParameter {
                    name: "file_text",
                    command: "create",
                })?;
                self.create(&path, &file_text).await
            }
            Command::StrReplace => {
                let old_str = args.old_str.ok_or(EditError::MissingParameter {
                    name: "old_str",
                    command: "str_replace",
                })?;
                let new_str = args.new_str.unwrap_or_default();
                self.str_replace(&path, &old_str, &new_str).await
            }
            Command::Insert => {
                let insert_line = args.insert_line.ok_or(EditError::MissingParameter {
                    name: "insert_line",
                    command: "insert",
                })?;
                let new_str = args.new_str.ok_or(EditError::MissingParameter {
                    name: "new_str",
                    command: "insert",
                })?;
                self.insert(&path, insert_line, &new_str).await
            }
            Command::UndoEdit => self.undo_edit(&path).await,
        }
    }

    async fn view(&self, path: &Path, view_range: Option<Vec<i64>>) -> Result<String, EditError> {
        if path.is_dir() {
            if view_range.is_some() {
                return Err(EditError::ViewRange(
                    "It is not allowed when `path` points to a directory.".to_string(),
                ));
            }
            let entries = self.lister.list(path)?;
            if entries.is_empty() {
                return Ok(format!(
                    "The directory {} has no visible contents.\n",
                    path.display()
                ));
            }
            let listing = entries
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            let out = format!(
                "Here's the files and directories up to 2 levels deep in {}, excluding hidden items:\n{}\n",
                path.display(),
                listing
            );
            return Ok(maybe_truncate(&out, MAX_RESPONSE_LEN).into_owned());
        }

        let content = store::read(path).await?;
        let Some(range) = view_range else {
            return Ok(render::render(&content, &path.display().to_string(), 1, true));
        };

        if range.len() != 2 {
            return Err(EditError::ViewRange(
                "It should be a list of two integers.".to_string(),
            ));
        }
        let lines: Vec<&str> = content.split('\n').collect();
        let n_lines = lines.len();
        let (start, end) = (range[0], range[1]);

        if start < 1 || start > n_lines as i64 {
            return Err(EditError::ViewRange(format!(
                "{:?}. Its first element `{}` should be within the range of lines of the file: [1, {}]",
                range, start, n_lines
            )));
        }
        if end != -1 {
            if end > n_lines as i64 {
                return Err(EditError::ViewRange(format!(
                    "{:?}. Its second element `{}` should be smaller than the number of lines in the file: `{}`",
                    range, end, n_lines
                )));
            }
            if end < start {
                return Err(EditError::ViewRange(format!(
                    "{:?}. Its second element `{}` should be larger or equal than its first `{}`",
                    range, end, start
                )));
            }
        }

        let slice = if end == -1 {
            lines[start as usize - 1..].join("\n")
        } else {
            lines[start as usize - 1..end as usize].join("\n")
        };
        Ok(render::render(
            &slice,
            &path.display().to_string(),
            start as usize,
            true,
        ))
    }

    async fn create(&self, path: &Path, file_text: &str) -> Result<String, EditError> {
        // No history entry: the file did not previously exist, so there is
        // no prior content to restore.
        store::write(path, file_text).await?;
        Ok(format!("File created successfully at: {}", path.display()))
    }

    async fn str_replace(
        &self,
        path: &Path,
        old_str: &str,
        new_str: &str,
    ) -> Result<String, EditError> {
        let content = expand_tabs(&store::read(path).await?);
        let old_str = expand_tabs(old_str);
        let new_str = expand_tabs(new_str);

        let occurrences = content.matches(old_str.as_str()).count();
        if occurrences == 0 {
            return Err(EditError::NotPresent {
                old: old_str,
                path: path.display().to_string(),
            });
        }
        if occurrences > 1 {
            let lines = content
                .split('\n')
                .enumerate()
                .filter(|(_, line)| line.contains(old_str.as_str()))
                .map(|(idx, _)| idx + 1)
                .collect();
            return Err(EditError::NotUnique {
                old: old_str,
                lines,
            });
        }

        let new_content = content.replacen(old_str.as_str(), &new_str, 1);
        self.history.push(path, content.clone());
        store::write(path, &new_content).await?;

        // Window the snippet around the line the replacement landed on.
        let replacement_line = content[..content.find(old_str.as_str()).unwrap_or(0)]
            .matches('\n')
            .count();
        let start = replacement_line.saturating_sub(SNIPPET_CONTEXT);
        let end = replacement_line + SNIPPET_CONTEXT + new_str.matches('\n').count();
        let new_lines: Vec<&str> = new_content.split('\n').collect();
        let snippet = new_lines[start..=end.min(new_lines.len() - 1)].join("\n");

        let mut msg = format!("The file {} has been edited. ", path.display());
        msg.push_str(&render::render(
            &snippet,
            &format!("a snippet of {}", path.display()),
            start + 1,
            false,
        ));
        msg.push_str("Review the changes and make sure they are as expected. Edit the file again if necessary.");
        Ok(msg)
    }

    async fn insert(
        &self,
        path: &Path,
        insert_line: i64,
        new_str: &str,
    ) -> Result<String, EditError> {
        let content = expand_tabs(&store::read(path).await?);
        let new_str = expand_tabs(new_str);

        let lines: Vec<&str> = content.split('\n').collect();
        let n_lines = lines.len();
        if insert_line < 0 || insert_line > n_lines as i64 {
            return Err(EditError::InsertLine {
                line: insert_line,
                max: n_lines,
            });
        }
        let at = insert_line as usize;

        let new_lines: Vec<&str> = new_str.split('\n').collect();
        let mut spliced: Vec<&str> = Vec::with_capacity(n_lines + new_lines.len());
        spliced.extend_from_slice(&lines[..at]);
        spliced.extend_from_slice(&new_lines);
        spliced.extend_from_slice(&lines[at..]);
        let new_content = spliced.join("\n");

        let snippet_start = at.saturating_sub(SNIPPET_CONTEXT);
        let mut snippet_lines: Vec<&str> = Vec::new();
        snippet_lines.extend_from_slice(&lines[snippet_start..at]);
        snippet_lines.extend_from_slice(&new_lines);
        snippet_lines.extend_from_slice(&lines[at..(at + SNIPPET_CONTEXT).min(n_lines)]);
        let snippet = snippet_lines.join("\n");

        self.history.push(path, content);
        store::write(path, &new_content).await?;

        let mut msg = format!("The file {} has been edited. ", path.display());
        msg.push_str(&render::render(
            &snippet,
            "a snippet of the edited file",
            snippet_start + 1,
            false,
        ));
        msg.push_str("Review the changes and make sure they are as expected (correct indentation, no duplicate lines, etc). Edit the file again if necessary.");
        Ok(msg)
    }

    async fn undo_edit(&self, path: &Path) -> Result<String, EditError> {
        let prior = self.history.pop(path)?;
        store::write(path, &prior).await?;
        Ok(format!(
            "Last edit to {} undone successfully. {}",
            path.display(),
            render::render(&prior, &path.display().to_string(), 1, true)
        ))
    }
}

#[async_trait]
impl Tool for EditTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "View, create, and edit text files with string replacement, line insertion, and undo"
    }

    fn definition(&self) -> ToolDefinition {
        let long_desc = "Custom editing tool for viewing, creating and editing files. \
            If `path` is a file, `view` displays the result of applying `cat -n`; if `path` is a \
            directory, `view` lists non-hidden files and directories up to 2 levels deep. \
            The `create` command cannot be used if `path` already exists. \
            The `old_str` parameter of `str_replace` must match exactly one location in the file; \
            include enough surrounding context to make it unique. \
            The `undo_edit` command reverts the last edit made to the file. \
            Long output is truncated and marked with `<response clipped>`.";
        ToolDefinition::new(self.name(), long_desc).with_parameters(
            ToolParameters::new()
                .add_property(
                    "command",
                    PropertySchema::enum_string(
                        "The command to run",
                        ["view", "create", "str_replace", "insert", "undo_edit"]
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    ),
                    true,
                )
                .add_property(
                    "path",
                    PropertySchema::string(
                        "Absolute path to file or directory, e.g. `/repo/file.py` or `/repo`",
                    ),
                    true,
                )
                .add_property(
                    "file_text",
                    PropertySchema::string(
                        "Required for `create`: the content of the file to be created",
                    ),
                    false,
                )
                .add_property(
                    "view_range",
                    PropertySchema::array(
                        "Optional for `view` on a file: [start, end] line range, 1-indexed; \
                         an end of -1 shows through the end of the file",
                        PropertySchema::integer("Line number"),
                    ),
                    false,
                )
                .add_property(
                    "old_str",
                    PropertySchema::string(
                        "Required for `str_replace`: the exact text to replace, which must \
                         occur exactly once in the file",
                    ),
                    false,
                )
                .add_property(
                    "new_str",
                    PropertySchema::string(
                        "Replacement text for `str_replace` (defaults to empty, i.e. deletion); \
                         required for `insert`: the text to insert",
                    ),
                    false,
                )
                .add_property(
                    "insert_line",
                    PropertySchema::integer(
                        "Required for `insert`: insert `new_str` after this line number; \
                         0 inserts before the first line",
                    ),
                    false,
                ),
        )
    }

    async fn execute(&self, arguments: Value) -> Result<ToolResult, Error> {
        let args: EditArgs = serde_json::from_value(arguments)
            .map_err(|e| Error::tool(TOOL_NAME, format!("Invalid arguments: {}", e)))?;

        match self.run(args).await {
            Ok(output) => Ok(ToolResult::success(output)),
            Err(e) => {
                tracing::warn!(error = %e, "edit command failed");
                Ok(ToolResult::failure(e.to_string()))
            }
        }
    }
}

/// Create the editor tool with its own undo history (boxed version).
pub fn create_edit_tool() -> Box<dyn Tool> {
    Box::new(EditTool::new())
}

/// Create the editor tool with its own undo history (Arc version).
pub fn create_edit_tool_arc() -> Arc<dyn Tool> {
    Arc::new(EditTool::new())
}

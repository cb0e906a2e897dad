//! fe-tools: Built-in tools for file-edit
//!
//! This crate provides the file editor exposed to LLM agents: a single
//! `str_replace_editor` tool with `view`, `create`, `str_replace`, `insert`,
//! and `undo_edit` commands, with line-numbered output and per-path undo.

pub mod editor;

pub use editor::{
    create_edit_tool, create_edit_tool_arc, DirectoryLister, EditError, EditTool, HistoryManager,
    IgnoreLister,
};

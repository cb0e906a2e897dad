//! fe-core: Core types and traits for file-edit
//!
//! This crate provides the foundational types shared by every tool exposed
//! to an agent host: the `Tool` trait, JSON-schema tool definitions, the
//! `ToolResult` payload returned to the caller, and the output truncation
//! helper applied to oversized tool output.

pub mod error;
pub mod tool;
pub mod truncate;

pub use error::Error;
pub use tool::{PropertySchema, Tool, ToolDefinition, ToolParameters, ToolRegistry, ToolResult};
pub use truncate::{maybe_truncate, MAX_RESPONSE_LEN};

pub type Result<T> = std::result::Result<T, Error>;

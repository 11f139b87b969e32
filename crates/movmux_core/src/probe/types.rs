//! Error types for probe operations.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for probing a source file.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Input file not found.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Failed to launch the external tool.
    #[error("{tool} execution failed: {message}")]
    ToolFailed { tool: String, message: String },

    /// The external tool ran but reported failure.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    /// Failed to parse tool output.
    #[error("Failed to parse {tool} output: {message}")]
    ParseError { tool: String, message: String },
}

impl ProbeError {
    /// Create a tool failure error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

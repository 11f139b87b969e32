//! Error types for a remux run.
//!
//! Errors carry context that chains through layers:
//! Run → Probe/Selection → Detail

use std::path::PathBuf;

use thiserror::Error;

use crate::probe::ProbeError;
use crate::selection::SelectionError;

/// Top-level error for one remux run. Every variant aborts the run.
#[derive(Error, Debug)]
pub enum RunError {
    /// Probing the input failed.
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// Track selection failed.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The output file cannot be created where requested.
    #[error("Output {}: {}", .path.display(), .reason)]
    OutputConflict { path: PathBuf, reason: String },

    /// An external tool could not be launched.
    #[error("{tool} execution failed: {message}")]
    ToolFailed { tool: String, message: String },

    /// An external tool ran but reported failure.
    #[error("{tool} failed with exit code {exit_code}")]
    CommandFailed { tool: String, exit_code: i32 },
}

impl RunError {
    /// Create an output conflict error.
    pub fn output_conflict(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::OutputConflict {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a tool launch error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// Result type for run operations.
pub type RunResult<T> = Result<T, RunError>;

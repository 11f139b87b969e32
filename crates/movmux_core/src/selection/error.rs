//! Error types for track selection.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors raised while building a track selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A track query found nothing.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Malformed `--tracks` token.
    #[error("Invalid track identifier '{0}' (expected N, v:N, a:N or s:N, optionally suffixed with '!')")]
    InvalidIdentifier(String),

    /// Malformed `--langs` token.
    #[error("Invalid language identifier '{0}' (expected a 2-letter code, optionally suffixed with '?', or 'any')")]
    InvalidLanguage(String),

    /// The same stream was selected twice.
    #[error("Stream {0} is already selected")]
    DuplicateSelection(String),

    /// The resolved track is not video, audio or subtitles.
    #[error("Don't know how to handle {0}")]
    UnsupportedTrack(String),

    /// The resolved track has no stream identifier to address it by.
    #[error("{0} has no stream identifier")]
    MissingStreamId(String),
}

/// Result type for selection operations.
pub type SelectionResult<T> = Result<T, SelectionError>;

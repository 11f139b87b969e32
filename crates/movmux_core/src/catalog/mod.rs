//! Indexed, read-only view over the tracks of one source file.
//!
//! The catalog answers two kinds of queries:
//!
//! - **Ordinal**: the n-th track, either globally (only tracks that have a
//!   stream identifier count) or within one track type (all tracks of that
//!   type count). The two index spaces are independent.
//! - **Best audio**: the preferred audio track, optionally restricted to a
//!   language, chosen by the cascade in [`cascade`].

mod cascade;

use thiserror::Error;

use crate::models::{Track, TrackType};

/// Errors from catalog queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An ordinal or best-match query found nothing.
    #[error("Track not found: {0}")]
    TrackNotFound(String),
}

/// Result type for catalog queries.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// All tracks of one source file, in probe order.
#[derive(Debug, Clone, Default)]
pub struct TrackCatalog {
    tracks: Vec<Track>,
}

impl TrackCatalog {
    /// Create a catalog from tracks in probe order.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// All tracks in probe order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Look up a track by ordinal.
    ///
    /// With a `track_type`, `index` counts tracks of that type only.
    /// Without one, it counts tracks that have a stream identifier.
    pub fn ordinal(&self, track_type: Option<TrackType>, index: usize) -> CatalogResult<&Track> {
        let found = match track_type {
            Some(wanted) => self
                .tracks
                .iter()
                .filter(|track| track.track_type == wanted)
                .nth(index),
            None => self
                .tracks
                .iter()
                .filter(|track| track.stream_order.is_some())
                .nth(index),
        };

        found.ok_or_else(|| {
            CatalogError::TrackNotFound(match track_type {
                Some(wanted) => format!("no {} track with index {}", wanted, index),
                None => format!("no track with index {}", index),
            })
        })
    }

    /// Pick the best audio track, optionally for one language.
    ///
    /// Candidates are narrowed by highest channel count, then lossless
    /// compression, then highest bit rate; a remaining tie goes to the
    /// first track in probe order.
    pub fn best_audio(&self, language: Option<&str>) -> CatalogResult<&Track> {
        let candidates: Vec<&Track> = self
            .tracks
            .iter()
            .filter(|track| track.track_type == TrackType::Audio)
            .filter(|track| match language {
                Some(lang) => track.language.as_deref() == Some(lang),
                None => true,
            })
            .collect();

        tracing::debug!(
            "best audio for {}: {} candidates",
            language.unwrap_or("any language"),
            candidates.len()
        );

        cascade::pick_best(candidates).ok_or_else(|| {
            CatalogError::TrackNotFound(match language {
                Some(lang) => format!("no audio track for language {}", lang),
                None => "no audio track".to_string(),
            })
        })
    }
}

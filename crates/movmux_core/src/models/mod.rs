//! Data models for movmux.
//!
//! This module contains the core data structures used throughout the crate:
//! - Enums for track types, compression modes and muxing backends
//! - Probed tracks and the per-run wrapper for admitted tracks

mod enums;
mod media;

// Re-export all public types
pub use enums::{CompressionMode, MuxerKind, TrackType};
pub use media::{SelectedTrack, Track};

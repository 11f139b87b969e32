//! Core enums used throughout the crate.

use serde::{Deserialize, Serialize};

/// Type of media track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Video,
    Audio,
    Subtitles,
    /// Menus, images, timecode tracks and anything else the probe lists.
    Other,
}

impl TrackType {
    /// Map a mediainfo `@type` value.
    ///
    /// Returns `None` for `General`, which describes the container
    /// rather than a stream.
    pub fn from_probe(kind: &str) -> Option<Self> {
        match kind {
            "General" => None,
            "Video" => Some(Self::Video),
            "Audio" => Some(Self::Audio),
            "Text" => Some(Self::Subtitles),
            _ => Some(Self::Other),
        }
    }

    /// Map the one-letter prefix of a typed track identifier (`v:0`).
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "v" => Some(Self::Video),
            "a" => Some(Self::Audio),
            "s" => Some(Self::Subtitles),
            _ => None,
        }
    }
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackType::Video => write!(f, "video"),
            TrackType::Audio => write!(f, "audio"),
            TrackType::Subtitles => write!(f, "subtitles"),
            TrackType::Other => write!(f, "other"),
        }
    }
}

/// Compression mode reported for a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Lossy,
    Lossless,
    /// Reported, but neither of the above.
    Other,
}

impl CompressionMode {
    pub fn from_probe(mode: &str) -> Self {
        match mode.trim() {
            "Lossy" => Self::Lossy,
            "Lossless" => Self::Lossless,
            _ => Self::Other,
        }
    }
}

/// External muxing backend used to produce the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MuxerKind {
    /// mkvmerge: per-type keep lists plus a global track order.
    #[default]
    #[serde(rename = "keep-list")]
    KeepList,
    /// ffmpeg: one input mapping per output stream.
    #[serde(rename = "map-list")]
    MapList,
}

impl MuxerKind {
    /// Get the name used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::KeepList => "keep-list",
            Self::MapList => "map-list",
        }
    }

    /// Get all available backends.
    pub fn all() -> &'static [MuxerKind] {
        &[Self::KeepList, Self::MapList]
    }
}

impl std::fmt::Display for MuxerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for MuxerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown muxer '{}' (expected keep-list or map-list)", s))
    }
}

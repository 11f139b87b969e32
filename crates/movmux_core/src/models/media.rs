//! Track structures: probed tracks and tracks admitted into a selection.

use super::enums::{CompressionMode, TrackType};

/// A single track within the source container, as reported by the probe.
///
/// Tracks are owned by the catalog and never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Stable stream identifier (mediainfo `StreamOrder`).
    ///
    /// Tracks without one are skipped by global ordinals and cannot be
    /// addressed in a mux command.
    pub stream_order: Option<String>,
    /// Type of track.
    pub track_type: TrackType,
    /// Two-letter language code.
    pub language: Option<String>,
    pub channels: Option<u32>,
    pub compression: Option<CompressionMode>,
    /// Raw bit rate; may be `"N / M"` for some PCM tracks.
    pub bit_rate: Option<String>,
    /// Codec family (e.g. "AC-3", "AVC").
    pub format: Option<String>,
    pub title: Option<String>,
}

impl Track {
    /// Create a track with only the required fields set.
    pub fn new(track_type: TrackType) -> Self {
        Self {
            stream_order: None,
            track_type,
            language: None,
            channels: None,
            compression: None,
            bit_rate: None,
            format: None,
            title: None,
        }
    }

    /// Set the stream identifier.
    pub fn with_stream_order(mut self, stream_order: impl Into<String>) -> Self {
        self.stream_order = Some(stream_order.into());
        self
    }

    /// Set the language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the channel count.
    pub fn with_channels(mut self, channels: u32) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Set the compression mode.
    pub fn with_compression(mut self, compression: CompressionMode) -> Self {
        self.compression = Some(compression);
        self
    }

    /// Set the raw bit rate string.
    pub fn with_bit_rate(mut self, bit_rate: impl Into<String>) -> Self {
        self.bit_rate = Some(bit_rate.into());
        self
    }

    /// Set the codec family.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Bit rate as a number, taking the first value of an `"N / M"` pair.
    pub fn bit_rate_value(&self) -> Option<u64> {
        self.bit_rate
            .as_deref()
            .and_then(|raw| raw.split('/').next())
            .and_then(|first| first.trim().parse().ok())
    }

    /// Get a display string for this track.
    pub fn display_name(&self) -> String {
        let id = self.stream_order.as_deref().unwrap_or("?");
        let lang = self.language.as_deref().unwrap_or("und");
        let mut name = format!("{} stream {} ({})", self.track_type, id, lang);
        if let Some(format) = &self.format {
            name.push_str(&format!(" {}", format));
        }
        if let Some(channels) = self.channels {
            name.push_str(&format!(" {}ch", channels));
        }
        if let Some(title) = &self.title {
            name.push_str(&format!(" - {}", title));
        }
        name
    }
}

/// A track admitted into the selection, with its output flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTrack {
    /// Copy of the catalog track.
    pub track: Track,
    /// Stream identifier, guaranteed present for admitted tracks.
    pub stream_id: String,
    pub is_default: bool,
    pub is_forced: bool,
}

impl SelectedTrack {
    /// Wrap a track that has a stream identifier.
    ///
    /// Returns `None` when the track has no `stream_order`.
    pub fn new(track: Track, is_forced: bool) -> Option<Self> {
        let stream_id = track.stream_order.clone()?;
        Some(Self {
            track,
            stream_id,
            is_default: false,
            is_forced,
        })
    }

    pub fn track_type(&self) -> TrackType {
        self.track.track_type
    }
}

//! Backend-neutral stream plan.
//!
//! Both muxer backends format the same plan, so they always select the
//! same streams in the same order with the same flags.

use serde::Serialize;

use crate::models::TrackType;
use crate::selection::FinalSelection;

/// One output stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStream {
    /// Stream identifier in the source file.
    pub stream_id: String,
    pub track_type: TrackType,
    pub is_default: bool,
    pub is_forced: bool,
}

impl PlannedStream {
    /// Disposition string as used by ffmpeg (`0` clears all flags).
    pub fn disposition(&self) -> &'static str {
        match (self.is_default, self.is_forced) {
            (true, true) => "default+forced",
            (true, false) => "default",
            (false, true) => "forced",
            (false, false) => "0",
        }
    }
}

/// Output streams in order: video, then audio, then subtitles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamPlan {
    streams: Vec<PlannedStream>,
}

impl StreamPlan {
    /// Create a plan from streams already in output order.
    pub fn new(streams: Vec<PlannedStream>) -> Self {
        Self { streams }
    }

    /// Build the plan from a finalized selection.
    pub fn from_selection(selection: &FinalSelection) -> Self {
        let streams = selection
            .iter()
            .map(|selected| PlannedStream {
                stream_id: selected.stream_id.clone(),
                track_type: selected.track_type(),
                is_default: selected.is_default,
                is_forced: selected.is_forced,
            })
            .collect();
        Self::new(streams)
    }

    pub fn streams(&self) -> &[PlannedStream] {
        &self.streams
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Compact JSON form for debug logs.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Streams of one type, in plan order.
    pub fn of_type(&self, track_type: TrackType) -> impl Iterator<Item = &PlannedStream> {
        self.streams
            .iter()
            .filter(move |stream| stream.track_type == track_type)
    }

    /// Stream identifiers of one type, in plan order.
    pub fn ids_of(&self, track_type: TrackType) -> Vec<&str> {
        self.of_type(track_type)
            .map(|stream| stream.stream_id.as_str())
            .collect()
    }
}

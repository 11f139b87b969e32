//! Accumulated track selection for one run.

use crate::catalog::TrackCatalog;
use crate::models::{SelectedTrack, Track, TrackType};

use super::error::{SelectionError, SelectionResult};

/// Tracks chosen so far, per type, in admission order.
///
/// Admission order is output order within each type. A stream can be
/// admitted at most once across all three lists.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    video: Vec<SelectedTrack>,
    audio: Vec<SelectedTrack>,
    subtitles: Vec<SelectedTrack>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn video(&self) -> &[SelectedTrack] {
        &self.video
    }

    pub fn audio(&self) -> &[SelectedTrack] {
        &self.audio
    }

    pub fn subtitles(&self) -> &[SelectedTrack] {
        &self.subtitles
    }

    /// Whether a stream is already selected in any list.
    pub fn contains(&self, stream_id: &str) -> bool {
        self.iter().any(|selected| selected.stream_id == stream_id)
    }

    /// First selected audio track with the given language.
    pub fn audio_with_language(&self, language: &str) -> Option<&SelectedTrack> {
        self.audio
            .iter()
            .find(|selected| selected.track.language.as_deref() == Some(language))
    }

    /// All selected tracks, video then audio then subtitles.
    pub fn iter(&self) -> impl Iterator<Item = &SelectedTrack> {
        self.video
            .iter()
            .chain(self.audio.iter())
            .chain(self.subtitles.iter())
    }

    /// Admit a catalog track into the list matching its type.
    ///
    /// The track is copied; the catalog is never modified.
    pub fn admit(&mut self, track: &Track, forced: bool) -> SelectionResult<()> {
        let selected = SelectedTrack::new(track.clone(), forced)
            .ok_or_else(|| SelectionError::MissingStreamId(track.display_name()))?;

        if self.contains(&selected.stream_id) {
            return Err(SelectionError::DuplicateSelection(selected.stream_id));
        }

        let list = match track.track_type {
            TrackType::Video => &mut self.video,
            TrackType::Audio => &mut self.audio,
            TrackType::Subtitles => &mut self.subtitles,
            TrackType::Other => {
                return Err(SelectionError::UnsupportedTrack(track.display_name()));
            }
        };

        tracing::debug!(
            "Selected {}{}",
            track.display_name(),
            if forced { " (forced)" } else { "" }
        );
        list.push(selected);
        Ok(())
    }

    /// Close the selection and apply output flags.
    ///
    /// With no video selected, the first video track of the catalog is
    /// used. The first video and first audio track become default; no
    /// other track does. Forced flags are kept as admitted.
    pub fn finalize(mut self, catalog: &TrackCatalog) -> SelectionResult<FinalSelection> {
        if self.video.is_empty() {
            let first_video = catalog.ordinal(Some(TrackType::Video), 0)?;
            tracing::debug!("No video selected, using {}", first_video.display_name());
            self.admit(first_video, false)?;
        }

        mark_first_default(&mut self.video);
        mark_first_default(&mut self.audio);
        for selected in &mut self.subtitles {
            selected.is_default = false;
        }

        Ok(FinalSelection {
            video: self.video,
            audio: self.audio,
            subtitles: self.subtitles,
        })
    }
}

fn mark_first_default(tracks: &mut [SelectedTrack]) {
    for (i, selected) in tracks.iter_mut().enumerate() {
        selected.is_default = i == 0;
    }
}

/// A finalized selection: at least one video track, flags resolved.
#[derive(Debug, Clone)]
pub struct FinalSelection {
    video: Vec<SelectedTrack>,
    audio: Vec<SelectedTrack>,
    subtitles: Vec<SelectedTrack>,
}

impl FinalSelection {
    pub fn video(&self) -> &[SelectedTrack] {
        &self.video
    }

    pub fn audio(&self) -> &[SelectedTrack] {
        &self.audio
    }

    pub fn subtitles(&self) -> &[SelectedTrack] {
        &self.subtitles
    }

    /// All selected tracks in output order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectedTrack> {
        self.video
            .iter()
            .chain(self.audio.iter())
            .chain(self.subtitles.iter())
    }
}

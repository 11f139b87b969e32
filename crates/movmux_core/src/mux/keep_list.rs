//! mkvmerge command options builder.
//!
//! mkvmerge is told which track ids to keep per type, the global order of
//! the kept tracks, and the default/forced flag of every kept track.
//!
//! ```text
//! mkvmerge --track-order 0:0,0:1 -o out.mkv \
//!     --video-tracks 0 --default-track-flag 0:yes --forced-display-flag 0:no \
//!     --audio-tracks 1 --default-track-flag 1:yes --forced-display-flag 1:no \
//!     --no-subtitles in.mkv
//! ```

use std::path::Path;

use crate::models::TrackType;

use super::plan::StreamPlan;

/// Per-type keep option and its "drop all" counterpart.
const TYPE_OPTIONS: [(TrackType, &str, &str); 3] = [
    (TrackType::Video, "--video-tracks", "--no-video"),
    (TrackType::Audio, "--audio-tracks", "--no-audio"),
    (TrackType::Subtitles, "--subtitle-tracks", "--no-subtitles"),
];

/// Builder for mkvmerge command-line options.
///
/// Generates the argument list for a single-input remux.
pub struct KeepListBuilder<'a> {
    plan: &'a StreamPlan,
    input_path: &'a Path,
    output_path: &'a Path,
}

impl<'a> KeepListBuilder<'a> {
    /// Create a new options builder.
    pub fn new(plan: &'a StreamPlan, input_path: &'a Path, output_path: &'a Path) -> Self {
        Self {
            plan,
            input_path,
            output_path,
        }
    }

    /// Build the complete mkvmerge argument list.
    pub fn build(&self) -> Vec<String> {
        let mut tokens = Vec::new();

        // Track order
        self.add_track_order(&mut tokens);

        // Output file
        tokens.push("-o".to_string());
        tokens.push(self.output_path.to_string_lossy().to_string());

        // Per-type selection and flags
        for (track_type, keep_option, drop_option) in TYPE_OPTIONS {
            self.add_type_options(&mut tokens, track_type, keep_option, drop_option);
        }

        tokens.push(self.input_path.to_string_lossy().to_string());

        tokens
    }

    /// Add track order option.
    fn add_track_order(&self, tokens: &mut Vec<String>) {
        if self.plan.is_empty() {
            return;
        }

        // Each entry is file_index:track_id; there is only one input file
        let order: Vec<String> = self
            .plan
            .streams()
            .iter()
            .map(|stream| format!("0:{}", stream.stream_id))
            .collect();

        tokens.push("--track-order".to_string());
        tokens.push(order.join(","));
    }

    /// Add the keep list and flags for one track type.
    fn add_type_options(
        &self,
        tokens: &mut Vec<String>,
        track_type: TrackType,
        keep_option: &str,
        drop_option: &str,
    ) {
        let ids = self.plan.ids_of(track_type);
        if ids.is_empty() {
            tokens.push(drop_option.to_string());
            return;
        }

        tokens.push(keep_option.to_string());
        tokens.push(ids.join(","));

        for stream in self.plan.of_type(track_type) {
            tokens.push("--default-track-flag".to_string());
            tokens.push(format!("{}:{}", stream.stream_id, yes_no(stream.is_default)));
            tokens.push("--forced-display-flag".to_string());
            tokens.push(format!("{}:{}", stream.stream_id, yes_no(stream.is_forced)));
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

//! ffmpeg command options builder.
//!
//! Every output stream is mapped explicitly from the single input and
//! copied without re-encoding. Output stream `n` is the n-th entry of the
//! plan, so dispositions are addressed by plan position.

use std::path::Path;

use super::plan::StreamPlan;

/// Options that keep the source timestamps, so dropping streams cannot
/// shift the kept ones relative to each other.
const TIMESTAMP_OPTIONS: [&str; 4] = ["-copyts", "-start_at_zero", "-avoid_negative_ts", "disabled"];

/// Builder for ffmpeg command-line options.
pub struct MapListBuilder<'a> {
    plan: &'a StreamPlan,
    input_path: &'a Path,
    output_path: &'a Path,
}

impl<'a> MapListBuilder<'a> {
    /// Create a new options builder.
    pub fn new(plan: &'a StreamPlan, input_path: &'a Path, output_path: &'a Path) -> Self {
        Self {
            plan,
            input_path,
            output_path,
        }
    }

    /// Build the complete ffmpeg argument list.
    pub fn build(&self) -> Vec<String> {
        let mut tokens: Vec<String> = ["-hide_banner", "-nostdin", "-n", "-i"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        tokens.push(self.input_path.to_string_lossy().to_string());

        // Input mappings, in output order
        for stream in self.plan.streams() {
            tokens.push("-map".to_string());
            tokens.push(format!("0:{}", stream.stream_id));
        }

        // Stream copy for everything
        tokens.push("-c".to_string());
        tokens.push("copy".to_string());

        // Dispositions per output stream; "0" clears flags copied from the source
        for (index, stream) in self.plan.streams().iter().enumerate() {
            tokens.push(format!("-disposition:{}", index));
            tokens.push(stream.disposition().to_string());
        }

        tokens.extend(TIMESTAMP_OPTIONS.iter().map(|s| s.to_string()));

        tokens.push(self.output_path.to_string_lossy().to_string());

        tokens
    }
}

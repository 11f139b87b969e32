//! Track probing via `mediainfo --Output=JSON`.

use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use super::types::{ProbeError, ProbeResult};
use crate::catalog::TrackCatalog;
use crate::models::{CompressionMode, Track, TrackType};

/// Parsed output from `mediainfo --Output=JSON`.
#[derive(Debug, Deserialize)]
struct MediaInfoJson {
    media: Option<MediaInfoMedia>,
}

#[derive(Debug, Deserialize)]
struct MediaInfoMedia {
    #[serde(default)]
    track: Vec<MediaInfoTrack>,
}

/// One entry of `media.track`. mediainfo reports every value as a string
/// and leaves out keys it has nothing for.
#[derive(Debug, Deserialize)]
struct MediaInfoTrack {
    #[serde(rename = "@type")]
    kind: String,
    #[serde(rename = "StreamOrder")]
    stream_order: Option<String>,
    #[serde(rename = "Language")]
    language: Option<String>,
    #[serde(rename = "Channels")]
    channels: Option<String>,
    #[serde(rename = "Compression_Mode")]
    compression_mode: Option<String>,
    #[serde(rename = "BitRate")]
    bit_rate: Option<String>,
    #[serde(rename = "Format")]
    format: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
}

impl MediaInfoTrack {
    /// Convert to a catalog track; `None` for the container summary.
    fn into_track(self) -> Option<Track> {
        let track_type = TrackType::from_probe(&self.kind)?;

        // "Channels" can be "8 / 6" for some object-based audio; take the first
        let channels = self
            .channels
            .as_deref()
            .and_then(|c| c.split('/').next())
            .and_then(|c| c.trim().parse().ok());

        Some(Track {
            stream_order: self.stream_order,
            track_type,
            language: self.language,
            channels,
            compression: self
                .compression_mode
                .as_deref()
                .map(CompressionMode::from_probe),
            bit_rate: self.bit_rate,
            format: self.format,
            title: self.title,
        })
    }
}

/// Probe a source file and build its track catalog.
///
/// `program` is the mediainfo executable (name or path).
pub fn probe_file(program: &str, path: &Path) -> ProbeResult<TrackCatalog> {
    if !path.is_file() {
        return Err(ProbeError::FileNotFound(path.to_path_buf()));
    }

    tracing::debug!("Probing file: {}", path.display());

    let output = Command::new(program)
        .arg("--Output=JSON")
        .arg(path)
        .output()
        .map_err(|e| ProbeError::tool_failed(program, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ProbeError::CommandFailed {
            tool: program.to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            message: stderr.trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let catalog = parse_mediainfo_json(&stdout)?;

    tracing::info!("{}: {} tracks", path.display(), catalog.len());
    for track in catalog.tracks() {
        tracing::debug!("  {}", track.display_name());
    }

    Ok(catalog)
}

/// Parse mediainfo JSON output into a catalog, keeping probe order.
pub fn parse_mediainfo_json(json: &str) -> ProbeResult<TrackCatalog> {
    let parsed: MediaInfoJson =
        serde_json::from_str(json).map_err(|e| ProbeError::parse_error("mediainfo", e.to_string()))?;

    let media = parsed
        .media
        .ok_or_else(|| ProbeError::parse_error("mediainfo", "no media object in output"))?;

    let tracks = media
        .track
        .into_iter()
        .filter_map(MediaInfoTrack::into_track)
        .collect();

    let catalog = TrackCatalog::new(tracks);
    if catalog.is_empty() {
        tracing::warn!("mediainfo reported no streams");
    }

    Ok(catalog)
}

//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Every key has a default, so a partial file (or none at all) is valid.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::models::MuxerKind;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// External tool locations.
    #[serde(default)]
    pub tools: ToolSettings,

    /// Muxing behavior.
    #[serde(default)]
    pub mux: MuxSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Identifies a settings section (TOML table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Tools,
    Mux,
    Logging,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Tools => "tools",
            Self::Mux => "mux",
            Self::Logging => "logging",
        }
    }

    /// Comment written above the section.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Tools => "External programs (names on PATH or absolute paths)",
            Self::Mux => "Muxing behavior",
            Self::Logging => "Logging configuration",
        }
    }

    /// Get all sections in file order.
    pub fn all() -> &'static [ConfigSection] {
        &[Self::Tools, Self::Mux, Self::Logging]
    }
}

/// Executables for the probe tool and both muxers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSettings {
    #[serde(default = "default_mediainfo")]
    pub mediainfo: String,

    #[serde(default = "default_mkvmerge")]
    pub mkvmerge: String,

    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,
}

fn default_mediainfo() -> String {
    "mediainfo".to_string()
}

fn default_mkvmerge() -> String {
    "mkvmerge".to_string()
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            mediainfo: default_mediainfo(),
            mkvmerge: default_mkvmerge(),
            ffmpeg: default_ffmpeg(),
        }
    }
}

impl ToolSettings {
    /// Executable for a muxer backend.
    pub fn muxer_program(&self, kind: MuxerKind) -> &str {
        match kind {
            MuxerKind::KeepList => &self.mkvmerge,
            MuxerKind::MapList => &self.ffmpeg,
        }
    }
}

/// Muxing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuxSettings {
    /// Backend used when `--muxer` is not given.
    #[serde(default)]
    pub default_muxer: MuxerKind,

    /// Print commands one option per line.
    #[serde(default)]
    pub show_options_pretty: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write logs to a timestamped file in this directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.tools.mkvmerge, "mkvmerge");
        assert_eq!(settings.mux.default_muxer, MuxerKind::KeepList);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let settings: Settings =
            toml::from_str("[mux]\ndefault_muxer = \"map-list\"\n[tools]\nffmpeg = \"/opt/ffmpeg\"\n")
                .unwrap();

        assert_eq!(settings.mux.default_muxer, MuxerKind::MapList);
        assert!(!settings.mux.show_options_pretty);
        assert_eq!(settings.tools.muxer_program(MuxerKind::MapList), "/opt/ffmpeg");
        assert_eq!(settings.tools.mediainfo, "mediainfo");
    }

    #[test]
    fn log_dir_is_optional() {
        let settings: Settings = toml::from_str("[logging]\nlevel = \"Debug\"\n").unwrap();
        assert_eq!(settings.logging.level, LogLevel::Debug);
        assert_eq!(settings.logging.log_dir, None);

        let out = toml::to_string_pretty(&settings).unwrap();
        assert!(!out.contains("log_dir"));
    }
}

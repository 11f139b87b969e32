//! movmux - remux a movie keeping only the tracks you ask for
//!
//! Usage:
//!   movmux input.mkv output.mkv --langs "en ja?"
//!   movmux input.mkv output.mkv --langs none --tracks "v:0 a:1!" --pretend
//!   movmux --init-config

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};

use movmux_core::config::{ConfigManager, Settings};
use movmux_core::logging::init_tracing;
use movmux_core::models::MuxerKind;
use movmux_core::orchestrator::{RemuxRequest, Remuxer};

/// Remux a movie with deterministic track selection
#[derive(Parser, Debug)]
#[command(name = "movmux", version, about)]
struct Cli {
    /// Source file
    #[arg(required_unless_present = "init_config")]
    infile: Option<PathBuf>,

    /// Destination file (must not exist)
    #[arg(required_unless_present = "init_config")]
    outfile: Option<PathBuf>,

    /// Audio languages, space separated: "en", "ja?" (optional), "any", "none"
    #[arg(long, required_unless_present = "init_config")]
    langs: Option<String>,

    /// Extra tracks, space separated: "3", "a:1", "s:0!" (forced)
    #[arg(long)]
    tracks: Option<String>,

    /// Muxer backend: keep-list (mkvmerge) or map-list (ffmpeg)
    #[arg(long)]
    muxer: Option<MuxerKind>,

    /// Print the command without running it
    #[arg(long)]
    pretend: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    quiet: u8,
}

impl Cli {
    fn verbosity(&self) -> i8 {
        let offset = i16::from(self.verbose) - i16::from(self.quiet);
        offset.clamp(i16::from(i8::MIN), i16::from(i8::MAX)) as i8
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    if cli.init_config {
        let mut config = ConfigManager::new(&config_path);
        config
            .load_or_create()
            .with_context(|| format!("Failed to create {}", config.path().display()))?;
        println!("Config: {}", config.path().display());
        return Ok(());
    }

    let (settings, config_warnings) = load_config(&config_path)?;

    let level = settings.logging.level.adjusted(cli.verbosity());
    let log_dir = settings.logging.log_dir.as_deref().map(Path::new);
    let _guard = init_tracing(level, log_dir).context("Failed to set up logging")?;
    report_config_warnings(&config_warnings);

    tracing::debug!("movmux_core {}", movmux_core::version());

    let muxer = cli.muxer.unwrap_or(settings.mux.default_muxer);
    let (Some(input), Some(output), Some(langs)) = (cli.infile, cli.outfile, cli.langs) else {
        bail!("infile, outfile and --langs are required");
    };

    let request = RemuxRequest {
        input,
        output,
        langs: split_words(&langs),
        tracks: cli.tracks.as_deref().map(split_words).unwrap_or_default(),
        muxer,
    };

    let remuxer = Remuxer::new(settings);
    let command = remuxer.prepare(&request)?;
    println!("CMD: {}", remuxer.render(&command));

    if cli.pretend {
        tracing::info!("Pretend mode, not running {}", muxer);
        return Ok(());
    }

    remuxer.execute(&command)?;
    Ok(())
}

/// Load settings, keeping load warnings until logging is set up.
fn load_config(path: &Path) -> Result<(Settings, Vec<String>)> {
    let mut config = ConfigManager::new(path);
    config
        .load_or_default()
        .with_context(|| format!("Failed to load {}", config.path().display()))?;
    let warnings = config.warnings().to_vec();
    Ok((config.into_settings(), warnings))
}

fn report_config_warnings(warnings: &[String]) {
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
}

fn split_words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

fn default_config_path() -> PathBuf {
    // XDG config dir on Linux, current dir as fallback
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("movmux").join("settings.toml")
    } else {
        PathBuf::from("settings.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    /// Log sink shared with the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_full_request() {
        let cli = Cli::try_parse_from([
            "movmux",
            "in.mkv",
            "out.mkv",
            "--langs",
            "en ja?",
            "--tracks",
            "v:0 a:1!",
            "--muxer",
            "map-list",
            "--pretend",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.infile, Some(PathBuf::from("in.mkv")));
        assert_eq!(cli.muxer, Some(MuxerKind::MapList));
        assert_eq!(split_words(cli.langs.as_deref().unwrap()), vec!["en", "ja?"]);
        assert!(cli.pretend);
        assert_eq!(cli.verbosity(), 2);
    }

    #[test]
    fn langs_required_for_remux() {
        assert!(Cli::try_parse_from(["movmux", "in.mkv", "out.mkv"]).is_err());
    }

    #[test]
    fn init_config_needs_no_files() {
        let cli = Cli::try_parse_from(["movmux", "--init-config", "-q"]).unwrap();
        assert!(cli.init_config);
        assert_eq!(cli.verbosity(), -1);
    }

    #[test]
    fn unknown_config_section_is_logged_after_setup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[tools]\nmediainfo = \"true\"\n[extra]\nk = 1\n").unwrap();

        let (settings, warnings) = load_config(&path).unwrap();
        assert_eq!(settings.tools.mediainfo, "true");

        let sink = Captured::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || report_config_warnings(&warnings));

        let logged = sink.contents();
        assert!(logged.contains("WARN"));
        assert!(logged.contains("Ignoring unknown section [extra]"));
    }

    #[test]
    fn missing_config_loads_defaults_quietly() {
        let dir = tempdir().unwrap();
        let (settings, warnings) = load_config(&dir.path().join("none.toml")).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn unknown_muxer_is_rejected() {
        assert!(Cli::try_parse_from([
            "movmux", "in.mkv", "out.mkv", "--langs", "en", "--muxer", "mp4box"
        ])
        .is_err());
    }
}

//! One remux run: probe, select, synthesize.

use std::path::PathBuf;

use crate::catalog::TrackCatalog;
use crate::config::Settings;
use crate::models::MuxerKind;
use crate::mux::{synthesize, MuxCommand, StreamPlan};
use crate::probe::probe_file;
use crate::selection::{admit_identifier, admit_language, languages_disabled, SelectionState};

use super::errors::RunResult;
use super::tools::{check_output, execute, tool_version};

/// Everything the user asked for in one run.
#[derive(Debug, Clone)]
pub struct RemuxRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Language directives, applied in order.
    pub langs: Vec<String>,
    /// Manual track identifiers, applied in order before languages.
    pub tracks: Vec<String>,
    pub muxer: MuxerKind,
}

/// Runs remux requests with the configured tools.
pub struct Remuxer {
    settings: Settings,
}

impl Remuxer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Build the mux command for a probed source. No I/O.
    ///
    /// Manual tracks are admitted first so they can pre-empt language
    /// selection; `none` among the languages skips language selection.
    pub fn plan(&self, catalog: &TrackCatalog, request: &RemuxRequest) -> RunResult<MuxCommand> {
        let mut state = SelectionState::new();

        for token in &request.tracks {
            admit_identifier(&mut state, catalog, token)?;
        }

        if languages_disabled(&request.langs) {
            tracing::info!("Language selection disabled");
        } else {
            for code in &request.langs {
                admit_language(&mut state, catalog, code)?;
            }
        }

        let selection = state.finalize(catalog)?;
        for selected in selection.iter() {
            tracing::info!(
                "Keeping {}{}{}",
                selected.track.display_name(),
                if selected.is_default { " [default]" } else { "" },
                if selected.is_forced { " [forced]" } else { "" }
            );
        }

        let plan = StreamPlan::from_selection(&selection);
        match plan.to_json() {
            Ok(json) => tracing::debug!("Stream plan: {}", json),
            Err(e) => tracing::debug!("Stream plan not dumped: {}", e),
        }

        let program = self.settings.tools.muxer_program(request.muxer);

        Ok(synthesize(
            request.muxer,
            program,
            &plan,
            &request.input,
            &request.output,
        ))
    }

    /// Probe the input and build the command, ready to execute.
    ///
    /// The output location is checked only after selection succeeded, so
    /// a failed run never touches it.
    pub fn prepare(&self, request: &RemuxRequest) -> RunResult<MuxCommand> {
        let tools = &self.settings.tools;
        let muxer = tools.muxer_program(request.muxer);

        tracing::info!(
            "Probing with {}",
            tool_version(&tools.mediainfo, "--version")?
        );
        tracing::info!(
            "Muxing with {}",
            tool_version(muxer, version_flag(request.muxer))?
        );

        let catalog = probe_file(&tools.mediainfo, &request.input)?;
        let command = self.plan(&catalog, request)?;

        check_output(&request.output)?;

        Ok(command)
    }

    /// Run a prepared command; a non-zero exit status is an error.
    pub fn execute(&self, command: &MuxCommand) -> RunResult<()> {
        execute(command)?;
        tracing::info!("Muxing finished");
        Ok(())
    }

    /// Render a command the way the settings ask for.
    pub fn render(&self, command: &MuxCommand) -> String {
        if self.settings.mux.show_options_pretty {
            command.pretty()
        } else {
            command.to_string()
        }
    }
}

/// Version query flag for a muxer backend.
fn version_flag(kind: MuxerKind) -> &'static str {
    match kind {
        MuxerKind::KeepList => "--version",
        MuxerKind::MapList => "-version",
    }
}

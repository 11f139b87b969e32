//! External tool helpers: version queries, output checks and execution.

use std::path::Path;
use std::process::Command;

use crate::mux::MuxCommand;

use super::errors::{RunError, RunResult};

/// Query a tool's version, returning its output on one line.
pub fn tool_version(program: &str, flag: &str) -> RunResult<String> {
    let output = Command::new(program)
        .arg(flag)
        .output()
        .map_err(|e| RunError::tool_failed(program, e.to_string()))?;

    if !output.status.success() {
        return Err(RunError::CommandFailed {
            tool: program.to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Check that the output can be written without clobbering anything.
///
/// Fails if the file already exists or its directory is missing. A bare
/// file name refers to the current directory.
pub fn check_output(path: &Path) -> RunResult<()> {
    if path.exists() {
        return Err(RunError::output_conflict(path, "already exists"));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(RunError::output_conflict(
            path,
            format!("directory {} doesn't exist", dir.display()),
        ));
    }

    Ok(())
}

/// Run the command with inherited stdio and wait for it.
pub fn execute(command: &MuxCommand) -> RunResult<()> {
    tracing::debug!("Executing {}", command);

    let status = Command::new(&command.program)
        .args(&command.args)
        .status()
        .map_err(|e| RunError::tool_failed(&command.program, e.to_string()))?;

    if !status.success() {
        return Err(RunError::CommandFailed {
            tool: command.program.clone(),
            exit_code: status.code().unwrap_or(-1),
        });
    }

    Ok(())
}

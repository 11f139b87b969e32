//! Run orchestration.
//!
//! A run is split in two: [`Remuxer::prepare`] probes the source, applies
//! the selection and checks the output path; [`Remuxer::execute`] hands
//! the resulting command to the muxer. Callers that only want to show the
//! command stop after `prepare`.

mod errors;
mod remux;
mod tools;

pub use errors::{RunError, RunResult};
pub use remux::{RemuxRequest, Remuxer};
pub use tools::{check_output, tool_version};

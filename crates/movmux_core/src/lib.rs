//! movmux core - track selection and remux command synthesis
//!
//! This crate holds all logic for a remux run with no CLI dependencies:
//! probing a source, selecting tracks, and building the command line for
//! either muxer backend.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod models;
pub mod mux;
pub mod orchestrator;
pub mod probe;
pub mod selection;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}

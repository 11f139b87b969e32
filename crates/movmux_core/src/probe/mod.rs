//! Source file probing.
//!
//! Runs mediainfo on the input and turns its JSON report into a
//! [`TrackCatalog`](crate::catalog::TrackCatalog). This is the only place
//! that knows the probe tool's field names.
//!
//! # Usage
//!
//! ```ignore
//! use movmux_core::probe::probe_file;
//!
//! let catalog = probe_file("mediainfo", Path::new("/movies/input.mkv"))?;
//! let first_video = catalog.ordinal(Some(TrackType::Video), 0)?;
//! ```

mod mediainfo;
mod types;

pub use mediainfo::{parse_mediainfo_json, probe_file};
pub use types::{ProbeError, ProbeResult};

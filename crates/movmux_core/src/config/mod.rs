//! Configuration management for movmux.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Defaults for every key, so the file is optional
//!
//! # Example
//!
//! ```no_run
//! use movmux_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new(".config/movmux/settings.toml");
//! config.load_or_default().unwrap();
//!
//! println!("mkvmerge: {}", config.settings().tools.mkvmerge);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LoggingSettings, MuxSettings, Settings, ToolSettings};

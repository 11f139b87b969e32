//! Logging types.

use serde::{Deserialize, Serialize};

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace-level debugging (very verbose).
    Trace,
    /// Debug information.
    Debug,
    /// General information.
    #[default]
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
}

impl LogLevel {
    /// Filter string for `EnvFilter`.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Shift the level by a verbosity offset (positive is more verbose).
    pub fn adjusted(self, offset: i8) -> Self {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = ORDER.iter().position(|l| *l == self).unwrap_or(2) as i16;
        let index = (current + i16::from(offset)).clamp(0, ORDER.len() as i16 - 1);
        ORDER[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjusted_moves_and_clamps() {
        assert_eq!(LogLevel::Info.adjusted(1), LogLevel::Debug);
        assert_eq!(LogLevel::Info.adjusted(-1), LogLevel::Warn);
        assert_eq!(LogLevel::Info.adjusted(5), LogLevel::Trace);
        assert_eq!(LogLevel::Warn.adjusted(-4), LogLevel::Error);
        assert_eq!(LogLevel::Debug.adjusted(0), LogLevel::Debug);
    }

    #[test]
    fn filter_strings_are_lowercase_names() {
        assert_eq!(LogLevel::Warn.as_filter_str(), "warn");
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
    }
}

//! Runtime preferences for ambient services
//!
//! Compile-time constants in `constants.rs` fix the language and output
//! format; everything here may vary per invocation.

/// Log level selection as seen by the configuration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

/// User-adjustable logging preferences.
#[derive(Debug, Clone)]
pub struct LoggingPreferences {
    /// Minimum severity that reaches the logger.
    pub min_log_level: LogLevel,
    /// Emit JSON events instead of human-readable lines.
    pub structured_output: bool,
    /// Attach the current input file path to every event.
    pub log_file_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: LogLevel::Info,
            structured_output: false,
            log_file_context: true,
        }
    }
}

impl LoggingPreferences {
    pub fn quiet() -> Self {
        Self {
            min_log_level: LogLevel::Error,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preferences_log_info() {
        let prefs = LoggingPreferences::default();
        assert_eq!(prefs.min_log_level, LogLevel::Info);
        assert!(!prefs.structured_output);
    }

    #[test]
    fn quiet_preferences_only_log_errors() {
        let prefs = LoggingPreferences::quiet();
        assert_eq!(prefs.min_log_level, LogLevel::Error);
    }
}

//! Logging service implementations

use super::events::{LogEvent, LogLevel};
use crate::config::runtime::LoggingPreferences;
use std::sync::{Arc, Mutex};
use std::time::UNIX_EPOCH;

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with level filtering
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    /// Create new logging service with specified logger and minimum level
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service from runtime preferences
    pub fn from_preferences(preferences: &LoggingPreferences) -> Self {
        let min_level = LogLevel::from(preferences.min_log_level);
        let logger: Arc<dyn Logger> = if preferences.structured_output {
            Arc::new(StructuredLogger)
        } else {
            Arc::new(ConsoleLogger)
        };
        Self::new(logger, min_level)
    }

    /// Check if level should be logged
    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    /// Log an event
    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }
}

/// Simple console logger
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        match event.level {
            LogLevel::Error => eprintln!("{}", event.format()),
            _ => println!("{}", event.format()),
        }
    }
}

/// Structured logger emitting one JSON object per event
pub struct StructuredLogger;

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        let timestamp_ms = event
            .timestamp
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let json = serde_json::json!({
            "timestamp_ms": timestamp_ms,
            "level": event.level.as_str(),
            "code": event.code.as_str(),
            "message": event.message,
            "line": event.line,
            "context": event.context,
        });

        match event.level {
            LogLevel::Error => eprintln!("{}", json),
            _ => println!("{}", json),
        }
    }
}

/// In-memory logger for tests
#[derive(Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().expect("memory logger poisoned").clone()
    }

    pub fn error_count(&self) -> usize {
        self.events().iter().filter(|e| e.is_error()).count()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        self.events
            .lock()
            .expect("memory logger poisoned")
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn service_filters_below_minimum_level() {
        let memory = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(memory.clone(), LogLevel::Warning);

        service.log_event(LogEvent::debug("dropped"));
        service.log_event(LogEvent::info("dropped too"));
        service.log_event(LogEvent::warning("kept"));
        service.log_event(LogEvent::error(codes::syntax::UNEXPECTED_TOKEN, "kept"));

        let events = memory.events();
        assert_eq!(events.len(), 2);
        assert_eq!(memory.error_count(), 1);
    }

    #[test]
    fn preferences_select_level() {
        let prefs = LoggingPreferences::quiet();
        let service = LoggingService::from_preferences(&prefs);
        assert!(service.should_log(LogLevel::Error));
        assert!(!service.should_log(LogLevel::Info));
    }
}

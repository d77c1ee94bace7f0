//! Global logging module
//!
//! Thread-safe global logging with per-file context and a clean macro
//! interface. Events that arrive before initialization are dropped, so
//! library consumers and tests may skip `init_global_logging` entirely.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::LoggingPreferences;
use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static FILE_CONTEXT: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging with the given preferences
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    let service = Arc::new(LoggingService::from_preferences(preferences));

    GLOBAL_LOGGER
        .set(service.clone())
        .map_err(|_| "Global logger already initialized".to_string())?;

    service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with a custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to the global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// FILE CONTEXT
// ============================================================================

/// Run `f` with the given file attached as context to every event logged
/// on this thread.
pub fn with_file_context<T>(path: PathBuf, f: impl FnOnce() -> T) -> T {
    FILE_CONTEXT.with(|ctx| *ctx.borrow_mut() = Some(path));
    let result = f();
    FILE_CONTEXT.with(|ctx| *ctx.borrow_mut() = None);
    result
}

/// Current file context, if any
pub fn current_file_context() -> Option<PathBuf> {
    FILE_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT
// ============================================================================

fn dispatch(mut event: LogEvent, context: Vec<(&str, String)>) {
    let Some(service) = try_get_global_logger() else {
        return;
    };

    for (key, value) in context {
        event = event.with_context(key, &value);
    }
    if let Some(path) = current_file_context() {
        event = event.with_context("file", &path.display().to_string());
    }

    service.log_event(event);
}

pub fn log_error_with_context(
    code: Code,
    message: &str,
    line: Option<u32>,
    context: Vec<(&str, String)>,
) {
    let mut event = LogEvent::error(code, message);
    if let Some(line) = line {
        event = event.with_line(line);
    }
    dispatch(event, context);
}

pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, String)>) {
    dispatch(LogEvent::success(code, message), context);
}

pub fn log_info_with_context(message: &str, context: Vec<(&str, String)>) {
    dispatch(LogEvent::info(message), context);
}

pub fn log_warning_with_context(message: &str, context: Vec<(&str, String)>) {
    dispatch(LogEvent::warning(message), context);
}

pub fn log_debug_with_context(message: &str, context: Vec<(&str, String)>) {
    dispatch(LogEvent::debug(message), context);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_before_init_is_a_no_op() {
        // The global logger may or may not be initialized by other tests;
        // dispatching must never panic either way.
        crate::log_info!("no-op smoke test", "key" => 1);
        crate::log_debug!("still fine");
    }

    #[test]
    fn file_context_is_scoped() {
        let path = PathBuf::from("program.tiny");
        let seen = with_file_context(path.clone(), current_file_context);
        assert_eq!(seen, Some(path));
        assert_eq!(current_file_context(), None);
    }
}

//! Compiler configuration: compile-time constants and runtime preferences

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::LoggingPreferences;

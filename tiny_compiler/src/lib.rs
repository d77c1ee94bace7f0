// Internal modules
pub mod config;
pub mod emitter;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod symbols;
pub mod syntax;
pub mod tokens;

// Re-export key types for library consumers
pub use emitter::{Emitter, EmitterError};
pub use lexical::{LexerError, Scanner};
pub use pipeline::{compile_file, compile_source, PipelineError, PipelineResult};
pub use syntax::{Parser, SyntaxError};
pub use tokens::Token;

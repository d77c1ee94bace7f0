//! Lexical analysis: on-demand tokenization of Tiny source text

mod scanner;

pub use scanner::{LexerError, Scanner};

//! Syntax analysis: predictive recursive-descent parsing fused with
//! C text emission

pub mod error;
pub mod parser;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::Parser;

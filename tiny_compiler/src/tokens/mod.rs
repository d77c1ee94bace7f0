//! Token system for the Tiny scanner

mod token;

pub use token::Token;

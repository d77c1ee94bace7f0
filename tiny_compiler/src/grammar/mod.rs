//! Tiny grammar definitions

pub mod keywords;

pub use keywords::Keyword;

//! Symbol and label bookkeeping for the parser

mod table;

pub use table::{LabelTable, SymbolTable};

//! Parse-time error types
//!
//! One enum covers the grammar errors and the semantic errors detected
//! inline during parsing; every variant carries the 1-based source line.
//! Scanner failures pass through transparently so parser methods can use
//! `?` on both.

use crate::lexical::LexerError;
use crate::logging::codes;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lexical(#[from] LexerError),

    #[error("Expected {expected}, got '{found}' at line {line}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: u32,
    },

    #[error("Invalid statement '{lexeme}' at line {line}")]
    InvalidStatement { lexeme: String, line: u32 },

    #[error("Expected comparison operator, got '{found}' at line {line}")]
    MissingComparisonOperator { found: String, line: u32 },

    #[error("Unexpected token '{found}' in expression at line {line}")]
    UnexpectedPrimary { found: String, line: u32 },

    #[error("Label '{label}' already declared at line {line}")]
    DuplicateLabel { label: String, line: u32 },

    #[error("Variable '{name}' referenced before assignment at line {line}")]
    VariableBeforeAssignment { name: String, line: u32 },

    #[error("GOTO references undeclared label '{label}' at line {line}")]
    UndeclaredLabel { label: String, line: u32 },
}

impl SyntaxError {
    /// Create unexpected token error
    pub fn unexpected_token(expected: &str, found: &str, line: u32) -> Self {
        Self::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
            line,
        }
    }

    /// Create invalid statement error
    pub fn invalid_statement(lexeme: &str, line: u32) -> Self {
        Self::InvalidStatement {
            lexeme: lexeme.to_string(),
            line,
        }
    }

    /// Create missing comparison operator error
    pub fn missing_comparison_operator(found: &str, line: u32) -> Self {
        Self::MissingComparisonOperator {
            found: found.to_string(),
            line,
        }
    }

    /// Create unexpected primary error
    pub fn unexpected_primary(found: &str, line: u32) -> Self {
        Self::UnexpectedPrimary {
            found: found.to_string(),
            line,
        }
    }

    /// Create duplicate label error
    pub fn duplicate_label(label: &str, line: u32) -> Self {
        Self::DuplicateLabel {
            label: label.to_string(),
            line,
        }
    }

    /// Create use-before-assignment error
    pub fn variable_before_assignment(name: &str, line: u32) -> Self {
        Self::VariableBeforeAssignment {
            name: name.to_string(),
            line,
        }
    }

    /// Create undeclared label error
    pub fn undeclared_label(label: &str, line: u32) -> Self {
        Self::UndeclaredLabel {
            label: label.to_string(),
            line,
        }
    }

    /// Get error code for the global logging system
    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::Lexical(err) => err.error_code(),
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::InvalidStatement { .. } => codes::syntax::INVALID_STATEMENT,
            Self::MissingComparisonOperator { .. } => codes::syntax::MISSING_COMPARISON_OPERATOR,
            Self::UnexpectedPrimary { .. } => codes::syntax::UNEXPECTED_PRIMARY,
            Self::DuplicateLabel { .. } => codes::semantic::DUPLICATE_LABEL,
            Self::VariableBeforeAssignment { .. } => codes::semantic::VARIABLE_BEFORE_ASSIGNMENT,
            Self::UndeclaredLabel { .. } => codes::semantic::UNDECLARED_LABEL,
        }
    }

    /// 1-based source line the error is attributed to
    pub fn line(&self) -> u32 {
        match self {
            Self::Lexical(err) => err.line(),
            Self::UnexpectedToken { line, .. }
            | Self::InvalidStatement { line, .. }
            | Self::MissingComparisonOperator { line, .. }
            | Self::UnexpectedPrimary { line, .. }
            | Self::DuplicateLabel { line, .. }
            | Self::VariableBeforeAssignment { line, .. }
            | Self::UndeclaredLabel { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_errors_pass_through() {
        let lex = LexerError::IllegalStringCharacter {
            character: '%',
            line: 7,
        };
        let err = SyntaxError::from(lex.clone());
        assert_eq!(err.line(), 7);
        assert_eq!(err.error_code(), lex.error_code());
        // Transparent wrapping keeps the lexical message
        assert_eq!(err.to_string(), lex.to_string());
    }

    #[test]
    fn every_variant_reports_its_line() {
        assert_eq!(SyntaxError::unexpected_token("THEN", "FOO", 2).line(), 2);
        assert_eq!(SyntaxError::invalid_statement("FOO", 3).line(), 3);
        assert_eq!(SyntaxError::missing_comparison_operator("THEN", 4).line(), 4);
        assert_eq!(SyntaxError::unexpected_primary("PRINT", 5).line(), 5);
        assert_eq!(SyntaxError::duplicate_label("l", 6).line(), 6);
        assert_eq!(SyntaxError::variable_before_assignment("x", 7).line(), 7);
        assert_eq!(SyntaxError::undeclared_label("l", 8).line(), 8);
    }

    #[test]
    fn messages_name_the_offender() {
        let err = SyntaxError::invalid_statement("WAT", 1);
        assert!(err.to_string().contains("WAT"));
        assert!(err.to_string().contains("line 1"));
    }
}

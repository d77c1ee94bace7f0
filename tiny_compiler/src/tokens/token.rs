//! Tiny token system with dedicated symbol tokens for operators
//!
//! Literal tokens carry the lexeme text they matched; operators and
//! structural markers are dedicated variants whose lexeme is fixed. The
//! parser copies lexemes verbatim into the emitted C text, so the lexeme of
//! a token is always exactly the source text it matched.

use crate::grammar::Keyword;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// End of input (sentinel reached, or an unmatched character)
    Eof,
    /// End of line
    Newline,

    // === LITERALS ===
    /// Numeric literal; at most one decimal point
    Number(String),
    /// Identifier (variable or label name), alphabetic characters only
    Identifier(String),
    /// Double-quoted string literal (contents, quotes stripped)
    StringLiteral(String),

    // === KEYWORDS ===
    Keyword(Keyword),

    // === COMPARISON OPERATORS ===
    Eq,    // =
    EqEq,  // ==
    NotEq, // !=
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // === ARITHMETIC OPERATORS ===
    Plus,     // +
    Minus,    // -
    Asterisk, // *
    Slash,    // /
}

impl Token {
    /// The literal source text this token matched.
    pub fn lexeme(&self) -> &str {
        match self {
            Self::Eof => "EOF",
            Self::Newline => "EOL",
            Self::Number(text) | Self::Identifier(text) | Self::StringLiteral(text) => text,
            Self::Keyword(kw) => kw.as_str(),
            Self::Eq => "=",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
        }
    }

    /// Short category name for diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Eof => "end of input",
            Self::Newline => "end of line",
            Self::Number(_) => "number",
            Self::Identifier(_) => "identifier",
            Self::StringLiteral(_) => "string literal",
            Self::Keyword(_) => "keyword",
            Self::Eq | Self::EqEq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt
            | Self::GtEq => "comparison operator",
            Self::Plus | Self::Minus | Self::Asterisk | Self::Slash => "arithmetic operator",
        }
    }

    /// Operators legal inside a `comparison` production.
    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self,
            Self::EqEq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Self::Keyword(kw) if *kw == keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexemes_match_source_text() {
        assert_eq!(Token::Number("3.1".into()).lexeme(), "3.1");
        assert_eq!(Token::Identifier("foo".into()).lexeme(), "foo");
        assert_eq!(Token::Keyword(Keyword::EndWhile).lexeme(), "ENDWHILE");
        assert_eq!(Token::LtEq.lexeme(), "<=");
        assert_eq!(Token::NotEq.lexeme(), "!=");
    }

    #[test]
    fn comparison_operator_set() {
        for op in [
            Token::EqEq,
            Token::NotEq,
            Token::Lt,
            Token::LtEq,
            Token::Gt,
            Token::GtEq,
        ] {
            assert!(op.is_comparison_operator(), "{op:?}");
        }
        // Bare assignment `=` is not a comparison
        assert!(!Token::Eq.is_comparison_operator());
        assert!(!Token::Plus.is_comparison_operator());
    }

    #[test]
    fn keyword_predicate_matches_exactly() {
        let token = Token::Keyword(Keyword::Print);
        assert!(token.is_keyword(Keyword::Print));
        assert!(!token.is_keyword(Keyword::Input));
        assert!(!Token::Identifier("PRINT".into()).is_keyword(Keyword::Print));
    }
}

//! Tiny keyword set
//!
//! Keywords are uppercase words with a fixed classification. The scanner
//! seeds its word table with these at construction; once a word is
//! classified it keeps that classification for the rest of the run.

use serde::{Deserialize, Serialize};

/// The eleven Tiny keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === STATEMENT HEADS ===
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    While,

    // === BLOCK STRUCTURE ===
    Then,
    EndIf,
    Repeat,
    EndWhile,
}

impl Keyword {
    /// Get the exact string representation as it appears in Tiny source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Label => "LABEL",
            Self::Goto => "GOTO",
            Self::Print => "PRINT",
            Self::Input => "INPUT",
            Self::Let => "LET",
            Self::If => "IF",
            Self::While => "WHILE",
            Self::Then => "THEN",
            Self::EndIf => "ENDIF",
            Self::Repeat => "REPEAT",
            Self::EndWhile => "ENDWHILE",
        }
    }

    /// Parse a source word into a keyword, if it is one
    pub fn from_str(word: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kw| kw.as_str() == word)
    }

    /// Complete keyword set, used to seed the scanner's word table
    pub const fn all() -> [Keyword; 11] {
        [
            Self::Label,
            Self::Goto,
            Self::Print,
            Self::Input,
            Self::Let,
            Self::If,
            Self::While,
            Self::Then,
            Self::EndIf,
            Self::Repeat,
            Self::EndWhile,
        ]
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

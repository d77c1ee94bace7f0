//! Character-level scanner producing one token per call
//!
//! The scanner is constructed from the complete source text, which the
//! caller terminates with `SOURCE_SENTINEL`. Tokens are produced lazily;
//! only the parser's single token of lookahead is ever live.

use crate::config::compile_time::lexical::{ILLEGAL_STRING_CHARACTERS, SOURCE_SENTINEL};
use crate::grammar::Keyword;
use crate::logging::codes;
use crate::tokens::Token;
use std::collections::HashMap;

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    #[error("Illegal character '{}' in string at line {line}", .character.escape_default())]
    IllegalStringCharacter { character: char, line: u32 },
}

impl LexerError {
    pub fn error_code(&self) -> codes::Code {
        match self {
            LexerError::IllegalStringCharacter { .. } => codes::lexical::ILLEGAL_STRING_CHARACTER,
        }
    }

    /// 1-based source line the error occurred on
    pub fn line(&self) -> u32 {
        match self {
            LexerError::IllegalStringCharacter { line, .. } => *line,
        }
    }
}

/// On-demand tokenizer with one character of internal lookahead.
///
/// Owns the keyword/identifier table: the table is pre-seeded with the
/// keyword set and grows as new identifiers are first seen. Once a word is
/// classified its classification never changes.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    peek: char,
    line: u32,
    word_table: HashMap<String, Token>,
}

impl Scanner {
    /// Build a scanner over `source`, whose final character must be the
    /// sentinel appended by the caller.
    pub fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let peek = chars.first().copied().unwrap_or(SOURCE_SENTINEL);

        let mut word_table = HashMap::new();
        for keyword in Keyword::all() {
            word_table.insert(keyword.as_str().to_string(), Token::Keyword(keyword));
        }

        Self {
            chars,
            pos: 0,
            peek,
            line: 1,
            word_table,
        }
    }

    /// Current unconsumed character
    pub fn peek(&self) -> char {
        self.peek
    }

    /// Current 1-based source line
    pub fn line(&self) -> u32 {
        self.line
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.peek = self
            .chars
            .get(self.pos)
            .copied()
            .unwrap_or(SOURCE_SENTINEL);
    }

    fn peek_next(&self) -> char {
        self.chars
            .get(self.pos + 1)
            .copied()
            .unwrap_or(SOURCE_SENTINEL)
    }

    fn skip_whitespace(&mut self) {
        while self.peek == ' ' || self.peek == '\t' || self.peek == '\r' {
            self.advance();
        }
    }

    /// Produce the next token, advancing past it.
    pub fn scan(&mut self) -> Result<Token, LexerError> {
        loop {
            self.skip_whitespace();

            if self.peek == '\n' {
                self.line += 1;
                self.advance();
                return Ok(Token::Newline);
            }

            // Comments consume through the newline and produce no token;
            // the line counter still advances.
            if self.peek == '#' {
                while self.peek != '\n' && self.peek != SOURCE_SENTINEL {
                    self.advance();
                }
                if self.peek == SOURCE_SENTINEL {
                    return Ok(Token::Eof);
                }
                self.line += 1;
                self.advance();
                continue;
            }

            break;
        }

        if self.peek.is_ascii_digit() {
            return Ok(self.scan_number());
        }

        if self.peek.is_ascii_alphabetic() {
            return Ok(self.scan_word());
        }

        match self.peek {
            '<' => Ok(self.scan_two_char_operator(Token::LtEq, Token::Lt)),
            '>' => Ok(self.scan_two_char_operator(Token::GtEq, Token::Gt)),
            '=' => Ok(self.scan_two_char_operator(Token::EqEq, Token::Eq)),
            '!' => {
                if self.peek_next() == '=' {
                    self.advance();
                    self.advance();
                    Ok(Token::NotEq)
                } else {
                    // A lone '!' matches nothing in the grammar
                    Ok(Token::Eof)
                }
            }
            '+' => {
                self.advance();
                Ok(Token::Plus)
            }
            '-' => {
                self.advance();
                Ok(Token::Minus)
            }
            '*' => {
                self.advance();
                Ok(Token::Asterisk)
            }
            '/' => {
                self.advance();
                Ok(Token::Slash)
            }
            '"' => self.scan_string(),
            // Sentinel, or any character with no token rule
            _ => Ok(Token::Eof),
        }
    }

    /// Numeric literal: digits with at most one decimal point. A second
    /// decimal point ends the number instead of erroring.
    fn scan_number(&mut self) -> Token {
        let mut text = String::new();
        let mut seen_dot = false;

        loop {
            if self.peek == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            }
            text.push(self.peek);
            self.advance();

            if !self.peek.is_ascii_digit() && self.peek != '.' {
                break;
            }
        }

        Token::Number(text)
    }

    /// Identifier or keyword: alphabetic characters only, classified
    /// through the word table and memoized on first sight.
    fn scan_word(&mut self) -> Token {
        let mut word = String::new();
        while self.peek.is_ascii_alphabetic() {
            word.push(self.peek);
            self.advance();
        }

        if let Some(token) = self.word_table.get(&word) {
            return token.clone();
        }

        let token = Token::Identifier(word.clone());
        self.word_table.insert(word, token.clone());
        token
    }

    fn scan_two_char_operator(&mut self, with_eq: Token, without: Token) -> Token {
        self.advance();
        if self.peek == '=' {
            self.advance();
            with_eq
        } else {
            without
        }
    }

    /// String literal delimited by double quotes. Control characters,
    /// backslash, and percent are illegal inside; reaching the sentinel
    /// yields end-of-input rather than an error.
    fn scan_string(&mut self) -> Result<Token, LexerError> {
        self.advance(); // opening quote
        let mut text = String::new();

        loop {
            let ch = self.peek;
            if ch == '"' {
                self.advance();
                return Ok(Token::StringLiteral(text));
            }
            if ch == SOURCE_SENTINEL {
                return Ok(Token::Eof);
            }
            if ILLEGAL_STRING_CHARACTERS.contains(&ch) {
                return Err(LexerError::IllegalStringCharacter {
                    character: ch,
                    line: self.line,
                });
            }
            text.push(ch);
            self.advance();
        }
    }
}

//! Recursive-descent parser fused with C emission
//!
//! One token of lookahead drives statement dispatch; every recognized
//! construct immediately appends its translation to the emitter, so no AST
//! exists beyond the call stack. Expression text is emitted left-to-right
//! as it is recognized, making the body buffer character-for-character
//! isomorphic to the source expression.
//!
//! Any lexical, syntax, or semantic error aborts the parse immediately;
//! no output is produced for a malformed program.

use crate::config::compile_time::emit::{
    C_EPILOGUE, C_NUMERIC_PRINT_CLOSE, C_NUMERIC_PRINT_OPEN, C_PROLOGUE, C_VARIABLE_TYPE,
};
use crate::emitter::Emitter;
use crate::grammar::Keyword;
use crate::lexical::Scanner;
use crate::log_debug;
use crate::symbols::{LabelTable, SymbolTable};
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::Token;

pub struct Parser<'a> {
    scanner: Scanner,
    emitter: &'a mut Emitter,
    symbols: SymbolTable,
    labels: LabelTable,
    lookahead: Token,
}

impl<'a> Parser<'a> {
    /// Build a parser over `scanner`, priming one token of lookahead.
    /// Fails if the very first token is a lexical error.
    pub fn new(mut scanner: Scanner, emitter: &'a mut Emitter) -> SyntaxResult<Self> {
        let lookahead = scanner.scan()?;
        Ok(Self {
            scanner,
            emitter,
            symbols: SymbolTable::new(),
            labels: LabelTable::new(),
            lookahead,
        })
    }

    /// Variables assigned so far
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Labels declared and referenced so far
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Current 1-based source line
    pub fn line(&self) -> u32 {
        self.scanner.line()
    }

    // ========================================================================
    // Grammar
    // ========================================================================

    /// program ::= statement* EOF
    ///
    /// Emits the fixed prologue to the header and the fixed epilogue to the
    /// body, then validates that every GOTO target was declared somewhere
    /// in the program (forward references are legal).
    pub fn program(&mut self) -> SyntaxResult<()> {
        log_debug!("Starting program parse");

        for line in C_PROLOGUE {
            self.emitter.header_line(line);
        }

        // Blank lines before the first statement
        while self.lookahead == Token::Newline {
            self.advance()?;
        }

        while self.lookahead != Token::Eof {
            self.statement()?;
        }

        for line in C_EPILOGUE {
            self.emitter.emit_line(line);
        }

        if let Some(&label) = self.labels.undeclared_references().first() {
            return Err(SyntaxError::undeclared_label(label, self.scanner.line()));
        }

        Ok(())
    }

    fn statement(&mut self) -> SyntaxResult<()> {
        log_debug!("Parsing statement",
            "head" => self.lookahead.lexeme(),
            "line" => self.scanner.line()
        );

        match self.lookahead.clone() {
            // PRINT (string | expression)
            Token::Keyword(Keyword::Print) => {
                self.advance()?;
                if let Token::StringLiteral(text) = self.lookahead.clone() {
                    self.emitter.emit_line(&format!("printf(\"{}\\n\");", text));
                    self.advance()?;
                } else {
                    self.emitter.emit(C_NUMERIC_PRINT_OPEN);
                    self.expression()?;
                    self.emitter.emit_line(C_NUMERIC_PRINT_CLOSE);
                }
            }

            // IF comparison THEN nl statement* ENDIF
            Token::Keyword(Keyword::If) => {
                self.emitter.emit("if(");
                self.advance()?;
                self.comparison()?;
                self.expect_keyword(Keyword::Then)?;
                self.newline()?;
                self.emitter.emit_line("){");
                while !self.lookahead.is_keyword(Keyword::EndIf) {
                    self.statement()?;
                }
                self.emitter.emit_line("}");
                self.expect_keyword(Keyword::EndIf)?;
            }

            // WHILE comparison REPEAT nl statement* ENDWHILE
            Token::Keyword(Keyword::While) => {
                self.emitter.emit("while(");
                self.advance()?;
                self.comparison()?;
                self.expect_keyword(Keyword::Repeat)?;
                self.newline()?;
                self.emitter.emit_line("){");
                while !self.lookahead.is_keyword(Keyword::EndWhile) {
                    self.statement()?;
                }
                self.emitter.emit_line("}");
                self.expect_keyword(Keyword::EndWhile)?;
            }

            // LABEL ident
            Token::Keyword(Keyword::Label) => {
                self.advance()?;
                // Duplicate check happens before the identifier is consumed
                // so the error is attributed to the declaration line
                let Token::Identifier(name) = self.lookahead.clone() else {
                    return Err(SyntaxError::unexpected_token(
                        "identifier",
                        self.lookahead.lexeme(),
                        self.scanner.line(),
                    ));
                };
                if !self.labels.declare(&name) {
                    return Err(SyntaxError::duplicate_label(&name, self.scanner.line()));
                }
                self.emitter.emit_line(&format!("{}:", name));
                self.advance()?;
            }

            // GOTO ident; target validity is checked at the end of program()
            Token::Keyword(Keyword::Goto) => {
                self.advance()?;
                let name = self.expect_identifier()?;
                self.labels.reference(&name);
                self.emitter.emit_line(&format!("goto {};", name));
            }

            // LET ident = expression
            Token::Keyword(Keyword::Let) => {
                self.advance()?;
                let name = self.expect_identifier()?;
                self.declare_variable(&name);
                self.emitter.emit(&format!("{} = ", name));
                self.expect_eq()?;
                self.expression()?;
                self.emitter.emit_line(";");
            }

            // INPUT ident: guarded read resetting the variable to zero and
            // flushing the rest of the input line on failure
            Token::Keyword(Keyword::Input) => {
                self.advance()?;
                let name = self.expect_identifier()?;
                self.declare_variable(&name);
                self.emitter
                    .emit_line(&format!("if(0 == scanf(\"%f\", &{})) {{", name));
                self.emitter.emit_line(&format!("{} = 0;", name));
                self.emitter.emit_line("scanf(\"%*s\");");
                self.emitter.emit_line("}");
            }

            other => {
                return Err(SyntaxError::invalid_statement(
                    other.lexeme(),
                    self.scanner.line(),
                ));
            }
        }

        self.newline()
    }

    /// At least one end-of-line token; further blank lines collapse.
    fn newline(&mut self) -> SyntaxResult<()> {
        if self.lookahead != Token::Newline {
            return Err(SyntaxError::unexpected_token(
                "end of line",
                self.lookahead.lexeme(),
                self.scanner.line(),
            ));
        }
        self.advance()?;
        while self.lookahead == Token::Newline {
            self.advance()?;
        }
        Ok(())
    }

    /// expression ::= term (('+' | '-') term)*
    fn expression(&mut self) -> SyntaxResult<()> {
        self.term()?;
        while matches!(self.lookahead, Token::Plus | Token::Minus) {
            self.emit_lookahead();
            self.advance()?;
            self.term()?;
        }
        Ok(())
    }

    /// term ::= unary (('*' | '/') unary)*
    fn term(&mut self) -> SyntaxResult<()> {
        self.unary()?;
        while matches!(self.lookahead, Token::Asterisk | Token::Slash) {
            self.emit_lookahead();
            self.advance()?;
            self.unary()?;
        }
        Ok(())
    }

    /// unary ::= ('+' | '-')? primary
    fn unary(&mut self) -> SyntaxResult<()> {
        if matches!(self.lookahead, Token::Plus | Token::Minus) {
            self.emit_lookahead();
            self.advance()?;
        }
        self.primary()
    }

    /// primary ::= number | ident
    ///
    /// Identifiers must already be in the symbol set: a variable may be
    /// read only after an assignment or INPUT statement.
    fn primary(&mut self) -> SyntaxResult<()> {
        match self.lookahead.clone() {
            Token::Number(text) => {
                self.emitter.emit(&text);
                self.advance()?;
            }
            Token::Identifier(name) => {
                if !self.symbols.is_assigned(&name) {
                    return Err(SyntaxError::variable_before_assignment(
                        &name,
                        self.scanner.line(),
                    ));
                }
                self.emitter.emit(&name);
                self.advance()?;
            }
            other => {
                return Err(SyntaxError::unexpected_primary(
                    other.lexeme(),
                    self.scanner.line(),
                ));
            }
        }
        Ok(())
    }

    /// comparison ::= expression (compOp expression)+
    ///
    /// At least one comparison operator is mandatory; a bare expression is
    /// never a valid condition.
    fn comparison(&mut self) -> SyntaxResult<()> {
        self.expression()?;

        if !self.lookahead.is_comparison_operator() {
            return Err(SyntaxError::missing_comparison_operator(
                self.lookahead.lexeme(),
                self.scanner.line(),
            ));
        }

        while self.lookahead.is_comparison_operator() {
            self.emit_lookahead();
            self.advance()?;
            self.expression()?;
        }
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn advance(&mut self) -> SyntaxResult<()> {
        self.lookahead = self.scanner.scan()?;
        Ok(())
    }

    /// Copy the current token's lexeme into the body buffer.
    fn emit_lookahead(&mut self) {
        self.emitter.emit(self.lookahead.lexeme());
    }

    /// Record an assignment target, declaring it in the header on first sight.
    fn declare_variable(&mut self, name: &str) {
        if self.symbols.declare(name) {
            self.emitter
                .header_line(&format!("{} {};", C_VARIABLE_TYPE, name));
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> SyntaxResult<()> {
        if self.lookahead.is_keyword(keyword) {
            self.advance()
        } else {
            Err(SyntaxError::unexpected_token(
                keyword.as_str(),
                self.lookahead.lexeme(),
                self.scanner.line(),
            ))
        }
    }

    fn expect_identifier(&mut self) -> SyntaxResult<String> {
        if let Token::Identifier(name) = self.lookahead.clone() {
            self.advance()?;
            Ok(name)
        } else {
            Err(SyntaxError::unexpected_token(
                "identifier",
                self.lookahead.lexeme(),
                self.scanner.line(),
            ))
        }
    }

    fn expect_eq(&mut self) -> SyntaxResult<()> {
        if self.lookahead == Token::Eq {
            self.advance()
        } else {
            Err(SyntaxError::unexpected_token(
                "=",
                self.lookahead.lexeme(),
                self.scanner.line(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::compile_time::lexical::SOURCE_SENTINEL;
    use assert_matches::assert_matches;

    const PROLOGUE: &str = "#include <stdio.h>\nint main(void){\n";
    const EPILOGUE: &str = "return 0;\n}\n";

    fn transpile(source: &str) -> SyntaxResult<String> {
        let mut text = source.to_string();
        text.push(SOURCE_SENTINEL);

        let mut emitter = Emitter::new();
        let mut parser = Parser::new(Scanner::new(&text), &mut emitter)?;
        parser.program()?;
        Ok(emitter.output())
    }

    #[test]
    fn print_string_end_to_end() {
        let output = transpile("PRINT \"HI\"\n").unwrap();
        // Prologue, formatted print, epilogue; no declarations in the header
        assert_eq!(output, format!("{PROLOGUE}printf(\"HI\\n\");\n{EPILOGUE}"));
    }

    #[test]
    fn empty_program_is_just_prologue_and_epilogue() {
        let output = transpile("").unwrap();
        assert_eq!(output, format!("{PROLOGUE}{EPILOGUE}"));
    }

    #[test]
    fn let_declares_once_and_print_reads() {
        let output = transpile("LET x = 1\nPRINT x\nLET x = 2\n").unwrap();
        assert_eq!(
            output,
            format!(
                "{PROLOGUE}float x;\nx = 1;\nprintf(\"%.2f\\n\", (float)(x));\nx = 2;\n{EPILOGUE}"
            )
        );
    }

    #[test]
    fn print_before_assignment_is_an_error() {
        let err = transpile("PRINT x\n").unwrap_err();
        assert_matches!(err, SyntaxError::VariableBeforeAssignment { ref name, line: 1 } if name == "x");
    }

    #[test]
    fn forward_goto_compiles_cleanly() {
        let output = transpile("GOTO skip\nLABEL skip\nPRINT \"A\"\n").unwrap();
        assert!(output.contains("goto skip;\n"));
        assert!(output.contains("skip:\n"));
    }

    #[test]
    fn goto_without_label_fails_after_full_parse() {
        // The whole program parses and the epilogue is emitted before the
        // label-consistency check runs
        let err = transpile("GOTO missing\nPRINT \"A\"\n").unwrap_err();
        assert_matches!(err, SyntaxError::UndeclaredLabel { ref label, .. } if label == "missing");
    }

    #[test]
    fn duplicate_label_fails_at_second_declaration() {
        let err = transpile("LABEL l\nPRINT \"A\"\nLABEL l\n").unwrap_err();
        assert_matches!(err, SyntaxError::DuplicateLabel { ref label, line: 3 } if label == "l");
    }

    #[test]
    fn if_wraps_translated_comparison() {
        let output = transpile("IF 1 == 1 THEN\nPRINT \"Y\"\nENDIF\n").unwrap();
        assert_eq!(
            output,
            format!("{PROLOGUE}if(1==1){{\nprintf(\"Y\\n\");\n}}\n{EPILOGUE}")
        );
    }

    #[test]
    fn bare_condition_requires_comparison_operator() {
        let err = transpile("IF 1 THEN\nPRINT \"Y\"\nENDIF\n").unwrap_err();
        assert_matches!(err, SyntaxError::MissingComparisonOperator { line: 1, .. });
    }

    #[test]
    fn chained_comparisons_are_legal() {
        let output = transpile("IF 1 < 2 < 3 THEN\nPRINT \"Y\"\nENDIF\n").unwrap();
        assert!(output.contains("if(1<2<3){"));
    }

    #[test]
    fn while_emits_loop_wrapping_block() {
        let output = transpile("LET i = 0\nWHILE i < 5 REPEAT\nLET i = i + 1\nENDWHILE\n").unwrap();
        assert_eq!(
            output,
            format!("{PROLOGUE}float i;\ni = 0;\nwhile(i<5){{\ni = i+1;\n}}\n{EPILOGUE}")
        );
    }

    #[test]
    fn input_emits_guarded_read() {
        let output = transpile("INPUT n\n").unwrap();
        assert_eq!(
            output,
            format!(
                "{PROLOGUE}float n;\nif(0 == scanf(\"%f\", &n)) {{\nn = 0;\nscanf(\"%*s\");\n}}\n{EPILOGUE}"
            )
        );
    }

    #[test]
    fn expression_text_is_isomorphic_to_source() {
        let output = transpile("LET a = 1\nLET b = 2\nLET c = a*2+-b/3\n").unwrap();
        assert!(output.contains("c = a*2+-b/3;\n"));
    }

    #[test]
    fn unary_sign_is_emitted() {
        let output = transpile("LET a = -1\n").unwrap();
        assert!(output.contains("a = -1;\n"));
    }

    #[test]
    fn invalid_statement_names_the_lexeme() {
        let err = transpile("FROB 1\n").unwrap_err();
        assert_matches!(err, SyntaxError::InvalidStatement { ref lexeme, line: 1 } if lexeme == "FROB");
    }

    #[test]
    fn missing_then_is_unexpected_token() {
        let err = transpile("IF 1 == 1\nPRINT \"Y\"\nENDIF\n").unwrap_err();
        assert_matches!(
            err,
            SyntaxError::UnexpectedToken { ref expected, .. } if expected == "THEN"
        );
    }

    #[test]
    fn statements_require_a_terminating_newline() {
        let err = transpile("LET a = 1 PRINT a\n").unwrap_err();
        assert_matches!(err, SyntaxError::UnexpectedToken { ref expected, .. } if expected == "end of line");
    }

    #[test]
    fn blank_lines_between_statements_collapse() {
        let output = transpile("\n\nLET a = 1\n\n\nPRINT a\n\n").unwrap();
        assert!(output.contains("a = 1;\nprintf("));
    }

    #[test]
    fn nested_blocks_translate_inside_out() {
        let source = "LET i = 0\nWHILE i < 3 REPEAT\nIF i == 1 THEN\nPRINT \"mid\"\nENDIF\nLET i = i + 1\nENDWHILE\n";
        let output = transpile(source).unwrap();
        assert!(output.contains("while(i<3){\nif(i==1){\nprintf(\"mid\\n\");\n}\n"));
    }

    #[test]
    fn lexical_error_surfaces_through_parse() {
        let err = transpile("PRINT \"a%b\"\n").unwrap_err();
        assert_matches!(err, SyntaxError::Lexical(_));
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn symbol_and_label_counts_are_tracked() {
        let mut text = "LET a = 1\nLET b = 2\nLABEL top\nGOTO top\n".to_string();
        text.push(SOURCE_SENTINEL);

        let mut emitter = Emitter::new();
        let mut parser = Parser::new(Scanner::new(&text), &mut emitter).unwrap();
        parser.program().unwrap();

        assert_eq!(parser.symbols().len(), 2);
        assert_eq!(parser.labels().declared_count(), 1);
        assert_eq!(parser.labels().referenced_count(), 1);
    }
}

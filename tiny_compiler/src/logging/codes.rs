//! Diagnostic codes and classification
//!
//! Single source of truth for every code this compiler can report, with a
//! description registry used by the driver's error output.

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub mod lexical {
    use super::Code;

    pub const ILLEGAL_STRING_CHARACTER: Code = Code::new("L001");
}

pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("S001");
    pub const INVALID_STATEMENT: Code = Code::new("S002");
    pub const MISSING_COMPARISON_OPERATOR: Code = Code::new("S003");
    pub const UNEXPECTED_PRIMARY: Code = Code::new("S004");
}

pub mod semantic {
    use super::Code;

    pub const DUPLICATE_LABEL: Code = Code::new("M001");
    pub const VARIABLE_BEFORE_ASSIGNMENT: Code = Code::new("M002");
    pub const UNDECLARED_LABEL: Code = Code::new("M003");
}

pub mod file_processing {
    use super::Code;

    pub const UNREADABLE_INPUT: Code = Code::new("F001");
    pub const INVALID_ENCODING: Code = Code::new("F002");
}

pub mod emit {
    use super::Code;

    pub const OUTPUT_UNWRITABLE: Code = Code::new("E001");
}

pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("OK000");
    pub const PARSE_COMPLETE: Code = Code::new("OK001");
    pub const OUTPUT_WRITTEN: Code = Code::new("OK002");
    pub const TOOLCHAIN_INVOKED: Code = Code::new("OK003");
}

/// Human-readable description for a code.
pub fn get_description(code: &str) -> &'static str {
    match code {
        "L001" => "Illegal character inside a string literal",
        "S001" => "Unexpected token",
        "S002" => "Invalid statement",
        "S003" => "Missing comparison operator",
        "S004" => "Token cannot start a primary expression",
        "M001" => "Label declared more than once",
        "M002" => "Variable referenced before assignment",
        "M003" => "GOTO references an undeclared label",
        "F001" => "Input file cannot be opened",
        "F002" => "Input file is not valid UTF-8",
        "E001" => "Output file cannot be opened for writing",
        "OK000" => "Logging system initialized",
        "OK001" => "Parse and translation completed",
        "OK002" => "Output file written",
        "OK003" => "External toolchain invoked",
        "W000" | "I000" | "D000" => "Generic diagnostic",
        _ => "Unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stage_code_has_a_description() {
        let codes = [
            lexical::ILLEGAL_STRING_CHARACTER,
            syntax::UNEXPECTED_TOKEN,
            syntax::INVALID_STATEMENT,
            syntax::MISSING_COMPARISON_OPERATOR,
            syntax::UNEXPECTED_PRIMARY,
            semantic::DUPLICATE_LABEL,
            semantic::VARIABLE_BEFORE_ASSIGNMENT,
            semantic::UNDECLARED_LABEL,
            file_processing::UNREADABLE_INPUT,
            file_processing::INVALID_ENCODING,
            emit::OUTPUT_UNWRITABLE,
            success::PARSE_COMPLETE,
            success::OUTPUT_WRITTEN,
        ];

        for code in codes {
            assert_ne!(get_description(code.as_str()), "Unknown error", "{code}");
        }
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(get_description("Z999"), "Unknown error");
    }
}

//! C text emitter
//!
//! Two append-only buffers: the header holds the fixed prologue and one
//! declaration line per first-seen variable, the body holds translated
//! statements. Final output is header followed by body. The buffers are
//! never edited after append.

use crate::logging::codes;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Emitter I/O errors
#[derive(Debug, thiserror::Error)]
pub enum EmitterError {
    #[error("Could not open output file {path}: {source}")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EmitterError {
    pub fn error_code(&self) -> codes::Code {
        match self {
            EmitterError::OutputUnwritable { .. } => codes::emit::OUTPUT_UNWRITABLE,
        }
    }
}

/// Append-only two-buffer emitter.
#[derive(Debug, Default)]
pub struct Emitter {
    header: String,
    body: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text to the body buffer verbatim.
    pub fn emit(&mut self, code: &str) {
        self.body.push_str(code);
    }

    /// Append text plus one newline to the body buffer.
    pub fn emit_line(&mut self, code: &str) {
        self.body.push_str(code);
        self.body.push('\n');
    }

    /// Append text plus one newline to the header buffer.
    pub fn header_line(&mut self, code: &str) {
        self.header.push_str(code);
        self.header.push('\n');
    }

    /// Assemble the final program text: header then body.
    pub fn output(&self) -> String {
        let mut out = String::with_capacity(self.header.len() + self.body.len());
        out.push_str(&self.header);
        out.push_str(&self.body);
        out
    }

    /// Write the assembled output to `path`.
    pub fn write_output_file(&self, path: &Path) -> Result<(), EmitterError> {
        fs::write(path, self.output()).map_err(|source| EmitterError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn output_is_header_then_body() {
        let mut emitter = Emitter::new();
        emitter.emit_line("body();");
        emitter.header_line("#include <stdio.h>");
        emitter.header_line("float x;");

        assert_eq!(emitter.output(), "#include <stdio.h>\nfloat x;\nbody();\n");
    }

    #[test]
    fn emit_appends_without_newline() {
        let mut emitter = Emitter::new();
        emitter.emit("a");
        emitter.emit("+b");
        emitter.emit_line(";");
        assert_eq!(emitter.output(), "a+b;\n");
    }

    #[test]
    fn writes_output_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.c");

        let mut emitter = Emitter::new();
        emitter.header_line("int main(void){");
        emitter.emit_line("}");
        emitter.write_output_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "int main(void){\n}\n");
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.c");

        let emitter = Emitter::new();
        let err = emitter.write_output_file(&path).unwrap_err();
        assert_matches!(err, EmitterError::OutputUnwritable { .. });
        assert_eq!(err.error_code(), codes::emit::OUTPUT_UNWRITABLE);
    }
}

//! Source file loading
//!
//! Reads the whole input file, validates the encoding, and appends the
//! scanner's sentinel so the lexical stage never reads past the end of its
//! backing storage.

use crate::config::compile_time::lexical::SOURCE_SENTINEL;
use crate::log_debug;
use crate::logging::codes;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File processing errors
#[derive(Debug, thiserror::Error)]
pub enum FileProcessorError {
    #[error("Could not open input file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input file {path} is not valid UTF-8")]
    InvalidEncoding { path: PathBuf },
}

impl FileProcessorError {
    pub fn error_code(&self) -> codes::Code {
        match self {
            FileProcessorError::Unreadable { .. } => codes::file_processing::UNREADABLE_INPUT,
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
        }
    }
}

/// Metadata recorded while loading a source file
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub path: PathBuf,
    /// Size in bytes, before the sentinel is appended
    pub size: u64,
    pub line_count: usize,
}

/// A loaded source file, sentinel-terminated and ready for scanning
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub text: String,
    pub metadata: FileMetadata,
}

impl SourceFile {
    /// Wrap raw source text (used for in-memory compilation and for the
    /// zero-length fallback when the input is unreadable).
    pub fn from_text(text: &str, path: PathBuf) -> Self {
        let size = text.len() as u64;
        let line_count = text.lines().count();

        let mut terminated = text.to_string();
        terminated.push(SOURCE_SENTINEL);

        Self {
            text: terminated,
            metadata: FileMetadata {
                path,
                size,
                line_count,
            },
        }
    }
}

/// Load a Tiny source file from disk.
pub fn load_source(path: &Path) -> Result<SourceFile, FileProcessorError> {
    let bytes = fs::read(path).map_err(|source| FileProcessorError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| FileProcessorError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    let source = SourceFile::from_text(&text, path.to_path_buf());
    log_debug!("Loaded source file",
        "file" => source.metadata.path.display(),
        "size_bytes" => source.metadata.size,
        "line_count" => source.metadata.line_count
    );

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_file_and_appends_one_sentinel() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("program.tiny");
        fs::write(&path, "PRINT \"HI\"\n").unwrap();

        let source = load_source(&path).unwrap();
        assert!(source.text.ends_with(SOURCE_SENTINEL));
        assert_eq!(source.text.matches(SOURCE_SENTINEL).count(), 1);
        assert_eq!(source.metadata.size, 11);
        assert_eq!(source.metadata.line_count, 1);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.tiny");

        let err = load_source(&path).unwrap_err();
        assert_matches!(err, FileProcessorError::Unreadable { .. });
        assert_eq!(err.error_code(), codes::file_processing::UNREADABLE_INPUT);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.tiny");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = load_source(&path).unwrap_err();
        assert_matches!(err, FileProcessorError::InvalidEncoding { .. });
    }

    #[test]
    fn from_text_counts_lines() {
        let source = SourceFile::from_text("a\nb\nc\n", PathBuf::from("<memory>"));
        assert_eq!(source.metadata.line_count, 3);
        assert_eq!(source.metadata.size, 6);
    }
}

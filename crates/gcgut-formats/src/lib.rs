pub mod detect;
pub mod fasta;

use gcgut_core::SequenceRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Fasta,
    Unknown,
}

/// Parse uploaded content and return the first record it holds
pub fn load_record(content: &str) -> Result<SequenceRecord, ParseError> {
    match detect::detect_format(content) {
        FileFormat::Fasta => fasta::load_first_record(content),
        FileFormat::Unknown => Err(ParseError::InvalidFormat(
            "Unsupported or unrecognized file format".to_string(),
        )),
    }
}

/// Read a file from disk and return its first record
pub fn load_record_from_path(
    path: impl AsRef<std::path::Path>,
) -> Result<SequenceRecord, ParseError> {
    let content = std::fs::read_to_string(path)?;
    load_record(&content)
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Sequence is empty")]
    EmptySequence,
    #[error("{parameter} {value} is out of range ({min}..={max})")]
    OutOfRange {
        parameter: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    #[error("Symbol at position {position} is not a single-byte base")]
    NonAsciiSymbol { position: usize },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

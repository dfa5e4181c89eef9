use gcgut_core::AnalysisError;
use gcgut_formats::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to parse upload: {0}")]
    Parse(#[from] ParseError),
    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("No sequence loaded")]
    NoRecordLoaded,
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

pub mod codon;
pub mod composition;
pub mod error;
pub mod mutation;
pub mod operations;
pub mod search;
pub mod sequence;

pub use composition::{analyze_composition, classify, Classification, CompositionStats};
pub use error::{AnalysisError, Result};
pub use sequence::*;

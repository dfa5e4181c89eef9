pub mod commands;
pub mod config;
pub mod dto;
pub mod error;
pub mod report;
pub mod session;

pub use config::{mutation_position_bounds, AnalysisParams};
pub use dto::AnalysisReport;
pub use error::SessionError;
pub use report::analyze_record;
pub use session::Session;

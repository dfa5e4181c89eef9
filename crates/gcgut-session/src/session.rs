use gcgut_core::SequenceRecord;
use log::info;
use rand::Rng;
use uuid::Uuid;

use crate::config::AnalysisParams;
use crate::dto::{AnalysisReport, LoadSummaryDto};
use crate::error::SessionError;
use crate::report::analyze_record;

/// The currently loaded upload.
#[derive(Debug, Clone)]
pub struct LoadedRecord {
    pub upload_id: Uuid,
    pub record: SequenceRecord,
}

/// Holds at most one record between interactions.
///
/// A new upload always replaces the previous one; a failed upload leaves the
/// session empty so stale data is never analysed.
#[derive(Debug, Default)]
pub struct Session {
    loaded: Option<LoadedRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, content: &str) -> Result<LoadSummaryDto, SessionError> {
        self.loaded = None;
        let record = gcgut_formats::load_record(content)?;
        Ok(self.replace(record))
    }

    /// Install an already parsed record
    pub fn load_record(&mut self, record: SequenceRecord) -> LoadSummaryDto {
        self.replace(record)
    }

    fn replace(&mut self, record: SequenceRecord) -> LoadSummaryDto {
        let upload_id = Uuid::new_v4();
        let message = format!("Sequence loaded: {} ({} bases)", record.id, record.len());
        info!("{message}");

        let summary = LoadSummaryDto {
            upload_id: upload_id.to_string(),
            id: record.id.clone(),
            description: record.description.clone(),
            length: record.len(),
            message,
        };
        self.loaded = Some(LoadedRecord { upload_id, record });
        summary
    }

    pub fn loaded(&self) -> Option<&LoadedRecord> {
        self.loaded.as_ref()
    }

    pub fn record(&self) -> Option<&SequenceRecord> {
        self.loaded.as_ref().map(|l| &l.record)
    }

    pub fn clear(&mut self) {
        self.loaded = None;
    }

    /// Re-evaluate every analysis for the loaded record.
    pub fn analyze<R: Rng>(
        &self,
        params: &AnalysisParams,
        rng: &mut R,
    ) -> Result<AnalysisReport, SessionError> {
        let record = self.record().ok_or(SessionError::NoRecordLoaded)?;
        analyze_record(record, params, rng)
    }
}

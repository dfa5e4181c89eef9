use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::operations::gc_percent;

/// GC% above which a sequence is classified as high-GC.
pub const HIGH_GC_THRESHOLD: f64 = 55.0;
/// GC% below which a sequence is classified as low-GC.
pub const LOW_GC_THRESHOLD: f64 = 40.0;

/// Per-base counts for the four canonical nucleotides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseCounts {
    pub a: usize,
    pub t: usize,
    pub g: usize,
    pub c: usize,
}

impl BaseCounts {
    pub fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }

    /// Counts in display order A, T, G, C
    pub fn as_pairs(&self) -> [(char, usize); 4] {
        [('A', self.a), ('T', self.t), ('G', self.g), ('C', self.c)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionStats {
    pub length: usize,
    pub counts: BaseCounts,
    /// Symbols outside A/T/G/C
    pub other: usize,
    pub gc_percent: f64,
    pub at_percent: f64,
}

/// Count A/T/G/C by exact match and derive GC% and AT%.
///
/// Length counts bytes, so a multi-byte character adds to `other` once per
/// byte.
/// Matching is case-sensitive: callers pass the already-uppercased sequence
/// held by a [`SequenceRecord`](crate::SequenceRecord).
pub fn analyze_composition(seq: &str) -> Result<CompositionStats> {
    if seq.is_empty() {
        return Err(AnalysisError::EmptySequence);
    }

    let mut counts = BaseCounts::default();
    for b in seq.bytes() {
        match b {
            b'A' => counts.a += 1,
            b'T' => counts.t += 1,
            b'G' => counts.g += 1,
            b'C' => counts.c += 1,
            _ => {}
        }
    }

    let length = seq.len();
    Ok(CompositionStats {
        length,
        counts,
        other: length - counts.total(),
        gc_percent: gc_percent(seq),
        at_percent: 100.0 * (counts.a + counts.t) as f64 / length as f64,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    HighGC,
    LowGC,
    Intermediate,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::HighGC => "Likely Probiotic (High GC%)",
            Classification::LowGC => "Possibly Pathogenic (Low GC%)",
            Classification::Intermediate => "Intermediate Classification",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Both thresholds are strict, so exactly 40% and 55% are intermediate.
pub fn classify(gc_percent: f64) -> Classification {
    if gc_percent > HIGH_GC_THRESHOLD {
        Classification::HighGC
    } else if gc_percent < LOW_GC_THRESHOLD {
        Classification::LowGC
    } else {
        Classification::Intermediate
    }
}

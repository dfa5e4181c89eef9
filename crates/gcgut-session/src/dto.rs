//! Flat, JSON-friendly DTOs for the presentation layer.

use gcgut_core::codon::CodonCount;
use gcgut_core::mutation::Mutation;
use gcgut_core::operations::GcWindow;
use gcgut_core::{Classification, CompositionStats, SequenceRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceDto {
    pub id: String,
    pub description: String,
    pub sequence: String,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummaryDto {
    pub upload_id: String,
    pub id: String,
    pub description: String,
    pub length: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseCountDto {
    pub base: char,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionDto {
    pub length: usize,
    pub counts: Vec<BaseCountDto>,
    pub other: usize,
    pub gc_percent: f64,
    pub at_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationDto {
    pub kind: Classification,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcWindowDto {
    pub position: usize,
    pub gc_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifDto {
    pub motif: String,
    pub positions: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationDto {
    pub position: usize,
    pub original_base: char,
    pub mutated_base: char,
    pub mutated_sequence: String,
    pub context_start: usize,
    pub original_context: String,
    pub mutated_context: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodonCountDto {
    pub codon: String,
    pub count: usize,
}

/// Everything one interaction renders, computed in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub record_id: String,
    pub composition: CompositionDto,
    pub classification: ClassificationDto,
    pub window_size: usize,
    pub sliding_gc: Vec<GcWindowDto>,
    pub motif: MotifDto,
    pub mutation: MutationDto,
    pub reverse_complement: String,
    /// Sorted by descending count, ties in first-seen order
    pub codon_usage: Vec<CodonCountDto>,
    pub protein: String,
}

// Conversion from core types to DTOs
impl From<&SequenceRecord> for SequenceDto {
    fn from(rec: &SequenceRecord) -> Self {
        SequenceDto {
            id: rec.id.clone(),
            description: rec.description.clone(),
            sequence: rec.sequence.clone(),
            length: rec.len(),
        }
    }
}

impl From<&CompositionStats> for CompositionDto {
    fn from(s: &CompositionStats) -> Self {
        CompositionDto {
            length: s.length,
            counts: s
                .counts
                .as_pairs()
                .iter()
                .map(|&(base, count)| BaseCountDto { base, count })
                .collect(),
            other: s.other,
            gc_percent: s.gc_percent,
            at_percent: s.at_percent,
        }
    }
}

impl From<Classification> for ClassificationDto {
    fn from(c: Classification) -> Self {
        ClassificationDto {
            kind: c,
            label: c.label().to_string(),
        }
    }
}

impl From<&GcWindow> for GcWindowDto {
    fn from(w: &GcWindow) -> Self {
        GcWindowDto {
            position: w.position,
            gc_percent: w.gc_percent,
        }
    }
}

impl From<&CodonCount> for CodonCountDto {
    fn from(c: &CodonCount) -> Self {
        CodonCountDto {
            codon: c.codon.clone(),
            count: c.count,
        }
    }
}

impl MutationDto {
    pub fn from_mutation(m: &Mutation, flank: usize) -> Self {
        let ctx = m.context(flank);
        MutationDto {
            position: m.position,
            original_base: m.original_base,
            mutated_base: m.mutated_base,
            mutated_sequence: m.mutated_sequence.clone(),
            context_start: ctx.start,
            original_context: ctx.original,
            mutated_context: ctx.mutated,
            description: m.describe(),
        }
    }
}

use crate::dto::{ClassificationDto, CodonCountDto, CompositionDto, GcWindowDto, MutationDto};
use gcgut_core::sequence::normalize;
use gcgut_core::{analyze_composition, classify as classify_gc, codon, mutation, operations, search};
use rand::Rng;

pub fn reverse_complement(sequence: String) -> String {
    operations::reverse_complement(&normalize(&sequence))
}

pub fn translate(sequence: String) -> String {
    operations::translate(&normalize(&sequence))
}

pub fn gc_content(sequence: String) -> Result<CompositionDto, String> {
    let seq = normalize(&sequence);
    analyze_composition(&seq)
        .map(|stats| CompositionDto::from(&stats))
        .map_err(|e| e.to_string())
}

pub fn sliding_gc(sequence: String, window_size: usize) -> Vec<GcWindowDto> {
    operations::sliding_gc(&normalize(&sequence), window_size)
        .iter()
        .map(GcWindowDto::from)
        .collect()
}

pub fn find_motif(sequence: String, motif: String) -> Vec<usize> {
    search::find_motif(&normalize(&sequence), &motif)
}

pub fn codon_usage(sequence: String) -> Vec<CodonCountDto> {
    codon::tabulate_codons(&normalize(&sequence))
        .sorted_by_count()
        .iter()
        .map(CodonCountDto::from)
        .collect()
}

pub fn simulate_mutation<R: Rng>(
    sequence: String,
    position: usize,
    flank: usize,
    rng: &mut R,
) -> Result<MutationDto, String> {
    let seq = normalize(&sequence);
    mutation::simulate_mutation(&seq, position, rng)
        .map(|m| MutationDto::from_mutation(&m, flank))
        .map_err(|e| e.to_string())
}

pub fn classify(gc_percent: f64) -> ClassificationDto {
    ClassificationDto::from(classify_gc(gc_percent))
}

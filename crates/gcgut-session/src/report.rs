use gcgut_core::codon::tabulate_codons;
use gcgut_core::mutation::simulate_mutation;
use gcgut_core::operations::{reverse_complement, sliding_gc, translate};
use gcgut_core::search::find_motif;
use gcgut_core::{analyze_composition, classify, SequenceRecord};
use log::info;
use rand::Rng;

use crate::config::AnalysisParams;
use crate::dto::{
    AnalysisReport, ClassificationDto, CodonCountDto, CompositionDto, GcWindowDto, MotifDto,
    MutationDto,
};
use crate::error::SessionError;

/// Run every analysis against `record` with the current parameters.
///
/// Composition runs first, so an empty sequence short-circuits the whole
/// pass with `EmptySequence` before any other view is computed.
pub fn analyze_record<R: Rng>(
    record: &SequenceRecord,
    params: &AnalysisParams,
    rng: &mut R,
) -> Result<AnalysisReport, SessionError> {
    params.validate()?;

    let seq = record.sequence.as_str();
    let composition = analyze_composition(seq)?;
    let classification = classify(composition.gc_percent);
    let mutation = simulate_mutation(seq, params.mutation_position, rng)?;

    let motif = params.motif.to_uppercase();
    let positions = find_motif(seq, &motif);

    let sliding: Vec<GcWindowDto> = sliding_gc(seq, params.window_size)
        .iter()
        .map(GcWindowDto::from)
        .collect();

    let codon_usage = tabulate_codons(seq)
        .sorted_by_count()
        .iter()
        .map(CodonCountDto::from)
        .collect();

    info!(
        "Analysed '{}': GC {:.2}% ({}), {} motif hit(s) for {}",
        record.id,
        composition.gc_percent,
        classification.label(),
        positions.len(),
        motif
    );

    Ok(AnalysisReport {
        record_id: record.id.clone(),
        composition: CompositionDto::from(&composition),
        classification: ClassificationDto::from(classification),
        window_size: params.window_size,
        sliding_gc: sliding,
        motif: MotifDto { motif, positions },
        mutation: MutationDto::from_mutation(&mutation, params.context_flank),
        reverse_complement: reverse_complement(seq),
        codon_usage,
        protein: translate(seq),
    })
}

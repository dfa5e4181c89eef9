//! Single-base substitution with an injected random source.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Canonical bases in the order alternatives are drawn from.
pub const CANONICAL_BASES: [char; 4] = ['A', 'T', 'G', 'C'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    pub position: usize,
    pub original_base: char,
    pub mutated_base: char,
    pub mutated_sequence: String,
}

/// The neighbourhood of a mutation site before and after substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationContext {
    /// Position of the first symbol shown
    pub start: usize,
    pub original: String,
    pub mutated: String,
}

impl Mutation {
    /// Up to `flank` symbols either side of the site, clamped at the ends.
    pub fn context(&self, flank: usize) -> MutationContext {
        let bytes = self.mutated_sequence.as_bytes();
        let start = self.position.saturating_sub(flank).min(bytes.len());
        let end = (self.position + flank + 1).min(bytes.len());
        let window = &bytes[start..end];

        let mutated = String::from_utf8_lossy(window).into_owned();
        let mut original_window = window.to_vec();
        if let Some(site) = original_window.get_mut(self.position - start) {
            if self.original_base.is_ascii() {
                *site = self.original_base as u8;
            }
        }
        let original = String::from_utf8_lossy(&original_window).into_owned();

        MutationContext {
            start,
            original,
            mutated,
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "Mutation at position {}: {} → {}",
            self.position, self.original_base, self.mutated_base
        )
    }
}

/// Bases a symbol may mutate into: every canonical base that differs from it.
///
/// For a canonical base this is the other three; an ambiguity code or other
/// symbol matches none of them, so all four are candidates.
pub fn alternative_bases(original: char) -> Vec<char> {
    CANONICAL_BASES
        .iter()
        .copied()
        .filter(|&b| b != original)
        .collect()
}

/// Substitute the symbol at byte `position` with a different canonical base.
///
/// An empty sequence reports [`AnalysisError::EmptySequence`] before any range
/// check, like every other analysis. Otherwise fails with
/// [`AnalysisError::OutOfRange`] when `position` is not inside the sequence,
/// and with [`AnalysisError::NonAsciiSymbol`] when the byte there is part of a
/// multi-byte character. The replacement is drawn uniformly from
/// [`alternative_bases`] using `rng`, so a seeded generator gives a
/// reproducible result.
pub fn simulate_mutation<R: Rng>(
    sequence: &str,
    position: usize,
    rng: &mut R,
) -> Result<Mutation> {
    let length = sequence.len();
    if length == 0 {
        return Err(AnalysisError::EmptySequence);
    }

    let Some(&byte) = sequence.as_bytes().get(position) else {
        warn!("Rejected mutation at position {position} in sequence of {length} bases");
        return Err(AnalysisError::OutOfRange {
            parameter: "mutation position",
            value: position,
            min: 0,
            max: length - 1,
        });
    };
    if !byte.is_ascii() {
        warn!("Rejected mutation at position {position}: not a single-byte symbol");
        return Err(AnalysisError::NonAsciiSymbol { position });
    }

    let original_base = char::from(byte);
    let alternatives = alternative_bases(original_base);
    let mutated_base = alternatives[rng.random_range(0..alternatives.len())];

    let mut mutated_sequence = sequence.to_string();
    mutated_sequence.replace_range(position..=position, mutated_base.encode_utf8(&mut [0; 4]));

    debug!("Simulated mutation at {position}: {original_base} -> {mutated_base}");

    Ok(Mutation {
        position,
        original_base,
        mutated_base,
        mutated_sequence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SEQ: &str = "ATGCGTATATAGC";

    #[test]
    fn test_mutation_at_start_never_keeps_base() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let m = simulate_mutation(SEQ, 0, &mut rng).unwrap();
            assert_eq!(m.original_base, 'A');
            assert!(['T', 'G', 'C'].contains(&m.mutated_base));
        }
    }

    #[test]
    fn test_mutation_changes_exactly_one_position() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = simulate_mutation(SEQ, 5, &mut rng).unwrap();
        assert_eq!(m.mutated_sequence.len(), SEQ.len());
        let diffs: Vec<usize> = SEQ
            .chars()
            .zip(m.mutated_sequence.chars())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(diffs, vec![5]);
        assert_eq!(m.mutated_sequence.chars().nth(5), Some(m.mutated_base));
    }

    #[test]
    fn test_mutation_is_reproducible_with_seed() {
        let a = simulate_mutation(SEQ, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = simulate_mutation(SEQ, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mutation_covers_all_alternatives() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(simulate_mutation("G", 0, &mut rng).unwrap().mutated_base);
        }
        assert_eq!(seen.len(), 3);
        assert!(!seen.contains(&'G'));
    }

    #[test]
    fn test_mutation_out_of_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = simulate_mutation(SEQ, 13, &mut rng).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::OutOfRange {
                parameter: "mutation position",
                value: 13,
                min: 0,
                max: 12,
            }
        );
        assert!(simulate_mutation(SEQ, 12, &mut rng).is_ok());
    }

    #[test]
    fn test_mutation_empty_sequence() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            simulate_mutation("", 0, &mut rng),
            Err(AnalysisError::EmptySequence)
        );
        // no position is valid, but emptiness is what gets reported
        assert_eq!(
            simulate_mutation("", 7, &mut rng),
            Err(AnalysisError::EmptySequence)
        );
    }

    #[test]
    fn test_mutation_positions_are_bytes() {
        // bytes: A T G [Å Å] C G T A A
        let seq = "ATGÅCGTAA";
        let mut rng = StdRng::seed_from_u64(3);

        let m = simulate_mutation(seq, 8, &mut rng).unwrap();
        assert_eq!(m.original_base, 'A');
        assert_eq!(m.mutated_sequence.len(), seq.len());
        assert_eq!(&m.mutated_sequence[..8], "ATGÅCGT");
        assert_eq!(m.mutated_sequence.as_bytes()[8], m.mutated_base as u8);

        let m = simulate_mutation(seq, 5, &mut rng).unwrap();
        assert_eq!(m.original_base, 'C');

        assert_eq!(
            simulate_mutation(seq, 3, &mut rng),
            Err(AnalysisError::NonAsciiSymbol { position: 3 })
        );
        assert_eq!(
            simulate_mutation(seq, 10, &mut rng).unwrap_err(),
            AnalysisError::OutOfRange {
                parameter: "mutation position",
                value: 10,
                min: 0,
                max: 9,
            }
        );
    }

    #[test]
    fn test_ambiguous_base_has_four_alternatives() {
        assert_eq!(alternative_bases('N'), vec!['A', 'T', 'G', 'C']);
        assert_eq!(alternative_bases('A'), vec!['T', 'G', 'C']);
        let mut rng = StdRng::seed_from_u64(9);
        let m = simulate_mutation("ANA", 1, &mut rng).unwrap();
        assert_ne!(m.mutated_base, 'N');
        assert!(CANONICAL_BASES.contains(&m.mutated_base));
    }

    #[test]
    fn test_context_window() {
        let m = Mutation {
            position: 6,
            original_base: 'A',
            mutated_base: 'G',
            mutated_sequence: "ATGCGTGTATAGC".to_string(),
        };
        let ctx = m.context(5);
        assert_eq!(ctx.start, 1);
        assert_eq!(ctx.original, "TGCGTATATAG");
        assert_eq!(ctx.mutated, "TGCGTGTATAG");
    }

    #[test]
    fn test_context_clamped_at_ends() {
        let m = Mutation {
            position: 0,
            original_base: 'A',
            mutated_base: 'C',
            mutated_sequence: "CTGC".to_string(),
        };
        let ctx = m.context(5);
        assert_eq!(ctx.start, 0);
        assert_eq!(ctx.original, "ATGC");
        assert_eq!(ctx.mutated, "CTGC");
        assert_eq!(m.describe(), "Mutation at position 0: A → C");
    }
}

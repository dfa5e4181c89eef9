use serde::{Deserialize, Serialize};

use crate::codon::{codons, CodonTable};

/// Complement a single DNA base.
///
/// Only A, T, G and C are swapped. Every other symbol (ambiguity codes, gaps,
/// lowercase) is its own complement, which keeps the mapping an involution.
pub fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        other => other,
    }
}

/// Reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

/// Translate frame 0 with the standard genetic code.
pub fn translate(seq: &str) -> String {
    translate_with(seq, &CodonTable::standard())
}

/// Translate frame 0 up to, and excluding, the first stop codon.
///
/// A trailing partial codon is ignored. Codons missing from the table
/// translate to `X`.
pub fn translate_with(seq: &str, table: &CodonTable) -> String {
    let mut protein = String::with_capacity(seq.len() / 3);

    for codon in codons(seq) {
        if table.is_stop_codon(&codon) {
            break;
        }
        protein.push(table.translate_codon(&codon));
    }

    protein
}

fn gc_count(seq: &[u8]) -> usize {
    seq.iter().filter(|&&b| b == b'G' || b == b'C').count()
}

/// GC content as a percentage (0 to 100), `0.0` for an empty slice.
pub fn gc_percent(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    100.0 * gc_count(seq.as_bytes()) as f64 / seq.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GcWindow {
    pub position: usize,
    pub gc_percent: f64,
}

/// GC% of every window of `window_size` bases, advancing one base at a time.
///
/// Returns an empty series when the window is zero or longer than the
/// sequence.
pub fn sliding_gc(seq: &str, window_size: usize) -> Vec<GcWindow> {
    let bytes = seq.as_bytes();
    if window_size == 0 || bytes.len() < window_size {
        return Vec::new();
    }

    let is_gc = |b: u8| usize::from(b == b'G' || b == b'C');
    let mut results = Vec::with_capacity(bytes.len() - window_size + 1);
    let mut count = gc_count(&bytes[..window_size]);

    for pos in 0..=bytes.len() - window_size {
        if pos > 0 {
            count = count + is_gc(bytes[pos + window_size - 1]) - is_gc(bytes[pos - 1]);
        }
        results.push(GcWindow {
            position: pos,
            gc_percent: 100.0 * count as f64 / window_size as f64,
        });
    }

    results
}

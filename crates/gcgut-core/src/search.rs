/// Find every start position of `motif` in `sequence`, overlaps included.
///
/// Positions are byte offsets. The motif is uppercased before matching; the
/// sequence is expected to be uppercase already. An empty motif, or one
/// longer than the sequence, has no matches.
pub fn find_motif(sequence: &str, motif: &str) -> Vec<usize> {
    let upper_motif = motif.to_uppercase();
    let needle = upper_motif.as_bytes();

    if needle.is_empty() || needle.len() > sequence.len() {
        return Vec::new();
    }

    sequence
        .as_bytes()
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(pos, _)| pos)
        .collect()
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Symbol emitted for stop codons
pub const STOP_SYMBOL: char = '*';
/// Symbol emitted for codons outside the table (ambiguity codes, gaps)
pub const UNKNOWN_SYMBOL: char = 'X';

/// Codon to amino-acid lookup
pub struct CodonTable {
    table: HashMap<String, char>,
    stop_codons: Vec<String>,
}

impl CodonTable {
    /// Standard genetic code (NCBI table 1)
    pub fn standard() -> Self {
        let mut table = HashMap::new();
        let codons = [
            ("TTT", 'F'), ("TTC", 'F'), ("TTA", 'L'), ("TTG", 'L'),
            ("CTT", 'L'), ("CTC", 'L'), ("CTA", 'L'), ("CTG", 'L'),
            ("ATT", 'I'), ("ATC", 'I'), ("ATA", 'I'), ("ATG", 'M'),
            ("GTT", 'V'), ("GTC", 'V'), ("GTA", 'V'), ("GTG", 'V'),
            ("TCT", 'S'), ("TCC", 'S'), ("TCA", 'S'), ("TCG", 'S'),
            ("CCT", 'P'), ("CCC", 'P'), ("CCA", 'P'), ("CCG", 'P'),
            ("ACT", 'T'), ("ACC", 'T'), ("ACA", 'T'), ("ACG", 'T'),
            ("GCT", 'A'), ("GCC", 'A'), ("GCA", 'A'), ("GCG", 'A'),
            ("TAT", 'Y'), ("TAC", 'Y'), ("TAA", '*'), ("TAG", '*'),
            ("CAT", 'H'), ("CAC", 'H'), ("CAA", 'Q'), ("CAG", 'Q'),
            ("AAT", 'N'), ("AAC", 'N'), ("AAA", 'K'), ("AAG", 'K'),
            ("GAT", 'D'), ("GAC", 'D'), ("GAA", 'E'), ("GAG", 'E'),
            ("TGT", 'C'), ("TGC", 'C'), ("TGA", '*'), ("TGG", 'W'),
            ("CGT", 'R'), ("CGC", 'R'), ("CGA", 'R'), ("CGG", 'R'),
            ("AGT", 'S'), ("AGC", 'S'), ("AGA", 'R'), ("AGG", 'R'),
            ("GGT", 'G'), ("GGC", 'G'), ("GGA", 'G'), ("GGG", 'G'),
        ];

        for (codon, aa) in &codons {
            table.insert(codon.to_string(), *aa);
        }

        CodonTable {
            table,
            stop_codons: vec!["TAA".to_string(), "TAG".to_string(), "TGA".to_string()],
        }
    }

    /// Translate a single codon to an amino acid, `X` when the codon is unknown
    pub fn translate_codon(&self, codon: &str) -> char {
        self.table
            .get(&codon.to_uppercase())
            .copied()
            .unwrap_or(UNKNOWN_SYMBOL)
    }

    /// Whether the codon terminates translation under this table
    pub fn is_stop_codon(&self, codon: &str) -> bool {
        self.stop_codons.contains(&codon.to_uppercase())
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Split a sequence into frame-0 codons, dropping a trailing partial codon.
///
/// Codons are cut every three bytes, the unit every position in this crate
/// uses. A byte outside ASCII becomes `U+FFFD` in the codon it falls in, so
/// each codon always holds exactly three symbols and never matches the table.
pub fn codons(seq: &str) -> impl Iterator<Item = String> + '_ {
    seq.as_bytes().chunks_exact(3).map(|chunk| {
        chunk
            .iter()
            .map(|&b| {
                if b.is_ascii() {
                    char::from(b)
                } else {
                    char::REPLACEMENT_CHARACTER
                }
            })
            .collect()
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodonCount {
    pub codon: String,
    pub count: usize,
}

/// Codon occurrence counts, kept in order of first occurrence.
///
/// Serializes as the plain entry list; the lookup index is rebuilt on
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CodonCount>", into = "Vec<CodonCount>")]
pub struct CodonCounts {
    entries: Vec<CodonCount>,
    index: HashMap<String, usize>,
}

impl PartialEq for CodonCounts {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for CodonCounts {}

impl From<Vec<CodonCount>> for CodonCounts {
    fn from(entries: Vec<CodonCount>) -> Self {
        let mut counts = CodonCounts::default();
        for entry in entries {
            counts.add(&entry.codon, entry.count);
        }
        counts
    }
}

impl From<CodonCounts> for Vec<CodonCount> {
    fn from(counts: CodonCounts) -> Self {
        counts.entries
    }
}

impl CodonCounts {
    fn add(&mut self, codon: &str, count: usize) {
        match self.index.get(codon) {
            Some(&i) => self.entries[i].count += count,
            None => {
                self.index.insert(codon.to_string(), self.entries.len());
                self.entries.push(CodonCount {
                    codon: codon.to_string(),
                    count,
                });
            }
        }
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[CodonCount] {
        &self.entries
    }

    pub fn get(&self, codon: &str) -> usize {
        self.index.get(codon).map_or(0, |&i| self.entries[i].count)
    }

    /// Number of distinct codons
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to `floor(len / 3)` of the source sequence
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries by descending count; ties keep first-seen order.
    pub fn sorted_by_count(&self) -> Vec<CodonCount> {
        let mut sorted = self.entries.clone();
        // stable sort
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

/// Count non-overlapping frame-0 codons.
pub fn tabulate_codons(seq: &str) -> CodonCounts {
    let mut counts = CodonCounts::default();
    for codon in codons(seq) {
        counts.add(&codon, 1);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = CodonTable::standard();
        assert_eq!(table.translate_codon("ATG"), 'M');
        assert_eq!(table.translate_codon("TAA"), STOP_SYMBOL);
        assert_eq!(table.translate_codon("GCT"), 'A');
        assert_eq!(table.translate_codon("atg"), 'M');
        assert_eq!(table.translate_codon("XXX"), 'X');
        assert_eq!(table.translate_codon("ANG"), 'X');
    }

    #[test]
    fn test_stop_codons() {
        let table = CodonTable::standard();
        assert!(table.is_stop_codon("TAA"));
        assert!(table.is_stop_codon("TAG"));
        assert!(table.is_stop_codon("TGA"));
        assert!(!table.is_stop_codon("ATG"));
    }

    #[test]
    fn test_tabulate_scenario() {
        let counts = tabulate_codons("ATGCGTATATAGC");
        let order: Vec<&str> = counts.entries().iter().map(|e| e.codon.as_str()).collect();
        assert_eq!(order, vec!["ATG", "CGT", "ATA", "TAG"]);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get("C"), 0);
    }

    #[test]
    fn test_tabulate_counts_repeats() {
        let counts = tabulate_codons("AAAGGGAAACCCGGGAAAT");
        assert_eq!(counts.get("AAA"), 3);
        assert_eq!(counts.get("GGG"), 2);
        assert_eq!(counts.get("CCC"), 1);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_sorted_by_count_ties_first_seen() {
        let counts = tabulate_codons("CCCTTTAAATTTCCCGGG");
        let sorted: Vec<(String, usize)> = counts
            .sorted_by_count()
            .into_iter()
            .map(|e| (e.codon, e.count))
            .collect();
        assert_eq!(
            sorted,
            vec![
                ("CCC".to_string(), 2),
                ("TTT".to_string(), 2),
                ("AAA".to_string(), 1),
                ("GGG".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_codons_cut_on_bytes() {
        // "Å" is two bytes, so the second codon is those two bytes plus C
        let cut: Vec<String> = codons("ATGÅCGTAA").collect();
        assert_eq!(cut, vec!["ATG", "\u{FFFD}\u{FFFD}C", "GTA"]);
        assert!(cut.iter().all(|c| c.chars().count() == 3));

        let counts = tabulate_codons("ATGÅCGTAA");
        assert_eq!(counts.total(), "ATGÅCGTAA".len() / 3);
        assert_eq!(counts.get("\u{FFFD}\u{FFFD}C"), 1);
    }

    #[test]
    fn test_counts_json_round_trip() {
        let counts = tabulate_codons("AAAGGGAAACCC");
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(
            json,
            r#"[{"codon":"AAA","count":2},{"codon":"GGG","count":1},{"codon":"CCC","count":1}]"#
        );

        let back: CodonCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
        assert_eq!(back.get("AAA"), 2);
        assert_eq!(back.get("CCC"), 1);
    }

    #[test]
    fn test_tabulate_short_sequences() {
        assert!(tabulate_codons("").is_empty());
        assert!(tabulate_codons("AT").is_empty());
        assert_eq!(tabulate_codons("ATG").total(), 1);
    }
}

use serde::{Deserialize, Serialize};

/// A single DNA record as loaded from an upload.
///
/// The sequence is normalized on construction: whitespace and non-ASCII
/// characters are dropped and letters are uppercased. Any other symbol
/// (ambiguity codes, gaps) is kept as-is, so positions always address
/// single-byte symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl AsRef<str>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            sequence: normalize(sequence.as_ref()),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Uppercase a raw sequence and strip whitespace and non-ASCII characters.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_whitespace() && !c.is_ascii_control())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

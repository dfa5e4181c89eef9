use gcgut_core::sequence::{normalize, SequenceRecord};
use log::{debug, warn};

use crate::ParseError;

/// Parse a FASTA format string into one or more records.
///
/// A header without sequence lines still yields a record, with an empty
/// sequence; it is up to the analyses to reject it. A header with no
/// identifier is skipped together with its sequence lines, and is only an
/// error when no valid record remains.
pub fn parse(input: &str) -> Result<Vec<SequenceRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current: Option<(String, String)> = None;
    let mut current_seq = String::new();
    let mut preamble_lines = 0usize;
    let mut header_error: Option<ParseError> = None;
    let mut skipping = false;

    for line in input.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            // Save previous record if exists
            if let Some((name, desc)) = current.take() {
                records.push(finish_record(name, desc, &current_seq));
                current_seq.clear();
            }

            match parse_header(header) {
                Ok(parsed) => {
                    current = Some(parsed);
                    skipping = false;
                }
                Err(e) => {
                    warn!("Skipping FASTA record with malformed header '{trimmed}'");
                    header_error.get_or_insert(e);
                    skipping = true;
                }
            }
        } else if trimmed.starts_with(';') || skipping {
            // Comment line or body of a skipped record
            continue;
        } else if current.is_some() {
            current_seq.push_str(&normalize(trimmed));
        } else {
            preamble_lines += 1;
        }
    }

    // Don't forget the last record
    if let Some((name, desc)) = current {
        records.push(finish_record(name, desc, &current_seq));
    }

    if preamble_lines > 0 {
        warn!("Skipped {preamble_lines} line(s) before the first FASTA header");
    }

    if records.is_empty() {
        return Err(header_error.unwrap_or_else(|| {
            ParseError::InvalidFormat("No sequences found in FASTA input".to_string())
        }));
    }

    Ok(records)
}

/// Parse the content and keep only its first record.
///
/// Additional records are discarded; the upload workflow analyses one
/// sequence at a time.
pub fn load_first_record(input: &str) -> Result<SequenceRecord, ParseError> {
    let mut records = parse(input)?.into_iter();
    let first = records
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No sequences found in FASTA input".to_string()))?;

    let discarded = records.count();
    if discarded > 0 {
        warn!(
            "Using first record '{}'; ignoring {discarded} additional record(s)",
            first.id
        );
    }

    Ok(first)
}

fn parse_header(header: &str) -> Result<(String, String), ParseError> {
    let mut parts = header.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    if name.is_empty() {
        return Err(ParseError::InvalidHeader(
            "FASTA header has no identifier".to_string(),
        ));
    }
    let desc = parts.next().map(str::trim).unwrap_or_default();
    Ok((name.to_string(), desc.to_string()))
}

fn finish_record(name: String, desc: String, seq: &str) -> SequenceRecord {
    debug!("Parsed FASTA record '{}' ({} bases)", name, seq.len());
    SequenceRecord::new(name, seq).with_description(desc)
}

/// Serialize records to FASTA format
pub fn serialize(records: &[SequenceRecord]) -> String {
    let mut out = String::new();

    for rec in records {
        // Header
        out.push('>');
        out.push_str(&rec.id);
        if !rec.description.is_empty() {
            out.push(' ');
            out.push_str(&rec.description);
        }
        out.push('\n');

        // Sequence in 80-character lines
        for chunk in rec.sequence.as_bytes().chunks(80) {
            out.push_str(&String::from_utf8_lossy(chunk));
            out.push('\n');
        }
    }

    out
}

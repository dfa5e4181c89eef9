use crate::dto::SequenceDto;
use gcgut_core::SequenceRecord;

/// Open and parse a sequence file, returning its first record
pub fn open_sequence_file(path: String) -> Result<SequenceDto, String> {
    let record = gcgut_formats::load_record_from_path(&path)
        .map_err(|e| format!("Failed to load file: {}", e))?;

    Ok(SequenceDto::from(&record))
}

/// Detect the format of a file
pub fn detect_file_format(path: String) -> String {
    let format = gcgut_formats::detect::detect_format_from_extension(&path);
    format!("{:?}", format)
}

/// Render a derived sequence (mutated strand, reverse complement) as FASTA
pub fn export_fasta(id: String, description: String, sequence: String) -> String {
    let record = SequenceRecord::new(id, sequence).with_description(description);
    gcgut_formats::fasta::serialize(&[record])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_file_format() {
        assert_eq!(detect_file_format("sample.fa".to_string()), "Fasta");
        assert_eq!(detect_file_format("sample.txt".to_string()), "Unknown");
    }

    #[test]
    fn test_export_fasta() {
        let out = export_fasta(
            "seq1_rc".to_string(),
            "reverse complement".to_string(),
            "acgt".to_string(),
        );
        assert_eq!(out, ">seq1_rc reverse complement\nACGT\n");
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_sequence_file("/nonexistent/gcgut/input.fasta".to_string()).unwrap_err();
        assert!(err.starts_with("Failed to load file: IO error"));
    }
}

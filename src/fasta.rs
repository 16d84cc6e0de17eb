use crate::iupac::IupacCode;
use anyhow::Result;
use bio::io::fasta;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufRead;

/// One FASTA record: `label` is the first word of the header, `header`
/// the full text after `>`, `sequence` the uppercased letters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastaSequence {
    pub label: String,
    pub header: String,
    pub sequence: String,
}

impl FastaSequence {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_valid_dna(&self) -> bool {
        self.sequence
            .bytes()
            .all(|letter| IupacCode::is_valid_letter(letter))
    }

    fn from_record(record: &fasta::Record) -> Self {
        let header = match record.desc() {
            Some(desc) => format!("{} {desc}", record.id()),
            None => record.id().to_string(),
        };
        Self {
            label: record.id().to_string(),
            header,
            sequence: String::from_utf8_lossy(record.seq())
                .to_uppercase()
                .to_string(),
        }
    }

    pub fn from_fasta_file(filename: &str) -> Result<Vec<FastaSequence>> {
        let file = File::open(filename)?;
        Ok(Self::from_fasta_reader(std::io::BufReader::new(file)))
    }

    /// Records whose sequences fall outside the IUPAC alphabet are
    /// reported and skipped rather than aborting the whole file.
    pub fn from_fasta_reader<R: BufRead>(reader: R) -> Vec<FastaSequence> {
        fasta::Reader::new(reader)
            .records()
            .filter_map(|record| record.ok())
            .map(|record| FastaSequence::from_record(&record))
            .filter(|seq| {
                if seq.is_valid_dna() {
                    true
                } else {
                    eprintln!("Skipping record '{}': non-IUPAC letters", seq.label);
                    false
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = ">gene1 sample mRNA\nAUGGCC\nAAAUAA\n\n>gene2\natggtttaa\n";

    #[test]
    fn test_from_fasta_reader() {
        let records = FastaSequence::from_fasta_reader(SAMPLE.as_bytes());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, "gene1");
        assert_eq!(records[0].header, "gene1 sample mRNA");
        assert_eq!(records[0].sequence, "AUGGCCAAAUAA");
        assert_eq!(records[1].label, "gene2");
        assert_eq!(records[1].header, "gene2");
        assert_eq!(records[1].sequence, "ATGGTTTAA");
    }

    #[test]
    fn test_invalid_letters_skipped() {
        let records = FastaSequence::from_fasta_reader(">ok\nACGT\n>bad\nAC9T\n".as_bytes());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "ok");
    }

    #[test]
    fn test_from_fasta_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();
        let records = FastaSequence::from_fasta_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].sequence, "ATGGTTTAA");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(FastaSequence::from_fasta_file("/no/such/file.fasta").is_err());
    }
}

use crate::AMINO_ACIDS;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// The standard genetic code, RNA codons. DNA input is normalized (T -> U)
// before lookup.
#[rustfmt::skip]
const SENSE_CODONS: [(&[u8; 3], char); 61] = [
    (b"UUU", 'F'), (b"UUC", 'F'), (b"UUA", 'L'), (b"UUG", 'L'),
    (b"UCU", 'S'), (b"UCC", 'S'), (b"UCA", 'S'), (b"UCG", 'S'),
    (b"UAU", 'Y'), (b"UAC", 'Y'),
    (b"UGU", 'C'), (b"UGC", 'C'), (b"UGG", 'W'),
    (b"CUU", 'L'), (b"CUC", 'L'), (b"CUA", 'L'), (b"CUG", 'L'),
    (b"CCU", 'P'), (b"CCC", 'P'), (b"CCA", 'P'), (b"CCG", 'P'),
    (b"CAU", 'H'), (b"CAC", 'H'), (b"CAA", 'Q'), (b"CAG", 'Q'),
    (b"CGU", 'R'), (b"CGC", 'R'), (b"CGA", 'R'), (b"CGG", 'R'),
    (b"AUU", 'I'), (b"AUC", 'I'), (b"AUA", 'I'), (b"AUG", 'M'),
    (b"ACU", 'T'), (b"ACC", 'T'), (b"ACA", 'T'), (b"ACG", 'T'),
    (b"AAU", 'N'), (b"AAC", 'N'), (b"AAA", 'K'), (b"AAG", 'K'),
    (b"AGU", 'S'), (b"AGC", 'S'), (b"AGA", 'R'), (b"AGG", 'R'),
    (b"GUU", 'V'), (b"GUC", 'V'), (b"GUA", 'V'), (b"GUG", 'V'),
    (b"GCU", 'A'), (b"GCC", 'A'), (b"GCA", 'A'), (b"GCG", 'A'),
    (b"GAU", 'D'), (b"GAC", 'D'), (b"GAA", 'E'), (b"GAG", 'E'),
    (b"GGU", 'G'), (b"GGC", 'G'), (b"GGA", 'G'), (b"GGG", 'G'),
];

const STOP_CODONS: [&[u8; 3]; 3] = [b"UAA", b"UAG", b"UGA"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationError {
    /// 1-based nucleotide offset of the codon start.
    pub position: usize,
    pub codon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub one_letter: String,
    pub three_letter: String,
    pub errors: Vec<TranslationError>,
}

#[derive(Clone, Debug)]
pub struct GeneticCode {
    codon_to_aa: HashMap<[u8; 3], char>,
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self {
            codon_to_aa: SENSE_CODONS.iter().map(|(codon, aa)| (**codon, *aa)).collect(),
        }
    }
}

impl GeneticCode {
    fn normalize(codon: &[u8]) -> Vec<u8> {
        codon
            .iter()
            .map(|letter| match letter.to_ascii_uppercase() {
                b'T' => b'U',
                other => other,
            })
            .collect()
    }

    pub fn amino_acid(&self, codon: &[u8]) -> Option<char> {
        let codon: [u8; 3] = Self::normalize(codon).try_into().ok()?;
        self.codon_to_aa.get(&codon).copied()
    }

    pub fn is_stop(&self, codon: &[u8]) -> bool {
        let normalized = Self::normalize(codon);
        STOP_CODONS
            .iter()
            .any(|stop| stop.as_slice() == normalized.as_slice())
    }

    /// Translates a nucleotide sequence (RNA or DNA) frame 1, stopping at
    /// the first stop codon. Codons that cannot be resolved show up as
    /// `*` / `***` and are reported with their 1-based offset; a trailing
    /// partial codon counts as unresolvable.
    pub fn translate(&self, na_sequence: &str) -> Translation {
        let bytes = na_sequence.as_bytes();
        let mut one_letter = String::new();
        let mut three_letter: Vec<String> = vec![];
        let mut errors = vec![];

        let mut i = 0;
        while i < bytes.len() {
            let codon = &bytes[i..bytes.len().min(i + 3)];
            if self.is_stop(codon) {
                break;
            }
            match self.amino_acid(codon) {
                Some(aa) => {
                    one_letter.push(aa);
                    three_letter.push(match AMINO_ACIDS.get(aa) {
                        Some(record) => record.tla.clone(),
                        None => "***".to_string(),
                    });
                }
                None => {
                    one_letter.push('*');
                    three_letter.push("***".to_string());
                    errors.push(TranslationError {
                        position: i + 1,
                        codon: String::from_utf8_lossy(codon).to_string(),
                    });
                }
            }
            i += 3;
        }

        Translation {
            one_letter,
            three_letter: three_letter.join("-"),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GENETIC_CODE;

    #[test]
    fn test_amino_acid_lookup() {
        assert_eq!(GENETIC_CODE.amino_acid(b"AUG"), Some('M'));
        assert_eq!(GENETIC_CODE.amino_acid(b"atg"), Some('M'));
        assert_eq!(GENETIC_CODE.amino_acid(b"ATG"), Some('M'));
        assert_eq!(GENETIC_CODE.amino_acid(b"UAA"), None);
        assert_eq!(GENETIC_CODE.amino_acid(b"AU"), None);
    }

    #[test]
    fn test_is_stop() {
        assert!(GENETIC_CODE.is_stop(b"UAA"));
        assert!(GENETIC_CODE.is_stop(b"TGA"));
        assert!(!GENETIC_CODE.is_stop(b"AUG"));
    }

    #[test]
    fn test_translate_rna() {
        let t = GENETIC_CODE.translate("AUGGCCAAAUAA");
        assert_eq!(t.one_letter, "MAK");
        assert_eq!(t.three_letter, "Met-Ala-Lys");
        assert!(t.errors.is_empty());
    }

    #[test]
    fn test_translate_dna() {
        let t = GENETIC_CODE.translate("ATGGCCAAATAA");
        assert_eq!(t.one_letter, "MAK");
        assert!(t.errors.is_empty());
    }

    #[test]
    fn test_translate_stops_at_first_stop() {
        let t = GENETIC_CODE.translate("AUGUAAAUG");
        assert_eq!(t.one_letter, "M");
    }

    #[test]
    fn test_translate_reports_bad_codons() {
        let t = GENETIC_CODE.translate("AUGGXCAAA");
        assert_eq!(t.one_letter, "M*K");
        assert_eq!(
            t.errors,
            vec![TranslationError {
                position: 4,
                codon: "GXC".to_string()
            }]
        );
    }

    #[test]
    fn test_translate_partial_trailing_codon() {
        let t = GENETIC_CODE.translate("AUGGC");
        assert_eq!(t.one_letter, "M*");
        assert_eq!(t.errors.len(), 1);
        assert_eq!(t.errors[0].position, 4);
        assert_eq!(t.errors[0].codon, "GC");
    }

    #[test]
    fn test_translate_empty() {
        assert_eq!(GENETIC_CODE.translate(""), Translation::default());
    }
}

use amino_acids::AminoAcids;
use genetic_code::GeneticCode;
use lazy_static::lazy_static;

pub mod amino_acids;
pub mod edit_distance;
pub mod error;
pub mod fasta;
pub mod fragments;
pub mod genetic_code;
pub mod hydrophobicity;
pub mod iupac;
pub mod multiset;
pub mod partial_digest;
pub mod primes;
pub mod render_map;
pub mod selection;

lazy_static! {
    // Amino acids, with hydrophobicity scales and physicochemical data
    pub static ref AMINO_ACIDS: AminoAcids = AminoAcids::load();

    // The standard genetic code
    pub static ref GENETIC_CODE: GeneticCode = GeneticCode::default();
}

// Hydrophobicity profiles over amino-acid sequences, and the von Heijne
// trapezoid-rule membrane-segment predictor built on top of them.
//
// Ref: von Heijne, J. Mol. Biol. 225:487-494 (1992) - membrane protein
// structure prediction by hydrophobicity analysis.

use crate::AMINO_ACIDS;
use serde::{Deserialize, Serialize};

/// Residues to each side of the center for the full trapezoid window.
const OUTER_SIZE: usize = 10;
/// Residues to each side of the center for the flat inner window.
const INNER_SIZE: usize = 5;

const UPPER_CUTOFF: f64 = 1.0;
const LOWER_CUTOFF: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HydrophobicityScale {
    KyteDoolittle,
    VonHeijne,
}

impl HydrophobicityScale {
    /// Scale value for a residue; letters outside the 20-letter alphabet
    /// contribute 0.
    pub fn value(&self, aa: char) -> f64 {
        let Some(record) = AMINO_ACIDS.get(aa) else {
            return 0.0;
        };
        match self {
            HydrophobicityScale::KyteDoolittle => record.hydrophobicity.kyte_doolittle,
            HydrophobicityScale::VonHeijne => record.hydrophobicity.von_heijne,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MembranePrediction {
    pub profile: Vec<f64>,
    /// One letter per input residue: `M` certain membrane segment,
    /// `P` putative, `x` undecided.
    pub segments: String,
}

/// Plain sliding-window profile: sum of scale values over each window of
/// `span` residues. Empty when the sequence is shorter than the span.
pub fn span_profile(aa_sequence: &str, span: usize, scale: HydrophobicityScale) -> Vec<f64> {
    if span == 0 {
        return vec![];
    }
    let values: Vec<f64> = aa_sequence.chars().map(|aa| scale.value(aa)).collect();
    values
        .windows(span)
        .map(|window| window.iter().sum())
        .collect()
}

/// Position weights of the trapezoid window: a linear ramp up across the
/// outer flank, a plateau across the inner window, and the mirrored ramp
/// down. The weights sum to 1.
pub fn trapezoid_weights() -> Vec<f64> {
    let norm = ((1 + OUTER_SIZE) * (1 + OUTER_SIZE) - INNER_SIZE * INNER_SIZE) as f64;
    let ramp = OUTER_SIZE - INNER_SIZE + 1;

    let mut weights: Vec<f64> = (1..=ramp).map(|i| i as f64 / norm).collect();
    let plateau = ramp as f64 / norm;
    weights.extend(std::iter::repeat(plateau).take(2 * INNER_SIZE - 1));
    for i in (1..=ramp).rev() {
        weights.push(i as f64 / norm);
    }
    weights
}

/// Position-weighted hydrophobicity profile (von Heijne scale). Entry `i`
/// is the weighted average centered on residue `i + OUTER_SIZE`.
pub fn trapezoid_profile(aa_sequence: &str) -> Vec<f64> {
    let weights = trapezoid_weights();
    let values: Vec<f64> = aa_sequence
        .chars()
        .map(|aa| HydrophobicityScale::VonHeijne.value(aa))
        .collect();
    values
        .windows(weights.len())
        .map(|window| {
            window
                .iter()
                .zip(weights.iter())
                .map(|(value, weight)| value * weight)
                .sum()
        })
        .collect()
}

/// Labels membrane segments from a trapezoid profile. Peaks claim the
/// 21 residues around them, strongest first; weaker peaks overlapping an
/// already-claimed stretch are suppressed.
pub fn classify_profile(profile: &[f64], residue_count: usize) -> String {
    if residue_count == 0 {
        return String::new();
    }
    let mut result = vec!['x'; residue_count];

    let mut peaks: Vec<(f64, usize)> = profile
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, value)| *value >= LOWER_CUTOFF)
        .map(|(idx, value)| (value, idx))
        .collect();
    peaks.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });

    let mut claimed: Vec<(usize, usize)> = vec![];
    for (value, idx) in peaks {
        let lo = idx.saturating_sub(OUTER_SIZE);
        let hi = idx + OUTER_SIZE;
        if claimed.iter().any(|(c_lo, c_hi)| lo <= *c_hi && *c_lo <= hi) {
            continue;
        }
        claimed.push((lo, hi));

        let label = if value >= UPPER_CUTOFF { 'M' } else { 'P' };
        // Profile index i is centered on residue i + OUTER_SIZE.
        for residue in idx..=(idx + 2 * OUTER_SIZE).min(residue_count.saturating_sub(1)) {
            result[residue] = label;
        }
    }
    result.into_iter().collect()
}

/// Full membrane prediction for a one-letter amino-acid sequence.
pub fn predict_membrane(aa_sequence: &str) -> MembranePrediction {
    let profile = trapezoid_profile(aa_sequence);
    let segments = classify_profile(&profile, aa_sequence.chars().count());
    MembranePrediction { profile, segments }
}

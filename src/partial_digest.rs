// Skiena-style partial digest reconstruction: recover cleavage-site
// coordinates on a linear DNA molecule from the multiset of all pairwise
// fragment lengths produced by a partial digestion.

use crate::multiset::Multiset;
use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestSolution {
    pub dna_length: u64,
    pub cleavage_sites: Vec<u64>,
    pub leftover_fragments: Vec<u64>,
}

impl DigestSolution {
    /// True if every input fragment was explained by the reconstruction.
    /// A partial solution is best-effort, not verified.
    #[inline(always)]
    pub fn is_complete(&self) -> bool {
        self.leftover_fragments.is_empty()
    }
}

/// Reconstructs cleavage sites from a multiset of pairwise fragment
/// lengths. The caller's input is not touched; the solver works on its
/// own counted copy.
///
/// The largest unexplained fragment must span from one of the two end
/// anchors to a new site, so each round hypothesizes the two mirror
/// placements, keeps whichever one's implied distances are still present
/// in the working multiset, and consumes those distances. When neither
/// placement fits, the remaining fragments cannot come from this
/// molecule and are returned unexplained.
pub fn solve(fragments: &[u64]) -> DigestSolution {
    let mut working: Multiset = fragments.iter().copied().collect();
    let dna_length = match working.max() {
        Some(max) => max,
        None => return DigestSolution::default(),
    };
    // The largest fragment is the distance between the two end anchors.
    working.remove_one(dna_length);
    let mut sites: BTreeSet<u64> = BTreeSet::from([0, dna_length]);

    // Every accepted site consumes at least one fragment, so the original
    // fragment count bounds the loop even for adversarial input that
    // would otherwise cycle without shrinking.
    for _ in 0..fragments.len() {
        if working.is_empty() {
            break;
        }
        let y = working.max().expect("non-empty working multiset");
        let from_origin = y;
        let from_end = dna_length - y;
        let delta_left: Multiset = sites.iter().map(|s| s.abs_diff(from_origin)).collect();
        let delta_right: Multiset = sites.iter().map(|s| s.abs_diff(from_end)).collect();

        // The two placements are reflections of each other. When they
        // imply the same distances, keep the smaller coordinate so the
        // output is deterministic.
        let (site, delta) = if delta_left == delta_right {
            (from_origin.min(from_end), delta_left)
        } else if working.contains_all(&delta_left) {
            (from_origin, delta_left)
        } else {
            (from_end, delta_right)
        };
        // A coordinate that is already a confirmed site (possible only
        // when zero-length fragments are present) would consume
        // fragments without growing the deduplicated site set; treat it
        // as no progress so leftovers stay accounted for.
        if sites.contains(&site) || !working.remove_all(&delta) {
            break;
        }
        sites.insert(site);
    }

    DigestSolution {
        dna_length,
        cleavage_sites: sites.into_iter().collect(),
        leftover_fragments: working.to_sorted_vec(),
    }
}

/// Solves independent fragment multisets in parallel.
pub fn solve_all(inputs: &[Vec<u64>]) -> Vec<DigestSolution> {
    inputs.par_iter().map(|fragments| solve(fragments)).collect()
}

/// The full pairwise-distance multiset of a site set, ascending. This is
/// the digest a complete cut at `sites` would produce.
pub fn pairwise_distances(sites: &[u64]) -> Vec<u64> {
    sites
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.abs_diff(*b))
        .sorted()
        .collect()
}

// Weighted DNA edit distance. Indels cost 1; substitutions within a base
// class (purine<->purine, pyrimidine<->pyrimidine, "transitions") cost 1,
// across classes ("transversions") cost 2.

use crate::error::DigestMapError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOp {
    Match { base: char },
    Substitute { from: char, to: char },
    Delete { base: char },
    Insert { base: char },
}

impl EditOp {
    pub fn cost(&self) -> u64 {
        match self {
            EditOp::Match { .. } => 0,
            EditOp::Substitute { from, to } => substitution_cost(*from, *to),
            EditOp::Delete { .. } | EditOp::Insert { .. } => 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditAlignment {
    pub cost: u64,
    pub script: Vec<EditOp>,
}

#[inline(always)]
fn is_purine(base: char) -> bool {
    matches!(base, 'A' | 'G')
}

fn substitution_cost(from: char, to: char) -> u64 {
    if from == to {
        0
    } else if is_purine(from) == is_purine(to) {
        1
    } else {
        2
    }
}

fn checked_bases(sequence: &str) -> Result<Vec<char>, DigestMapError> {
    sequence
        .chars()
        .map(|base| {
            let base = base.to_ascii_uppercase();
            if matches!(base, 'A' | 'C' | 'G' | 'T') {
                Ok(base)
            } else {
                Err(DigestMapError::String(format!(
                    "Invalid DNA base '{base}' in edit-distance input"
                )))
            }
        })
        .collect()
}

/// Minimum weighted cost of editing `source` into `target`, with one
/// optimal edit script. Ties prefer substitution, then deletion, then
/// insertion, so the script is deterministic.
pub fn edit_distance(source: &str, target: &str) -> Result<EditAlignment, DigestMapError> {
    let x = checked_bases(source)?;
    let y = checked_bases(target)?;
    let n = x.len();
    let m = y.len();

    let mut d = vec![vec![0u64; m + 1]; n + 1];
    for i in 1..=n {
        d[i][0] = d[i - 1][0] + 1;
    }
    for j in 1..=m {
        d[0][j] = d[0][j - 1] + 1;
    }
    for i in 1..=n {
        for j in 1..=m {
            let substitute = d[i - 1][j - 1] + substitution_cost(x[i - 1], y[j - 1]);
            let delete = d[i - 1][j] + 1;
            let insert = d[i][j - 1] + 1;
            d[i][j] = substitute.min(delete).min(insert);
        }
    }

    let mut script = vec![];
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && d[i][j] == d[i - 1][j - 1] + substitution_cost(x[i - 1], y[j - 1]) {
            script.push(if x[i - 1] == y[j - 1] {
                EditOp::Match { base: x[i - 1] }
            } else {
                EditOp::Substitute {
                    from: x[i - 1],
                    to: y[j - 1],
                }
            });
            i -= 1;
            j -= 1;
        } else if i > 0 && d[i][j] == d[i - 1][j] + 1 {
            script.push(EditOp::Delete { base: x[i - 1] });
            i -= 1;
        } else {
            script.push(EditOp::Insert { base: y[j - 1] });
            j -= 1;
        }
    }
    script.reverse();

    Ok(EditAlignment {
        cost: d[n][m],
        script,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(source: &str, script: &[EditOp]) -> String {
        let mut result = String::new();
        let mut chars = source.chars();
        for op in script {
            match op {
                EditOp::Match { .. } => result.push(chars.next().unwrap()),
                EditOp::Substitute { to, .. } => {
                    chars.next().unwrap();
                    result.push(*to);
                }
                EditOp::Delete { .. } => {
                    chars.next().unwrap();
                }
                EditOp::Insert { base } => result.push(*base),
            }
        }
        assert!(chars.next().is_none());
        result
    }

    #[test]
    fn test_identical_sequences() {
        let alignment = edit_distance("ATGCA", "ATGCA").unwrap();
        assert_eq!(alignment.cost, 0);
        assert!(alignment
            .script
            .iter()
            .all(|op| matches!(op, EditOp::Match { .. })));
    }

    #[test]
    fn test_transition_cheaper_than_transversion() {
        assert_eq!(edit_distance("A", "G").unwrap().cost, 1);
        assert_eq!(edit_distance("T", "C").unwrap().cost, 1);
        assert_eq!(edit_distance("A", "T").unwrap().cost, 2);
        assert_eq!(edit_distance("G", "C").unwrap().cost, 2);
    }

    #[test]
    fn test_single_deletion() {
        let alignment = edit_distance("ATG", "AG").unwrap();
        assert_eq!(alignment.cost, 1);
        assert_eq!(
            alignment.script,
            vec![
                EditOp::Match { base: 'A' },
                EditOp::Delete { base: 'T' },
                EditOp::Match { base: 'G' },
            ]
        );
    }

    #[test]
    fn test_empty_target() {
        let alignment = edit_distance("ACGT", "").unwrap();
        assert_eq!(alignment.cost, 4);
        assert_eq!(alignment.script.len(), 4);
    }

    #[test]
    fn test_lowercase_accepted() {
        assert_eq!(edit_distance("acgt", "ACGT").unwrap().cost, 0);
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert!(edit_distance("AXT", "ACT").is_err());
        assert!(edit_distance("ACT", "AUT").is_err());
    }

    #[test]
    fn test_script_replays_to_target() {
        for (source, target) in [
            ("ATGCA", "ATGCA"),
            ("ATG", "AG"),
            ("AT", "GCAT"),
            ("GATTACA", "ACTGCT"),
            ("", "ACGT"),
        ] {
            let alignment = edit_distance(source, target).unwrap();
            assert_eq!(replay(source, &alignment.script), target);
            let script_cost: u64 = alignment.script.iter().map(|op| op.cost()).sum();
            assert_eq!(script_cost, alignment.cost);
        }
    }
}

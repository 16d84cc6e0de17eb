// Fragment-list input boundary. Bad values are rejected here, before the
// solver ever sees them.

use crate::error::DigestMapError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[,;\s]+").expect("Invalid separator regex");
}

/// Parses a whitespace/comma-separated list of fragment lengths.
/// Negative numbers, fractions, and other junk tokens fail fast with the
/// offending token named.
pub fn parse_fragment_list(text: &str) -> Result<Vec<u64>, DigestMapError> {
    let mut fragments = vec![];
    for token in SEPARATORS.split(text) {
        if token.is_empty() {
            continue;
        }
        let value = token.parse::<u64>().map_err(|_| {
            DigestMapError::String(format!(
                "Invalid fragment length '{token}': expected a non-negative integer"
            ))
        })?;
        fragments.push(value);
    }
    Ok(fragments)
}

/// Reads a fragment list from a text file.
pub fn read_fragment_file(filename: &str) -> Result<Vec<u64>, DigestMapError> {
    let text = fs::read_to_string(filename)?;
    parse_fragment_list(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_fragment_list() {
        let fragments = parse_fragment_list("2, 2 3\n3\t4,5 6 7 8 10").unwrap();
        assert_eq!(fragments, vec![2, 2, 3, 3, 4, 5, 6, 7, 8, 10]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_fragment_list("").unwrap().is_empty());
        assert!(parse_fragment_list(" \n ").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_negative() {
        let err = parse_fragment_list("3 -2 5").unwrap_err();
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn test_rejects_fraction() {
        assert!(parse_fragment_list("3 2.5").is_err());
    }

    #[test]
    fn test_rejects_junk() {
        assert!(parse_fragment_list("3 four 5").is_err());
    }

    #[test]
    fn test_read_fragment_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2 2 3 3\n4 5 6 7 8 10").unwrap();
        let fragments = read_fragment_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(fragments, vec![2, 2, 3, 3, 4, 5, 6, 7, 8, 10]);
    }
}

//! Parsing and validation of the requested key list

use std::collections::HashSet;

use super::error::ExtractError;

/// Ordered list of keys to keep from each record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySelection {
    keys: Vec<String>,
}

impl KeySelection {
    /// Parse a comma-separated key list and check it against the declared count.
    ///
    /// Whitespace around each key is trimmed and empty entries are skipped,
    /// so `"a, b,,c"` yields `["a", "b", "c"]`.
    pub fn parse(raw: &str, expected_count: usize) -> Result<Self, ExtractError> {
        let keys = split_keys(raw);

        if keys.len() != expected_count {
            return Err(ExtractError::KeyCountMismatch {
                expected: expected_count,
                actual: keys.len(),
            });
        }

        let mut seen = HashSet::with_capacity(keys.len());
        for key in &keys {
            if !seen.insert(key.as_str()) {
                return Err(ExtractError::DuplicateKey(key.clone()));
            }
        }

        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

fn split_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let selection = KeySelection::parse("reseller,domain", 2).unwrap();
        assert_eq!(selection.keys(), &["reseller", "domain"]);
    }

    #[test]
    fn test_parse_trims_and_skips_empty_entries() {
        let selection = KeySelection::parse(" a , b,,c,", 3).unwrap();
        assert_eq!(selection.keys(), &["a", "b", "c"]);
    }

    #[test]
    fn test_count_mismatch() {
        let err = KeySelection::parse("a,b,c", 2).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::KeyCountMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_blank_list_is_count_mismatch() {
        let err = KeySelection::parse(" , ", 1).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::KeyCountMismatch {
                expected: 1,
                actual: 0
            }
        ));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = KeySelection::parse("a,b,a", 3).unwrap_err();
        assert!(matches!(err, ExtractError::DuplicateKey(ref k) if k == "a"));
    }
}

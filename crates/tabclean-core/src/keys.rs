//! Column identity keys.
//!
//! Two labels with the same key name the same logical column, so
//! `"Score"`, `" score "` and `"Score.1"` all resolve to `"score"`.

use std::collections::BTreeMap;

/// Key assigned to one input column position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment {
    pub key: String,
    /// First-seen label (trimmed, case preserved) for `key`.
    pub canonical_label: String,
}

/// Computes the identity key of a column label.
///
/// Trims, lowercases, then drops everything from the first `.` onward.
pub fn column_key(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    match lowered.find('.') {
        Some(idx) => lowered[..idx].to_string(),
        None => lowered,
    }
}

/// Resolves every label to its key and the canonical label for that key.
///
/// The result has one entry per input position, in input order.
pub fn resolve_columns(labels: &[String]) -> Vec<ColumnAssignment> {
    let mut canonical: BTreeMap<String, String> = BTreeMap::new();
    labels
        .iter()
        .map(|label| {
            let key = column_key(label);
            let canonical_label = canonical
                .entry(key.clone())
                .or_insert_with(|| label.trim().to_string())
                .clone();
            ColumnAssignment {
                key,
                canonical_label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn key_trims_lowercases_and_drops_suffix() {
        assert_eq!(column_key("Score"), "score");
        assert_eq!(column_key(" score "), "score");
        assert_eq!(column_key("Score.1"), "score");
        assert_eq!(column_key("Total.Score.2"), "total");
        assert_eq!(column_key(""), "");
        assert_eq!(column_key(".hidden"), "");
    }

    #[test]
    fn first_seen_label_wins() {
        let resolved = resolve_columns(&labels(&["Name", " score ", "Score.1", "SCORE"]));
        let canonical: Vec<&str> = resolved
            .iter()
            .map(|a| a.canonical_label.as_str())
            .collect();
        assert_eq!(canonical, vec!["Name", "score", "score", "score"]);
        assert!(resolved[1..].iter().all(|a| a.key == "score"));
    }

    #[test]
    fn empty_label_is_valid() {
        let resolved = resolve_columns(&labels(&["", "  "]));
        assert_eq!(resolved[0].key, "");
        assert_eq!(resolved[1].key, "");
        assert_eq!(resolved[1].canonical_label, "");
    }
}

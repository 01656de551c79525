//! Header label cleanup shared by the CSV and spreadsheet loaders.

use std::collections::BTreeSet;

/// Makes raw header cells into unique labels.
///
/// - A leading UTF-8 BOM is removed from the first label.
/// - Empty labels become `Unnamed: <index>`.
/// - A label equal to an earlier one gets the next free `.N` suffix.
///
/// Other whitespace and casing are kept; key resolution handles those.
pub fn normalize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    normalize_headers_at(raw, 0)
}

/// Same as [`normalize_headers`], for a header row whose first cell sits in
/// column `first_column` of the source. `Unnamed: <index>` uses the source
/// column.
pub fn normalize_headers_at<I, S>(raw: I, first_column: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut used = BTreeSet::new();
    let mut labels = Vec::new();
    for (index, value) in raw.into_iter().enumerate() {
        let value = value.as_ref();
        let value = if index == 0 {
            value.trim_start_matches('\u{feff}')
        } else {
            value
        };
        let base = if value.is_empty() {
            format!("Unnamed: {}", first_column + index)
        } else {
            value.to_string()
        };
        let label = if used.contains(&base) {
            (1..)
                .map(|n| format!("{base}.{n}"))
                .find(|candidate| !used.contains(candidate))
                .unwrap_or_default()
        } else {
            base
        };
        used.insert(label.clone());
        labels.push(label);
    }
    labels
}

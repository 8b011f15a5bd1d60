//! Header normalization.

use std::collections::BTreeSet;

/// Strips a stray byte-order mark from the first header.
pub(crate) fn clean_first_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').to_string()
}

/// Makes header names unique: the second `X` becomes `X.1`, the third `X.2`.
///
/// Names are otherwise kept exactly as written; columns are matched
/// case-sensitively downstream.
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut out = Vec::with_capacity(headers.len());
    for header in headers {
        let mut candidate = header.clone();
        let mut suffix = 1usize;
        while seen.contains(&candidate) {
            candidate = format!("{header}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

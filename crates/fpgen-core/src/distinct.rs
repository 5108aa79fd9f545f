//! Order-preserving deduplication of comma-separated name lists.

use std::collections::HashSet;

/// Splits a comma-separated flag value, trimming entries and dropping empty ones.
pub fn split_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keeps the first occurrence of every entry, comparing trimmed text exactly.
pub fn distinct<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let item = item.as_ref().trim();
        if seen.insert(item.to_string()) {
            out.push(item.to_string());
        }
    }
    out
}

/// Keeps the first occurrence of every entry, comparing trimmed text without
/// regard to case. The surviving entry keeps the casing it was first seen with.
pub fn distinct_ignore_case<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let item = item.as_ref().trim();
        if seen.insert(item.to_lowercase()) {
            out.push(item.to_string());
        }
    }
    out
}

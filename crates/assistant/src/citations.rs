//! Citation ordering for display.

use std::collections::HashSet;

/// Source domains shown first, in order of preference.
const PREFERRED_SOURCES: &[&str] = &["groww.in", "hdfcfund.com"];

/// Display priority of a citation; lower sorts first.
pub fn priority(url: &str) -> usize {
    PREFERRED_SOURCES
        .iter()
        .position(|domain| url.contains(domain))
        .unwrap_or(PREFERRED_SOURCES.len())
}

/// Deduplicate and order citations for display.
///
/// Exact duplicates are dropped keeping the first occurrence, then the
/// survivors are stably sorted by [`priority`]. The input is not modified.
pub fn rank<S: AsRef<str>>(citations: &[S]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ranked: Vec<String> = citations
        .iter()
        .map(|url| url.as_ref())
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect();

    // sort_by_key is stable
    ranked.sort_by_key(|url| priority(url));
    ranked
}

//! Parsing helpers for route parameters and free-text search input.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Parse a numeric route or query parameter. Blank or non-numeric input is `None`.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim).and_then(|s| s.parse::<i64>().ok())
}

/// Lowercased, whitespace-separated search terms.
pub fn search_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// True when every term occurs (case-insensitively) in at least one haystack.
///
/// `terms` must already be lowercased (see [`search_terms`]). No terms matches
/// everything.
pub fn matches_all_terms<'a>(terms: &[String], haystacks: impl IntoIterator<Item = &'a str>) -> bool {
    if terms.is_empty() {
        return true;
    }
    let haystack = haystacks
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("\u{1f}");
    terms.iter().all(|term| haystack.contains(term.as_str()))
}

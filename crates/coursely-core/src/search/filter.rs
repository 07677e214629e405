/// Returns the candidates containing `query`, ignoring case.
///
/// Input order is preserved and an empty query matches everything.
pub fn filter<S: AsRef<str>>(candidates: &[S], query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();
    candidates
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| query_lower.is_empty() || name.to_lowercase().contains(&query_lower))
        .map(str::to_string)
        .collect()
}

/// Like [`filter`], but drops the candidate equal to `excluded` first.
///
/// Used for second-program lists, which never offer the primary program.
pub fn filter_excluding<S: AsRef<str>>(
    candidates: &[S],
    excluded: Option<&str>,
    query: &str,
) -> Vec<String> {
    let remaining: Vec<&str> = candidates
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| Some(*name) != excluded)
        .collect();
    filter(&remaining, query)
}

//! Query tokenizer
//!
//! Pipeline: split on single spaces → drop empty tokens → lowercase → dedup

use std::collections::BTreeSet;

/// Tokenize a raw query into a deduplicated set of lowercase words.
///
/// Splits on single space characters only; other whitespace is treated as
/// part of a token. Runs of spaces produce empty fragments, which are
/// dropped. The `BTreeSet` gives downstream facets a deterministic token
/// order, which keeps whole-search results reproducible.
///
/// # Example
///
/// ```
/// use denkmal_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Brandenburg Schiller Tor Tor");
/// assert_eq!(
///     tokens.into_iter().collect::<Vec<_>>(),
///     vec!["brandenburg", "schiller", "tor"]
/// );
/// ```
pub fn tokenize(query: &str) -> BTreeSet<String> {
    query
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

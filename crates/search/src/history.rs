//! Append-only search history
//!
//! Process-wide ordered log of raw query strings, alive for the lifetime of
//! the service. No eviction and no size bound; persistence is an explicit
//! non-goal.

use parking_lot::RwLock;

/// Ordered log of raw queries.
///
/// # Thread Safety
///
/// Appends take a short write lock; reads clone the log under a read lock.
#[derive(Debug, Default)]
pub struct SearchHistory {
    entries: RwLock<Vec<String>>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one raw query string.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.write().push(entry.into());
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.read().clone()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_starts_empty() {
        let history = SearchHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_history_preserves_append_order() {
        let history = SearchHistory::new();
        history.record("tor");
        history.record("schiller");
        history.record("tor");
        assert_eq!(history.entries(), vec!["tor", "schiller", "tor"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_history_stores_raw_strings() {
        // No normalization: the log keeps exactly what the caller sent.
        let history = SearchHistory::new();
        history.record("  Brandenburger  TOR ");
        assert_eq!(history.entries(), vec!["  Brandenburger  TOR "]);
    }

    #[test]
    fn test_history_concurrent_appends() {
        use std::sync::Arc;
        use std::thread;

        let history = Arc::new(SearchHistory::new());
        let mut handles = Vec::new();
        for i in 0..4 {
            let history = Arc::clone(&history);
            handles.push(thread::spawn(move || {
                for j in 0..25 {
                    history.record(format!("q{i}-{j}"));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(history.len(), 100);
    }
}

//! Thread-safe searcher with lock-free matching.
//!
//! A built [`PackedAutomaton`](super::PackedAutomaton) is immutable and can
//! be shared across threads as-is; this module covers the remaining case of
//! a needle set that changes over time. Writers rebuild a whole snapshot
//! under a mutex and publish it atomically; readers load the current
//! snapshot without taking any lock.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::{CaseSensitivity, Match, Searcher};

/// A concurrently usable searcher over a mutable needle set.
///
/// Matching always runs against an immutable [`Searcher`] snapshot. Adding
/// needles rebuilds the snapshot from the full needle list and swaps it in;
/// scans already in flight keep the snapshot they loaded.
pub struct SharedSearcher<V> {
    /// Needle list for writers; the source of truth for rebuilds
    needles: Mutex<Vec<(String, V)>>,
    /// Current snapshot, swapped atomically on every rebuild
    current: ArcSwap<Searcher<V>>,
    case: CaseSensitivity,
}

impl<V: Clone> SharedSearcher<V> {
    /// Create an empty shared searcher.
    pub fn new(case: CaseSensitivity) -> Self {
        let empty = Searcher::new(std::iter::empty::<(&str, V)>(), case);
        Self {
            needles: Mutex::new(Vec::new()),
            current: ArcSwap::from_pointee(empty),
            case,
        }
    }

    /// Add a batch of needles and publish a rebuilt snapshot.
    ///
    /// Writers are serialized; concurrent readers keep matching against the
    /// previous snapshot until the swap lands.
    pub fn add_needles<S: AsRef<str>>(&self, batch: impl IntoIterator<Item = (S, V)>) {
        let mut needles = self.needles.lock();
        needles.extend(
            batch
                .into_iter()
                .map(|(n, v)| (n.as_ref().to_string(), v)),
        );
        let rebuilt = Searcher::new(
            needles.iter().map(|(n, v)| (n.as_str(), v.clone())),
            self.case,
        );
        self.current.store(Arc::new(rebuilt));
    }

    /// Grab the current snapshot. Lock-free; the snapshot stays valid for as
    /// long as the returned `Arc` lives, across later swaps.
    pub fn load(&self) -> Arc<Searcher<V>> {
        self.current.load_full()
    }

    /// Collect every occurrence in `text` against the current snapshot.
    pub fn find_all(&self, text: &str) -> Vec<Match<V>> {
        self.current.load().find_all(text)
    }

    /// Number of needles added so far.
    pub fn needle_count(&self) -> usize {
        self.needles.lock().len()
    }
}

//! needlecast: multi-pattern substring search with payload-carrying needles
//!
//! Builds an Aho-Corasick automaton over a fixed set of byte-encoded needles,
//! then scans UTF-8 text reporting every occurrence in the order occurrences
//! end, either byte-exact or folding the input to lowercase on the fly.

mod automaton;

pub use automaton::{build, Match, NeedleTrie, Next, PackedAutomaton, SharedSearcher};

/// Whether matching compares bytes exactly or folds input to lowercase first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseSensitivity {
    /// Needles and input are compared byte for byte.
    CaseSensitive,
    /// Input code points are folded to lowercase during the scan. Needles
    /// are lowercased at build time by [`Searcher::new`]; callers driving
    /// [`PackedAutomaton::run_lower`] directly must lowercase needles
    /// themselves.
    IgnoreCase,
}

/// A ready-to-use searcher that collects occurrences into lists.
///
/// ```
/// use needlecast::{CaseSensitivity, Searcher};
///
/// let searcher = Searcher::new(
///     vec![("he", 1), ("she", 2), ("his", 3), ("hers", 4)],
///     CaseSensitivity::CaseSensitive,
/// );
///
/// let hits: Vec<(usize, i32)> = searcher
///     .find_all("ushers")
///     .iter()
///     .map(|m| (m.end, m.value))
///     .collect();
/// assert_eq!(hits, vec![(4, 2), (4, 1), (6, 4)]);
/// ```
///
/// The searcher wraps an immutable [`PackedAutomaton`] and is freely
/// shareable; wrap it in `Arc` for concurrent use, or reach for
/// [`SharedSearcher`] when the needle set changes at runtime. For
/// reducer-driven scanning without collection, use the automaton directly:
///
/// ```
/// use needlecast::{build, Next};
///
/// let automaton = build(vec![(b"aa".to_vec(), ())]);
/// let count = automaton.run(b"aaaa", 0usize, |acc, _| Next::Step(acc + 1));
/// assert_eq!(count, 3);
/// ```
pub struct Searcher<V> {
    automaton: PackedAutomaton<V>,
    case: CaseSensitivity,
}

impl<V: Clone> Searcher<V> {
    /// Build a searcher from `(needle, payload)` pairs.
    ///
    /// With [`CaseSensitivity::IgnoreCase`], needles are lowercased here so
    /// the folded scan can match them.
    pub fn new<S: AsRef<str>>(
        needles: impl IntoIterator<Item = (S, V)>,
        case: CaseSensitivity,
    ) -> Self {
        let automaton = match case {
            CaseSensitivity::CaseSensitive => build(
                needles
                    .into_iter()
                    .map(|(n, v)| (n.as_ref().as_bytes().to_vec(), v)),
            ),
            CaseSensitivity::IgnoreCase => build(
                needles
                    .into_iter()
                    .map(|(n, v)| (n.as_ref().to_lowercase().into_bytes(), v)),
            ),
        };
        Self { automaton, case }
    }

    /// Collect every occurrence in `text`, in report order.
    pub fn find_all(&self, text: &str) -> Vec<Match<V>> {
        let collect = |mut acc: Vec<Match<V>>, m: Match<&V>| {
            acc.push(Match {
                end: m.end,
                value: m.value.clone(),
            });
            Next::Step(acc)
        };
        match self.case {
            CaseSensitivity::CaseSensitive => {
                self.automaton.run(text.as_bytes(), Vec::new(), collect)
            }
            CaseSensitivity::IgnoreCase => {
                self.automaton.run_lower(text.as_bytes(), Vec::new(), collect)
            }
        }
    }

    /// Check whether any needle occurs in `text`, stopping at the first hit.
    pub fn is_match(&self, text: &str) -> bool {
        let first = |_: bool, _: Match<&V>| Next::Done(true);
        match self.case {
            CaseSensitivity::CaseSensitive => self.automaton.run(text.as_bytes(), false, first),
            CaseSensitivity::IgnoreCase => self.automaton.run_lower(text.as_bytes(), false, first),
        }
    }

    /// Count occurrences in `text` without collecting them.
    pub fn count(&self, text: &str) -> usize {
        let bump = |acc: usize, _: Match<&V>| Next::Step(acc + 1);
        match self.case {
            CaseSensitivity::CaseSensitive => self.automaton.run(text.as_bytes(), 0, bump),
            CaseSensitivity::IgnoreCase => self.automaton.run_lower(text.as_bytes(), 0, bump),
        }
    }

    /// The case handling this searcher was built with.
    pub fn case(&self) -> CaseSensitivity {
        self.case
    }

    /// The underlying automaton, for reducer-driven scans.
    pub fn automaton(&self) -> &PackedAutomaton<V> {
        &self.automaton
    }
}

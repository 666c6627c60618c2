//! Packed Aho-Corasick automaton: construction, representation, matching.
//!
//! # Module Organization
//!
//! - `trie`: arena trie builder (goto edges, failure links, payload propagation)
//! - `packed`: the immutable packed automaton and its 64-bit transition word
//! - `matcher`: the byte-driven matching loops (`run`, `run_lower`)
//! - `utf8`: code point decode/fold/re-encode helpers for the folded loop
//! - `thread_safe`: swappable shared snapshots for concurrent use

mod matcher;
mod packed;
mod thread_safe;
mod trie;
mod utf8;

// Re-export from packed
pub use packed::{PackedAutomaton, StateId, Transition, ROOT};

// Re-export from matcher
pub use matcher::{Match, Next};

// Re-export from trie
pub use trie::{build, NeedleTrie};

// Re-export from thread_safe
pub use thread_safe::SharedSearcher;

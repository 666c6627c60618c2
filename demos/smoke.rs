//! Comprehensive smoke test for needlecast

use needlecast::{build, CaseSensitivity, Next, Searcher, SharedSearcher};

fn main() {
    println!("Running needlecast smoke tests...\n");

    test_find_all();
    test_overlapping();
    test_ignore_case();
    test_reducer_early_exit();
    test_payloads();
    test_shared_searcher();

    println!("\n✅ All smoke tests passed!");
}

fn test_find_all() {
    let searcher = Searcher::new(
        vec![("he", 1), ("she", 2), ("his", 3), ("hers", 4)],
        CaseSensitivity::CaseSensitive,
    );

    let hits: Vec<(usize, i32)> = searcher
        .find_all("ushers")
        .iter()
        .map(|m| (m.end, m.value))
        .collect();
    assert_eq!(hits, vec![(4, 2), (4, 1), (6, 4)]);
    println!("✓ Find all occurrences");
}

fn test_overlapping() {
    let searcher = Searcher::new(vec![("aa", ())], CaseSensitivity::CaseSensitive);
    assert_eq!(searcher.count("aaaa"), 3);
    println!("✓ Overlapping occurrences");
}

fn test_ignore_case() {
    let searcher = Searcher::new(vec![("café", 1)], CaseSensitivity::IgnoreCase);

    let hits = searcher.find_all("Un CAFÉ, s'il vous plaît");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].end, 8);

    assert!(searcher.is_match("CaFé"));
    assert!(!searcher.is_match("cafe"));
    println!("✓ Case-insensitive matching with non-ASCII folds");
}

fn test_reducer_early_exit() {
    let automaton = build(vec![(b"stop".to_vec(), "first")]);

    let found = automaton.run(b"full stop. stop again.", None, |_, m| {
        Next::Done(Some((m.end, *m.value)))
    });
    assert_eq!(found, Some((9, "first")));
    println!("✓ Reducer-driven early exit");
}

fn test_payloads() {
    // Payloads are arbitrary caller values, returned verbatim.
    #[derive(Clone, Debug, PartialEq)]
    struct Rule {
        id: u32,
        severity: &'static str,
    }

    let searcher = Searcher::new(
        vec![
            ("password", Rule { id: 1, severity: "high" }),
            ("token", Rule { id: 2, severity: "medium" }),
        ],
        CaseSensitivity::CaseSensitive,
    );

    let hits = searcher.find_all("a password and a token");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].value.severity, "high");
    assert_eq!(hits[1].value.id, 2);
    println!("✓ Arbitrary payloads");
}

fn test_shared_searcher() {
    let shared = SharedSearcher::new(CaseSensitivity::IgnoreCase);
    shared.add_needles(vec![("error", 1)]);
    assert_eq!(shared.find_all("ERROR: oh no").len(), 1);

    shared.add_needles(vec![("warning", 2)]);
    assert_eq!(shared.find_all("Error and WARNING").len(), 2);
    println!("✓ Shared searcher with hot needle updates");
}

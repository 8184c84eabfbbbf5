// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the Pattern Trie, checked against a naive
//! backtracking matcher over single patterns.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::pattern::PatternTrie;

const SINGLE: u8 = b'?';
const SERIES: u8 = b'*';

/// Reference matcher: one pattern against one query, textbook recursion.
fn naive_match(pattern: &[u8], query: &[u8]) -> bool {
    match pattern.split_first() {
        None => query.is_empty(),
        Some((&SERIES, rest)) => (0..=query.len()).any(|k| naive_match(rest, &query[k..])),
        Some((&SINGLE, rest)) => !query.is_empty() && naive_match(rest, &query[1..]),
        Some((&piece, rest)) => query.first() == Some(&piece) && naive_match(rest, &query[1..]),
    }
}

// Two literal pieces plus both wildcards; short lengths keep the series
// expansion space small while still producing chains like `*a*a*`.
fn pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', SINGLE, SERIES]), 0..6)
}

fn query_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b']), 0..7)
}

proptest! {
    // Property: collect returns exactly the ids of patterns the naive
    // matcher accepts.
    #[test]
    fn prop_collect_agrees_with_naive(
        patterns in prop::collection::vec(pattern_strategy(), 0..12),
        query in query_strategy(),
    ) {
        let distinct: BTreeSet<Vec<u8>> = patterns.into_iter().collect();
        let mut trie = PatternTrie::new(SINGLE, SERIES).unwrap();
        let mut stored = Vec::new();
        for (id, pattern) in distinct.iter().enumerate() {
            trie.add(pattern, id);
            stored.push(pattern.clone());
        }

        let got: BTreeSet<usize> = trie.collect(&query).into_iter().collect();
        let want: BTreeSet<usize> = stored
            .iter()
            .enumerate()
            .filter(|(_, pattern)| naive_match(pattern, &query))
            .map(|(id, _)| id)
            .collect();
        prop_assert_eq!(got, want);
    }

    // Property: a pattern contributes its values at most once per query, no
    // matter how many wildcard expansions reach it.
    #[test]
    fn prop_collect_never_duplicates(
        patterns in prop::collection::vec(pattern_strategy(), 0..12),
        query in query_strategy(),
    ) {
        let distinct: BTreeSet<Vec<u8>> = patterns.into_iter().collect();
        let mut trie = PatternTrie::new(SINGLE, SERIES).unwrap();
        for (id, pattern) in distinct.iter().enumerate() {
            trie.add(pattern, id);
        }

        let hits = trie.collect(&query);
        let unique: BTreeSet<usize> = hits.iter().copied().collect();
        prop_assert_eq!(hits.len(), unique.len());
    }

    // Property: with no wildcards stored, collect degenerates to exact search.
    #[test]
    fn prop_literal_patterns_behave_like_search(
        keys in prop::collection::vec(query_strategy(), 0..12),
        query in query_strategy(),
    ) {
        let mut trie = PatternTrie::new(SINGLE, SERIES).unwrap();
        for (id, key) in keys.iter().enumerate() {
            trie.add(key, id);
        }

        let collected: BTreeSet<usize> = trie.collect(&query).into_iter().collect();
        let searched: BTreeSet<usize> = trie.search(&query).into_iter().collect();
        prop_assert_eq!(collected, searched);
    }

    // Property: a lone series wildcard matches every query.
    #[test]
    fn prop_series_matches_everything(query in query_strategy()) {
        let mut trie = PatternTrie::new(SINGLE, SERIES).unwrap();
        trie.add(&[SERIES], 0u8);
        prop_assert_eq!(trie.collect(&query), vec![0u8]);
    }
}

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai Trie.

/// Result type for Lanai Trie operations.
pub type TrieResult<T> = Result<T, TrieError>;

/// Errors that can occur in Lanai Trie operations.
///
/// Absence is never an error: lookups report misses with `false` or an empty
/// result. The only failure mode is an iterator observing a mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// An iterator observed a structural change since it was created. The
    /// sequence is terminal; restart it by calling `iter()` again.
    #[error("trie was modified after the iterator was created (version {started_at} -> {observed})")]
    ConcurrentModification {
        /// Version stamp captured when the iterator was created.
        started_at: u64,
        /// Version stamp observed on the failing pull.
        observed: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrieError::ConcurrentModification {
            started_at: 3,
            observed: 4,
        };
        assert_eq!(
            err.to_string(),
            "trie was modified after the iterator was created (version 3 -> 4)"
        );
    }
}

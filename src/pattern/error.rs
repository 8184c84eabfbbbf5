// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Pattern Trie.

/// Result type for Pattern Trie operations.
pub type PatternResult<T> = Result<T, PatternTrieError>;

/// Errors that can occur when constructing or using a Pattern Trie.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternTrieError {
    /// The two wildcard sentinels must be distinct pieces; a single sentinel
    /// cannot mean both "exactly one" and "zero or more".
    #[error("wildcard sentinels must be distinct pieces")]
    IndistinctWildcards,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PatternTrieError::IndistinctWildcards.to_string(),
            "wildcard sentinels must be distinct pieces"
        );
    }
}

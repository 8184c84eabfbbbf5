// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for the Lanai Trie library.
//!
//! This module contains unit tests for each structure, covering the full
//! operation surface, the traversal-order and counting invariants, and the
//! wildcard matching edge cases. Property-based tests live next to each
//! structure in its own `tests` directory.

//! Integration tests for Layer 2: Parser
//!
//! Tests for query splitting, segment validation, book-name normalization,
//! the book catalog, and the query pipeline.

mod catalog_tests;
mod normalizer_tests;

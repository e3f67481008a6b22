//! Shared utilities.
//!
//! - [`tokenizer`] - cropping whitespace-delimited tokens to index keys

pub mod tokenizer;

pub use tokenizer::*;

//! # wordpos - word-position prefix index
//!
//! wordpos builds an in-memory prefix index over the words of a text source
//! and answers point queries: given a key of at most five characters, it
//! returns the 1-based ordinal of the word that first produced that cropped
//! key, or reports that no such key exists or that the key is too long.
//!
//! ## Architecture
//!
//! - [`index`] - trie construction and lookup (arena trie, streaming loader)
//! - [`repl`] - interactive query loop
//! - [`output`] - result formatting
//! - [`utils`] - token cropping
//!
//! ## Quick Start
//!
//! ```ignore
//! use wordpos::index::{build_index, IndexConfig, Lookup};
//! use std::path::Path;
//!
//! let index = build_index(Path::new("war-and-peace.txt"), &IndexConfig::default()).unwrap();
//! match index.lookup("pierr") {
//!     Lookup::Found(position) => println!("{}", position),
//!     Lookup::NotFound => println!("Key not found."),
//!     Lookup::LengthExceeded => println!("Key length exceeded ({}).", index.max_key_length()),
//! }
//! ```
//!
//! ## Construction semantics
//!
//! Insertion is deliberately stateful across calls: a frontier of per-depth
//! node references carries each insertion's partially resolved children into
//! the next one, so a key's deep path may hang off the previous key's
//! resolution rather than its own. The index reproduces this historical
//! behavior exactly; see [`index::trie`] for the details.

pub mod index;
pub mod output;
pub mod repl;
pub mod utils;

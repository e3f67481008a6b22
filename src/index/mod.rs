pub mod build;
pub mod trie;
pub mod types;

pub use build::build_index;
pub use trie::{IndexBuilder, PrefixIndex};
pub use types::*;

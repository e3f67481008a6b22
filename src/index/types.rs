use serde::{Deserialize, Serialize};

/// Identifier of a node in the trie arena
pub type NodeId = u32;

/// The root node always occupies the first arena slot
pub const ROOT: NodeId = 0;

/// Default bound on key depth; source tokens are cropped to this many characters
pub const DEFAULT_MAX_KEY_LENGTH: usize = 5;

/// Which characters count as alphabetic when cropping tokens.
///
/// The original locale-dependent `isalpha` is modelled as an explicit,
/// injectable predicate so the classification is part of the configuration
/// rather than ambient process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alphabet {
    /// Unicode alphabetic characters (`char::is_alphabetic`)
    #[default]
    Unicode,
    /// ASCII letters only
    Ascii,
}

impl Alphabet {
    /// Whether `ch` survives token cropping under this alphabet
    pub fn contains(self, ch: char) -> bool {
        match self {
            Alphabet::Unicode => ch.is_alphabetic(),
            Alphabet::Ascii => ch.is_ascii_alphabetic(),
        }
    }
}

/// Configuration for the indexer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Maximum number of characters kept per cropped key (trie depth bound)
    pub max_key_length: usize,
    /// Predicate deciding which characters survive cropping
    pub alphabet: Alphabet,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            alphabet: Alphabet::Unicode,
        }
    }
}

/// Outcome of a point query against the index.
///
/// Both failure variants are ordinary recoverable values; the query loop
/// prints a message and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Position recorded at the node the key resolves to
    Found(i64),
    /// No trie path matches the key (also returned for the empty key,
    /// since the root never carries a position)
    NotFound,
    /// Key is longer than the configured maximum
    LengthExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_alphabet_accepts_cyrillic() {
        assert!(Alphabet::Unicode.contains('ж'));
        assert!(Alphabet::Unicode.contains('z'));
        assert!(!Alphabet::Unicode.contains('7'));
        assert!(!Alphabet::Unicode.contains('-'));
    }

    #[test]
    fn ascii_alphabet_rejects_non_ascii() {
        assert!(Alphabet::Ascii.contains('q'));
        assert!(!Alphabet::Ascii.contains('ж'));
        assert!(!Alphabet::Ascii.contains('_'));
    }

    #[test]
    fn default_config() {
        let config = IndexConfig::default();
        assert_eq!(config.max_key_length, 5);
        assert_eq!(config.alphabet, Alphabet::Unicode);
    }
}

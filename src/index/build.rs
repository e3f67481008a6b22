//! Streaming load of a text source into the prefix index.
//!
//! The loader makes a single pass over the source: whitespace-delimited
//! tokens are cropped to their alphabetic prefix, empty results are skipped,
//! and every surviving key is fed to the builder in order. Ordinals are
//! assigned by the builder, one per accepted key.

use crate::index::trie::{IndexBuilder, PrefixIndex};
use crate::index::types::{Alphabet, IndexConfig};
use crate::utils::crop_token;
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Lazy, single-pass iterator over the cropped keys of a token source.
///
/// Reads line-buffered; bytes that are not valid UTF-8 are replaced lossily
/// before classification (the replacement character is not alphabetic, so it
/// is stripped like any other symbol). Tokens with no alphabetic characters
/// yield nothing and consume no ordinal.
pub struct CroppedKeys<R> {
    reader: R,
    pending: VecDeque<String>,
    line_buf: Vec<u8>,
    alphabet: Alphabet,
    max_key_length: usize,
}

impl<R: BufRead> CroppedKeys<R> {
    pub fn new(reader: R, config: &IndexConfig) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line_buf: Vec::new(),
            alphabet: config.alphabet,
            max_key_length: config.max_key_length,
        }
    }
}

impl<R: BufRead> Iterator for CroppedKeys<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.pending.pop_front() {
                return Some(Ok(key));
            }
            self.line_buf.clear();
            match self.reader.read_until(b'\n', &mut self.line_buf) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&self.line_buf);
                    self.pending.extend(
                        line.split_whitespace()
                            .filter_map(|token| crop_token(token, self.alphabet, self.max_key_length)),
                    );
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Build the index from a source file.
///
/// Failure to open the source is the only fatal error of the load phase.
pub fn build_index(path: &Path, config: &IndexConfig) -> Result<PrefixIndex> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open source file: {}", path.display()))?;
    build_from_reader(BufReader::new(file), config)
        .with_context(|| format!("Failed to read source file: {}", path.display()))
}

/// Build the index from any buffered token source
pub fn build_from_reader<R: BufRead>(reader: R, config: &IndexConfig) -> Result<PrefixIndex> {
    let mut builder = IndexBuilder::new(config);
    for key in CroppedKeys::new(reader, config) {
        builder.insert(&key?);
    }
    Ok(builder.finish())
}

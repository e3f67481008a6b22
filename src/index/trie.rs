//! Bounded-depth character trie and its incremental builder.
//!
//! The trie is an arena of nodes addressed by [`NodeId`]; the arena is owned
//! by [`PrefixIndex`] and freed as a unit, so there is no per-node ownership
//! to manage. Depth is bounded by `max_key_length`, and lookups follow exact
//! key paths only.
//!
//! Construction is order-sensitive. [`IndexBuilder`] keeps one frontier slot
//! per depth, carried across calls to [`IndexBuilder::insert`]: slot `d + 1`
//! is written from the child resolved at depth `d` of the *current* key, but
//! the depth loop runs deepest-first, so that slot is only read by the *next*
//! insertion. A key's effective path through the upper depths is therefore a
//! residue of the preceding key's resolution. Lookup results and stored
//! positions are defined entirely in terms of this sequence of operations;
//! rewriting it as an independent per-key insert changes observable results.

use crate::index::types::{IndexConfig, Lookup, NodeId, ROOT};
use rustc_hash::FxHashMap;

/// A single trie node stored in the arena
#[derive(Debug, Default)]
struct Node {
    children: FxHashMap<char, NodeId>,
    /// Set when the node is created during insertion; never overwritten.
    /// Only the root stays unset.
    position: Option<i64>,
}

/// Read-only prefix index produced by [`IndexBuilder::finish`]
#[derive(Debug)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
    max_key_length: usize,
    key_count: u64,
}

impl PrefixIndex {
    /// Depth bound of the trie (maximum queryable key length)
    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    /// Number of cropped keys accepted during construction
    #[allow(dead_code)]
    pub fn key_count(&self) -> u64 {
        self.key_count
    }

    /// Number of arena nodes, root included
    #[allow(dead_code)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolve a query key to the position stored at the end of its path.
    ///
    /// Keys longer than the depth bound are rejected without walking the
    /// trie. The empty key resolves to the root, which carries no position,
    /// so it reports [`Lookup::NotFound`].
    pub fn lookup(&self, key: &str) -> Lookup {
        if key.chars().count() > self.max_key_length {
            return Lookup::LengthExceeded;
        }
        let mut current = ROOT;
        for ch in key.chars() {
            match self.nodes[current as usize].children.get(&ch) {
                Some(&child) => current = child,
                None => return Lookup::NotFound,
            }
        }
        match self.nodes[current as usize].position {
            Some(position) => Lookup::Found(position),
            None => Lookup::NotFound,
        }
    }
}

/// Incremental trie builder.
///
/// Accepts cropped keys in source order; each call to [`insert`] consumes
/// the next ordinal. Consumed by [`finish`] into the read-only index.
///
/// [`insert`]: IndexBuilder::insert
/// [`finish`]: IndexBuilder::finish
pub struct IndexBuilder {
    nodes: Vec<Node>,
    /// One slot per depth; slot 0 is permanently bound to the root.
    frontier: Vec<Option<NodeId>>,
    ordinal: u64,
    max_key_length: usize,
    key_buf: Vec<char>,
}

impl IndexBuilder {
    pub fn new(config: &IndexConfig) -> Self {
        assert!(config.max_key_length >= 1, "max_key_length must be at least 1");
        let mut frontier = vec![None; config.max_key_length];
        frontier[0] = Some(ROOT);
        Self {
            nodes: vec![Node::default()],
            frontier,
            ordinal: 0,
            max_key_length: config.max_key_length,
            key_buf: Vec::new(),
        }
    }

    /// Number of keys accepted so far
    #[allow(dead_code)]
    pub fn key_count(&self) -> u64 {
        self.ordinal
    }

    /// Insert the next cropped key.
    ///
    /// The key must be non-empty and at most `max_key_length` characters;
    /// the loader guarantees both. Never fails.
    pub fn insert(&mut self, key: &str) {
        self.key_buf.clear();
        self.key_buf.extend(key.chars());
        debug_assert!(!self.key_buf.is_empty());
        debug_assert!(self.key_buf.len() <= self.max_key_length);

        self.ordinal += 1;
        let ordinal = self.ordinal as i64;
        let deepest = self.max_key_length - 1;

        for depth in (0..=deepest).rev() {
            if self.key_buf.len() < depth {
                self.frontier[depth] = None;
            }
            let Some(parent) = self.frontier[depth] else {
                continue;
            };
            // A key of exactly `depth` characters has no character here; the
            // original read the string terminator, modelled as NUL. The NUL
            // child is unreachable by alphabetic queries but still claims
            // the next frontier slot.
            let ch = self.key_buf.get(depth).copied().unwrap_or('\0');
            let child = self.child_or_insert(parent, ch, ordinal - depth as i64);
            if depth != deepest {
                self.frontier[depth + 1] = Some(child);
            }
        }
    }

    fn child_or_insert(&mut self, parent: NodeId, ch: char, position: i64) -> NodeId {
        if let Some(&child) = self.nodes[parent as usize].children.get(&ch) {
            return child;
        }
        let child = self.nodes.len() as NodeId;
        self.nodes.push(Node {
            children: FxHashMap::default(),
            position: Some(position),
        });
        self.nodes[parent as usize].children.insert(ch, child);
        child
    }

    /// Freeze the builder into the queryable index
    pub fn finish(self) -> PrefixIndex {
        PrefixIndex {
            nodes: self.nodes,
            max_key_length: self.max_key_length,
            key_count: self.ordinal,
        }
    }
}

//! Trie over pattern characters.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{PatternError, Result};
use crate::pattern::{BOUNDARY, Pattern};
use crate::weights::WeightVector;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: FxHashMap<char, usize>,
    /// Child reached through a word edge. Kept apart from `children` so a
    /// literal `.` inside a word never matches an anchored pattern.
    edge: Option<usize>,
    /// Weights of the pattern ending at this node, if any.
    weights: Option<SmallVec<[u8; 8]>>,
}

/// Character trie of compiled patterns.
///
/// Lookup order does not matter: every match is folded into the result with
/// an element-wise maximum.
#[derive(Debug, Clone)]
pub(crate) struct PatternTrie {
    nodes: Vec<TrieNode>,
    patterns: usize,
}

impl PatternTrie {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            patterns: 0,
        }
    }

    pub(crate) fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Inserts a pattern. Re-inserting identical weights is a no-op; the same
    /// letters with different weights are rejected.
    pub(crate) fn insert(&mut self, pattern: &Pattern) -> Result<()> {
        let mut node_idx = 0;
        for &ch in pattern.chars() {
            let existing = if ch == BOUNDARY {
                self.nodes[node_idx].edge
            } else {
                self.nodes[node_idx].children.get(&ch).copied()
            };
            node_idx = match existing {
                Some(idx) => idx,
                None => {
                    let idx = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    let parent = &mut self.nodes[node_idx];
                    if ch == BOUNDARY {
                        parent.edge = Some(idx);
                    } else {
                        parent.children.insert(ch, idx);
                    }
                    idx
                }
            };
        }

        let node = &mut self.nodes[node_idx];
        if let Some(existing) = &node.weights {
            return if existing.as_slice() == pattern.weights() {
                Ok(())
            } else {
                Err(PatternError::ConflictingPattern {
                    pattern: pattern.letters(),
                })
            };
        }
        node.weights = Some(SmallVec::from_slice(pattern.weights()));
        self.patterns += 1;
        Ok(())
    }

    /// Merges every pattern that matches the padded word starting at `start`.
    ///
    /// The padded word is `word` with an edge before and after it, so it has
    /// `word.len() + 2` positions and padded gap `g` is word gap `g - 1`;
    /// gaps outside the word are dropped.
    pub(crate) fn apply_at(&self, word: &[char], start: usize, out: &mut WeightVector) {
        let last = word.len() + 1;
        let mut node_idx = 0;
        for pos in start..=last {
            let node = &self.nodes[node_idx];
            let next = if pos == 0 || pos == last {
                node.edge
            } else {
                node.children.get(&word[pos - 1]).copied()
            };
            let Some(next) = next else {
                break;
            };
            node_idx = next;
            if let Some(weights) = &self.nodes[node_idx].weights {
                for (j, &weight) in weights.iter().enumerate() {
                    if let Some(gap) = (start + j).checked_sub(1) {
                        out.merge_max(gap, weight);
                    }
                }
            }
        }
    }
}

//! Per-word gap weights.

use smallvec::SmallVec;

/// Weights over the gaps of one word.
///
/// A word of `n` characters has `n + 1` gaps: gap 0 precedes the first
/// character and gap `n` follows the last. Each slot holds the maximum weight
/// any matching pattern assigned to that gap. An odd weight permits a break;
/// an even weight (including 0) forbids it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightVector {
    gaps: SmallVec<[u8; 32]>,
}

impl WeightVector {
    /// All-zero weights for a word of `word_len` characters.
    #[must_use]
    pub fn zeroed(word_len: usize) -> Self {
        Self {
            gaps: SmallVec::from_elem(0, word_len + 1),
        }
    }

    /// Number of gaps (word length + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    /// Whether there are no gap slots. Vectors built by [`zeroed`](Self::zeroed)
    /// always hold at least one, the gap of an empty word.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    #[must_use]
    pub fn get(&self, gap: usize) -> Option<u8> {
        self.gaps.get(gap).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.gaps
    }

    /// Whether the weight at `gap` permits a break.
    #[must_use]
    pub fn is_break(&self, gap: usize) -> bool {
        self.get(gap).is_some_and(|w| w % 2 == 1)
    }

    /// Gaps with odd weight, in ascending order.
    pub fn odd_gaps(&self) -> impl Iterator<Item = usize> + '_ {
        self.gaps
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w % 2 == 1)
            .map(|(gap, _)| gap)
    }

    /// Raises the weight at `gap` to `weight` if it is higher. Out-of-range
    /// gaps are ignored.
    pub(crate) fn merge_max(&mut self, gap: usize, weight: u8) {
        if let Some(slot) = self.gaps.get_mut(gap) {
            *slot = (*slot).max(weight);
        }
    }
}

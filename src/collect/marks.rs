//! Visited-edge flags for a single traversal.

/// Bits per storage word.
const WORD_BITS: usize = 64;

/// log2 of [`WORD_BITS`].
const WORD_SHIFT: usize = 6;

/// Masks an index down to its bit position within a word.
const BIT_MASK: usize = WORD_BITS - 1;

/// Extra indices allocated past the mesh's reported maximum.
pub const DEFAULT_MARK_SLACK: usize = 2;

/// A dense bitset keyed by edge index.
///
/// Storage is proportional to the mesh's maximum edge allocation index, not
/// to its live edge count.
#[derive(Debug, Clone)]
pub struct EdgeMarkSet {
    words: Vec<u64>,
    capacity: usize,
}

impl EdgeMarkSet {
    /// Flags for every index in `0..=max_index + slack`.
    pub fn with_max_index(max_index: usize, slack: usize) -> Self {
        let capacity = max_index + 1 + slack;
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            capacity,
        }
    }

    /// Number of addressable indices.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the flag for `index` is set.
    #[inline]
    pub fn is_marked(&self, index: usize) -> bool {
        (self.words[index >> WORD_SHIFT] >> (index & BIT_MASK)) & 1 != 0
    }

    /// Set the flag for `index`.
    #[inline]
    pub fn mark(&mut self, index: usize) {
        self.words[index >> WORD_SHIFT] |= 1 << (index & BIT_MASK);
    }

    /// Set the flags of a face's three edges.
    #[inline]
    pub fn mark_face(&mut self, indices: [usize; 3]) {
        for index in indices {
            self.mark(index);
        }
    }

    /// Number of set flags.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

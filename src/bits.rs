//! Fixed-width bit vector backed by u64 words.
//! Width is set at construction and never changes; bits at or past the
//! width are kept zero so population counts and scans stay exact.

use smallvec::{smallvec, SmallVec};

const WORD_BITS: usize = 64;

/// Two inline words cover universes up to 128 bits without heap allocation.
type Words = SmallVec<[u64; 2]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BitVector {
    words: Words,
    nbits: usize,
}

impl BitVector {
    /// Create a vector of `nbits` bits, all clear.
    pub(crate) fn new(nbits: usize) -> Self {
        let num_words = nbits.div_ceil(WORD_BITS);
        Self {
            words: smallvec![0; num_words],
            nbits,
        }
    }

    /// Bit width of the vector.
    pub(crate) fn len(&self) -> usize {
        self.nbits
    }

    /// Number of set bits.
    pub(crate) fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check the bit at `index`. False for any index past the width.
    pub(crate) fn get(&self, index: usize) -> bool {
        if index >= self.nbits {
            return false;
        }
        let (word_idx, bit_idx) = (index / WORD_BITS, index % WORD_BITS);
        (self.words[word_idx] & (1 << bit_idx)) != 0
    }

    /// Set the bit at `index`. Callers stay within the width.
    pub(crate) fn set(&mut self, index: usize) {
        debug_assert!(index < self.nbits);
        let (word_idx, bit_idx) = (index / WORD_BITS, index % WORD_BITS);
        self.words[word_idx] |= 1 << bit_idx;
    }

    /// Clear the bit at `index`. Callers stay within the width.
    pub(crate) fn clear(&mut self, index: usize) {
        debug_assert!(index < self.nbits);
        let (word_idx, bit_idx) = (index / WORD_BITS, index % WORD_BITS);
        self.words[word_idx] &= !(1 << bit_idx);
    }

    /// Clear every bit.
    pub(crate) fn clear_all(&mut self) {
        for word in self.words.iter_mut() {
            *word = 0;
        }
    }

    /// Set every bit within the width.
    pub(crate) fn set_all(&mut self) {
        for word in self.words.iter_mut() {
            *word = !0;
        }
        self.mask_tail();
    }

    /// Lowest set position at or after `from`, if any.
    pub(crate) fn next_set_bit(&self, from: usize) -> Option<usize> {
        if from >= self.nbits {
            return None;
        }
        let mut word_idx = from / WORD_BITS;
        let mut word = self.words[word_idx] & (!0u64 << (from % WORD_BITS));
        loop {
            if word != 0 {
                return Some(word_idx * WORD_BITS + word.trailing_zeros() as usize);
            }
            word_idx += 1;
            if word_idx >= self.words.len() {
                return None;
            }
            word = self.words[word_idx];
        }
    }

    /// Returns iterator over indices of set bits
    pub(crate) fn ones(&self) -> Ones<'_> {
        Ones {
            words: self.words.as_slice(),
            word_idx: 0,
            current_word: if self.words.is_empty() {
                0
            } else {
                self.words[0]
            },
        }
    }

    pub(crate) fn union(&self, other: &Self) -> Self {
        self.zip_words(other, |a, b| a | b)
    }

    pub(crate) fn intersection(&self, other: &Self) -> Self {
        self.zip_words(other, |a, b| a & b)
    }

    pub(crate) fn difference(&self, other: &Self) -> Self {
        self.zip_words(other, |a, b| a & !b)
    }

    pub(crate) fn symmetric_difference(&self, other: &Self) -> Self {
        self.zip_words(other, |a, b| a ^ b)
    }

    /// Flip every bit within the width.
    pub(crate) fn complement(&self) -> Self {
        let mut out = self.clone();
        for word in out.words.iter_mut() {
            *word = !*word;
        }
        out.mask_tail();
        out
    }

    /// Combine word-wise. Operands of one universe always share a width.
    fn zip_words(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        debug_assert_eq!(self.nbits, other.nbits);
        let words = self
            .words
            .iter()
            .zip(other.words.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Self {
            words,
            nbits: self.nbits,
        }
    }

    /// Zero the bits of the last word that lie past the width.
    fn mask_tail(&mut self) {
        let tail = self.nbits % WORD_BITS;
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << tail) - 1;
            }
        }
    }
}

pub(crate) struct Ones<'a> {
    words: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl<'a> Iterator for Ones<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let trailing = self.current_word.trailing_zeros();
                self.current_word &= !(1 << trailing); // Clear the bit we just found
                return Some(self.word_idx * WORD_BITS + trailing as usize);
            }

            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current_word = self.words[self.word_idx];
        }
    }
}

//! GF(2) linear algebra over edge-incidence vectors.
//!
//! A cycle is represented by the set of edge ids it uses, stored as a dense bitset
//! indexed by edge id. Addition is XOR. `CycleSpace` keeps an echelon basis whose rows
//! are keyed by their lowest set bit (the pivot edge id).

use std::cmp::Ordering;

/// A dense bitset representing a vector over GF(2).
///
/// Internally stored as a `Vec<u64>` where each u64 holds 64 bits.
/// Bit `i` corresponds to word `i / 64`, bit position `i % 64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
}

impl BitVec {
    /// Creates a zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    /// Creates a vector with a single bit set.
    pub fn singleton(len: usize, bit: usize) -> Self {
        let mut v = Self::zeros(len);
        v.flip(bit);
        v
    }

    /// Creates a vector from a list of bit indices. Repeated indices cancel.
    pub fn from_indices<I>(len: usize, bits: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut v = Self::zeros(len);
        for bit in bits {
            v.flip(bit);
        }
        v
    }

    /// Returns true if the vector is the zero vector.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// # Panics
    /// Panics if `i` is not below the vector length.
    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.len, "bit index {i} out of range (len={})", self.len);
        (self.words[i / 64] >> (i % 64)) & 1 == 1
    }

    /// # Panics
    /// Panics if `i` is not below the vector length.
    pub fn flip(&mut self, i: usize) {
        assert!(i < self.len, "bit index {i} out of range (len={})", self.len);
        self.words[i / 64] ^= 1u64 << (i % 64);
    }

    /// XOR-assigns another vector into this one.
    ///
    /// # Panics
    /// Panics if lengths differ.
    pub fn xor_assign(&mut self, other: &Self) {
        assert_eq!(
            self.len, other.len,
            "xor_assign: length mismatch ({} vs {})",
            self.len, other.len
        );
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a ^= b;
        }
    }

    /// Index of the lowest set bit, or `None` for the zero vector.
    pub fn lowest_set_bit(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|&(_, &w)| w != 0)
            .map(|(word_idx, &w)| word_idx * 64 + w.trailing_zeros() as usize)
    }

    /// Compares two vectors as binary numbers, bit `len - 1` being the most significant.
    ///
    /// # Panics
    /// Panics if lengths differ.
    pub fn cmp_binary(&self, other: &Self) -> Ordering {
        assert_eq!(
            self.len, other.len,
            "cmp_binary: length mismatch ({} vs {})",
            self.len, other.len
        );
        self.words.iter().rev().cmp(other.words.iter().rev())
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Set bit indices in increasing order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(word_idx * 64 + bit)
            })
        })
    }
}

/// Outcome of offering a vector to a `CycleSpace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The vector was independent and now owns the pivot row at this edge id.
    Independent { pivot: usize },
    /// The vector lies in the span of the current rows; nothing changed.
    Dependent,
}

/// Incremental Gaussian elimination over GF(2).
///
/// Rows live in a dense arena; `pivot_row[e]` names the row whose lowest set bit is `e`.
/// Every pivot id leads exactly one row, so rows are pairwise independent.
#[derive(Debug, Clone)]
pub struct CycleSpace {
    dimension: usize,
    rows: Vec<BitVec>,
    pivot_row: Vec<Option<usize>>,
}

impl CycleSpace {
    /// An empty space over vectors of `dimension` bits (the edge count).
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            rows: Vec::new(),
            pivot_row: vec![None; dimension],
        }
    }

    pub fn rank(&self) -> usize {
        self.rows.len()
    }

    /// Reduces `vector` against the pivots in increasing pivot order.
    ///
    /// A pivot row only has bits at or above its pivot, so cancelling the lowest set bit
    /// repeatedly visits pivots in increasing order and never reintroduces a lower bit.
    pub fn reduce(&self, mut vector: BitVec) -> BitVec {
        while let Some(bit) = vector.lowest_set_bit() {
            match self.pivot_row[bit] {
                Some(row) => vector.xor_assign(&self.rows[row]),
                None => break,
            }
        }
        vector
    }

    pub fn is_independent(&self, vector: &BitVec) -> bool {
        !self.reduce(vector.clone()).is_zero()
    }

    /// Inserts `vector` if it is independent of the current rows.
    ///
    /// The residue after reduction becomes a new row keyed by its lowest set bit.
    /// A dependent vector leaves the space untouched.
    ///
    /// # Panics
    /// Panics if `vector` is not `dimension` bits long.
    pub fn test_and_insert(&mut self, vector: &BitVec) -> Insertion {
        assert_eq!(
            vector.len, self.dimension,
            "test_and_insert: vector has {} bits, space has dimension {}",
            vector.len, self.dimension
        );
        let residue = self.reduce(vector.clone());

        match residue.lowest_set_bit() {
            Some(pivot) => {
                self.pivot_row[pivot] = Some(self.rows.len());
                self.rows.push(residue);
                Insertion::Independent { pivot }
            }
            None => Insertion::Dependent,
        }
    }
}

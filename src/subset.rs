/*!
# Vertex Subsets

Exhaustive forcing computations visit (up to) every subset of the vertices, so subsets are the
central value type of this crate. Two flavors exist:

- [`VertexSubset`]: an immutable, `Copy` bit pattern over the vertices `0..n` (with `n <= 64`).
  Equality and hashing are by bit pattern, so subsets serve directly as keys of the memoized
  cost table and as entries of labelings.
- [`VertexSetBuilder`]: a mutable builder backed by a [`NodeBitSet`] that accumulates inserts
  and unions and is finally [frozen](VertexSetBuilder::freeze) into a [`VertexSubset`].

[`SubsetsOfSize`] enumerates all subsets of a fixed cardinality in increasing bit order.

```
use zqforce::subset::*;

let a: VertexSubset = [0, 2, 3].into_iter().collect();
let b = VertexSubset::singleton(1);

assert_eq!((a | b).len(), 4);
assert_eq!((a - VertexSubset::singleton(2)).iter().collect::<Vec<_>>(), vec![0, 3]);
assert_eq!(SubsetsOfSize::new(5, 2).count(), 10);
```
*/

use std::{
    fmt::Debug,
    ops::{BitAnd, BitOr, Sub},
};

use stream_bitset::prelude::*;

use crate::*;

/// The largest number of vertices a [`VertexSubset`] can hold
pub const MAX_VERTICES: NumNodes = u64::BITS;

/// An immutable set of vertices of a graph with at most [`MAX_VERTICES`] vertices
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct VertexSubset(u64);

impl VertexSubset {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Returns the set `{0, ..., n-1}`
    pub const fn full(n: NumNodes) -> Self {
        debug_assert!(n <= MAX_VERTICES);
        if n >= MAX_VERTICES {
            Self(u64::MAX)
        } else {
            Self((1u64 << n) - 1)
        }
    }

    /// Returns the set `{v}`
    pub const fn singleton(v: Node) -> Self {
        debug_assert!(v < MAX_VERTICES);
        Self(1u64 << v)
    }

    /// Creates a set from its raw bit pattern (bit `v` represents vertex `v`)
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bit pattern
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns *true* if `v` is in the set
    pub const fn contains(self, v: Node) -> bool {
        v < MAX_VERTICES && (self.0 >> v) & 1 == 1
    }

    /// Returns a copy of the set with `v` added
    pub const fn with(self, v: Node) -> Self {
        Self(self.0 | (1u64 << v))
    }

    /// Returns a copy of the set with `v` removed
    pub const fn without(self, v: Node) -> Self {
        Self(self.0 & !(1u64 << v))
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns *true* if every element of `self` is also in `other`
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Returns the number of elements
    pub const fn len(self) -> NumNodes {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the smallest element of the set
    pub const fn first(self) -> Option<Node> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros())
        }
    }

    /// Returns the only element if the set has exactly one element
    pub const fn single(self) -> Option<Node> {
        if self.0 != 0 && self.0 & (self.0 - 1) == 0 {
            Some(self.0.trailing_zeros())
        } else {
            None
        }
    }

    /// Iterates over the elements in increasing order
    pub fn iter(self) -> SubsetIter {
        SubsetIter(self.0)
    }

    /// Converts into a [`NodeBitSet`] over `n` nodes
    pub fn to_bitset(self, n: NumNodes) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(n, self.iter())
    }
}

impl BitOr for VertexSubset {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for VertexSubset {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl Sub for VertexSubset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl FromIterator<Node> for VertexSubset {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |set, v| set.with(v))
    }
}

impl IntoIterator for VertexSubset {
    type Item = Node;
    type IntoIter = SubsetIter;

    fn into_iter(self) -> SubsetIter {
        self.iter()
    }
}

impl Debug for VertexSubset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the elements of a [`VertexSubset`]
#[derive(Clone, Debug)]
pub struct SubsetIter(u64);

impl Iterator for SubsetIter {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        if self.0 == 0 {
            return None;
        }
        let v = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for SubsetIter {}

/// Mutable set of vertices that is frozen into a [`VertexSubset`] once complete
#[derive(Clone)]
pub struct VertexSetBuilder {
    bits: NodeBitSet,
}

impl VertexSetBuilder {
    /// Creates an empty builder over `n` vertices.
    /// ** Panics if `n > MAX_VERTICES` **
    pub fn new(n: NumNodes) -> Self {
        assert!(n <= MAX_VERTICES);
        Self {
            bits: NodeBitSet::new(n),
        }
    }

    /// Starts from an existing subset
    pub fn from_subset(n: NumNodes, subset: VertexSubset) -> Self {
        let mut builder = Self::new(n);
        builder.union_with(subset);
        builder
    }

    /// Inserts `v` and returns *true* if it was present before
    pub fn insert(&mut self, v: Node) -> bool {
        self.bits.set_bit(v)
    }

    /// Removes `v` and returns *true* if it was present before
    pub fn remove(&mut self, v: Node) -> bool {
        self.bits.clear_bit(v)
    }

    pub fn contains(&self, v: Node) -> bool {
        self.bits.get_bit(v)
    }

    /// Adds all elements of `subset`
    pub fn union_with(&mut self, subset: VertexSubset) {
        self.bits.set_bits(subset.iter());
    }

    pub fn len(&self) -> NumNodes {
        self.bits.cardinality()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freezes the current state into an immutable [`VertexSubset`]
    pub fn freeze(&self) -> VertexSubset {
        self.bits.iter_set_bits().collect()
    }
}

impl Extend<Node> for VertexSetBuilder {
    fn extend<T: IntoIterator<Item = Node>>(&mut self, iter: T) {
        self.bits.set_bits(iter);
    }
}

impl From<&NodeBitSet> for VertexSetBuilder {
    /// ** Panics if the bitset holds more than `MAX_VERTICES` bits **
    fn from(bits: &NodeBitSet) -> Self {
        assert!(bits.number_of_bits() <= MAX_VERTICES);
        Self { bits: bits.clone() }
    }
}

/// Enumerates all subsets of `{0, ..., n-1}` with exactly `k` elements in increasing order of
/// their bit patterns (Gosper's hack).
#[derive(Clone, Debug)]
pub struct SubsetsOfSize {
    limit: u128,
    current: Option<u128>,
}

impl SubsetsOfSize {
    pub fn new(n: NumNodes, k: NumNodes) -> Self {
        assert!(n <= MAX_VERTICES);
        let current = (k <= n).then(|| (1u128 << k) - 1);
        Self {
            limit: 1u128 << n,
            current,
        }
    }
}

impl Iterator for SubsetsOfSize {
    type Item = VertexSubset;

    fn next(&mut self) -> Option<VertexSubset> {
        let x = self.current?;
        if x == 0 {
            self.current = None;
            return Some(VertexSubset::EMPTY);
        }

        let lowest = x & x.wrapping_neg();
        let ripple = x + lowest;
        let next = (((ripple ^ x) >> 2) / lowest) | ripple;
        self.current = (next < self.limit).then_some(next);

        Some(VertexSubset(x as u64))
    }
}

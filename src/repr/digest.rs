/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which computes **hash-based digests** of
graphs that are independent of the order in which neighbors are stored.

The digest encodes
- the number of nodes, and
- a sorted list of normalized edges,

before feeding them into a cryptographic hash function.
Two graphs with the same digest are equal as labelled graphs (up to hash collisions);
applied to a canonically relabelled graph the digest becomes an isomorphism-invariant
signature (see [`CanonicalForm`](crate::forcing::CanonicalForm)).

## Example
```
use zqforce::{prelude::*, repr::digest::GraphDigest};

let a = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
let b = AdjArray::from_edges(3, [(2, 1), (0, 1)]);

assert_eq!(a.digest_sha256(), b.digest_sha256());
assert_eq!(a.digest_sha256().len(), 64);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a hash digest of a graph.
pub trait GraphDigest {
    /// Feeds the encoding of the graph into an existing hasher.
    /// Useful to combine the graph with additional data (e.g. vertex colors).
    fn update_digest<D: Digest>(&self, hasher: &mut D);

    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        self.update_digest(&mut hasher);
        format!("{:x}", hasher.finalize())
    }

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList,
{
    fn update_digest<D: Digest>(&self, hasher: &mut D) {
        // first encode the number of nodes in the graph
        hasher.update(self.number_of_nodes().to_le_bytes());

        // then append a sorted edge list
        let mut buffer = [0u8; 8];
        for Edge(u, v) in self.ordered_edges(true) {
            buffer[0..4].copy_from_slice(&u.to_le_bytes());
            buffer[4..8].copy_from_slice(&v.to_le_bytes());
            hasher.update(buffer);
        }
    }
}

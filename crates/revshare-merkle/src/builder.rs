use std::collections::HashMap;

use crate::error::TreeError;
use crate::hasher::AllocationHasher;
use crate::proof::Proof;

/// An ordered binary merkle tree of 32-byte nodes.
///
/// The tree is built once from an ordered leaf sequence and is immutable
/// afterward. Layers are derived pairwise with [`AllocationHasher::combine`];
/// an unpaired node at the end of an odd layer is promoted unchanged to the
/// next layer (no duplication or padding), so the root is reproducible
/// bit-for-bit from the same ordered input.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// layers[0] are the leaves, layers.last() is the single root node.
    layers: Vec<Vec<[u8; 32]>>,
    /// Mapping from leaf hash to its position in layers[0].
    leaf_index: HashMap<[u8; 32], usize>,
}

impl MerkleTree {
    /// Build a tree from an ordered, non-empty sequence of leaf hashes.
    pub fn build(leaves: Vec<[u8; 32]>) -> Result<Self, TreeError> {
        if leaves.is_empty() {
            return Err(TreeError::EmptyInput);
        }

        let mut leaf_index = HashMap::with_capacity(leaves.len());
        for (position, leaf) in leaves.iter().enumerate() {
            if leaf_index.insert(*leaf, position).is_some() {
                return Err(TreeError::DuplicateLeaf(position));
            }
        }

        let mut layers = vec![leaves];
        loop {
            let current = match layers.last() {
                Some(layer) if layer.len() > 1 => layer,
                _ => break,
            };
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for pair in current.chunks(2) {
                match pair {
                    [left, right] => next.push(AllocationHasher::combine(left, right)),
                    // Unpaired node: promote unchanged to the next layer.
                    [odd] => next.push(*odd),
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                }
            }
            layers.push(next);
        }

        Ok(MerkleTree { layers, leaf_index })
    }

    /// The single top node committing to the entire ordered leaf sequence.
    pub fn root(&self) -> [u8; 32] {
        // build() guarantees a final layer of exactly one node
        self.layers
            .last()
            .and_then(|layer| layer.first())
            .copied()
            .unwrap_or_default()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_index.len()
    }

    /// Generate the inclusion proof for a leaf: the ordered sibling hashes
    /// from the leaf's layer up to (excluding) the root. A layer where the
    /// node was promoted unpaired contributes no sibling.
    pub fn proof_for(&self, leaf: &[u8; 32]) -> Result<Proof, TreeError> {
        let mut position = *self.leaf_index.get(leaf).ok_or(TreeError::LeafNotFound)?;

        let mut siblings = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = if position % 2 == 0 {
                position + 1
            } else {
                position - 1
            };
            if let Some(hash) = layer.get(sibling) {
                siblings.push(*hash);
            }
            position /= 2;
        }

        Ok(Proof::new(siblings))
    }
}

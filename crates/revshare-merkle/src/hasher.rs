use sha2::{Digest, Sha256};

use crate::tree_constants::{INTERNAL_PREFIX, LEAF_PREFIX};

/// Hasher for the revshare allocation trees.
///
/// ## Security: Domain Separation via Prefixes
///
/// Each hash is prefixed with a type byte so a leaf hash can never collide
/// with an internal node hash (second preimage / leaf-node confusion
/// attacks):
///
/// - **Leaf nodes**: `SHA256(0x00 || leaf_data)`
/// - **Internal nodes**: `SHA256(0x01 || min(left, right) || max(left, right))`
///
/// ## Child Ordering
///
/// The two children of an internal node are sorted lexicographically before
/// hashing, so `combine(a, b) == combine(b, a)`. Proof verification therefore
/// only needs an ordered sibling list, never left/right position flags.
#[derive(Clone, Debug)]
pub struct AllocationHasher;

impl AllocationHasher {
    /// Hash a leaf node using the leaf domain separation prefix.
    pub fn hash_leaf(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update([LEAF_PREFIX]);
        hasher.update(data);
        hasher.finalize().into()
    }

    /// Hash an internal node from its two children, sorted lexicographically.
    pub fn combine(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update([INTERNAL_PREFIX]);
        if left <= right {
            hasher.update(left);
            hasher.update(right);
        } else {
            hasher.update(right);
            hasher.update(left);
        }
        hasher.finalize().into()
    }
}

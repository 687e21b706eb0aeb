use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::builder::MerkleTree;
use crate::error::TreeError;
use crate::hasher::AllocationHasher;
use crate::proof::{verify_proof, Proof};
use crate::tree_constants::{LEAF_ENCODED_LEN, LEAF_ENCODING_VERSION};

/// One beneficiary's entry in an allocation commitment.
///
/// `allocation` is a fixed-point scaled percentage of the window's funds
/// (100% == 100 × 1_000_000); the ledger crate owns the payout arithmetic,
/// this crate only commits to the value.
///
/// ## Leaf Encoding Stability
///
/// `to_hash` commits to a fixed byte layout that must never change once roots
/// derived from it are in circulation:
///
/// ```text
/// byte  0        leaf encoding version (0x01)
/// bytes 1..33    account id
/// bytes 33..49   allocation, u128 big-endian
/// ```
///
/// A layout change gets a new version byte, never a mutation of this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationLeaf {
    pub account: AccountId,
    pub allocation: u128,
}

impl AllocationLeaf {
    /// Hash this leaf into the canonical 32-byte tree leaf:
    /// `SHA256(0x00 || version || account || allocation_be)`.
    pub fn to_hash(&self) -> [u8; 32] {
        let mut encoded = [0u8; LEAF_ENCODED_LEN];
        encoded[0] = LEAF_ENCODING_VERSION;
        encoded[1..33].copy_from_slice(self.account.as_bytes());
        encoded[33..49].copy_from_slice(&self.allocation.to_be_bytes());
        AllocationHasher::hash_leaf(&encoded)
    }
}

/// Merkle commitment over an ordered list of (account, allocation) pairs.
///
/// Built once per distribution snapshot; only the root needs to be retained
/// long-term. Verification against a persisted root goes through the
/// instance-free [`AllocationTree::verify`].
#[derive(Clone, Debug)]
pub struct AllocationTree {
    tree: MerkleTree,
    leaves: Vec<AllocationLeaf>,
}

impl AllocationTree {
    /// Build the commitment from the finalized allocation list, in the given
    /// order. The order is part of the commitment: a permuted list is a
    /// different (equally valid) tree.
    pub fn new(allocations: Vec<(AccountId, u128)>) -> Result<Self, TreeError> {
        let leaves: Vec<AllocationLeaf> = allocations
            .into_iter()
            .map(|(account, allocation)| AllocationLeaf {
                account,
                allocation,
            })
            .collect();

        let leaf_hashes: Vec<[u8; 32]> = leaves.iter().map(AllocationLeaf::to_hash).collect();
        let tree = MerkleTree::build(leaf_hashes)?;

        Ok(AllocationTree { tree, leaves })
    }

    pub fn root(&self) -> [u8; 32] {
        self.tree.root()
    }

    pub fn leaves(&self) -> &[AllocationLeaf] {
        &self.leaves
    }

    /// Generate the inclusion proof for one (account, allocation) entry.
    pub fn proof(&self, account: &AccountId, allocation: u128) -> Result<Proof, TreeError> {
        let leaf = AllocationLeaf {
            account: *account,
            allocation,
        };
        self.tree.proof_for(&leaf.to_hash())
    }

    /// Verify an entry against a persisted root. No tree instance required;
    /// this is the check the distribution ledger runs at claim time.
    pub fn verify(
        account: &AccountId,
        allocation: u128,
        proof: &Proof,
        root: &[u8; 32],
    ) -> bool {
        let leaf = AllocationLeaf {
            account: *account,
            allocation,
        };
        verify_proof(&leaf.to_hash(), proof, root)
    }
}

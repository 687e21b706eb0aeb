use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hasher::AllocationHasher;

/// An inclusion proof: the ordered sibling hashes encountered walking from a
/// leaf up to the root. Because internal nodes sort their children before
/// hashing, the proof carries no left/right position information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Proof(Vec<[u8; 32]>);

impl Proof {
    pub fn new(siblings: Vec<[u8; 32]>) -> Self {
        Proof(siblings)
    }

    pub fn hashes(&self) -> &[[u8; 32]] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, [u8; 32]> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<[u8; 32]>> for Proof {
    fn from(siblings: Vec<[u8; 32]>) -> Self {
        Proof(siblings)
    }
}

// Proofs travel through CSV/JSON tooling as hex strings, one per sibling.
impl Serialize for Proof {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hex_hashes: Vec<String> = self.0.iter().map(hex::encode).collect();
        hex_hashes.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Proof {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_hashes = Vec::<String>::deserialize(deserializer)?;
        let mut siblings = Vec::with_capacity(hex_hashes.len());
        for s in &hex_hashes {
            let bytes = hex::decode(s).map_err(D::Error::custom)?;
            let hash: [u8; 32] = bytes
                .try_into()
                .map_err(|_| D::Error::custom("expected 32-byte hex hash"))?;
            siblings.push(hash);
        }
        Ok(Proof(siblings))
    }
}

/// Recompute the candidate root from `leaf` by folding `combine` over the
/// proof's siblings in order, and compare it to `root`.
///
/// Pure function: usable against a persisted root without ever holding the
/// tree that produced the proof.
pub fn verify_proof(leaf: &[u8; 32], proof: &Proof, root: &[u8; 32]) -> bool {
    let mut candidate = *leaf;
    for sibling in proof.iter() {
        candidate = AllocationHasher::combine(&candidate, sibling);
    }
    candidate == *root
}

pub mod account;
pub mod allocation_tree;
pub mod builder;
pub mod error;
pub mod hasher;
pub mod proof;
pub mod tree_constants;

pub use account::{AccountId, ParseAccountIdError};
pub use allocation_tree::{AllocationLeaf, AllocationTree};
pub use builder::MerkleTree;
pub use error::TreeError;
pub use hasher::AllocationHasher;
pub use proof::{verify_proof, Proof};

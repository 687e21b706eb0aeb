use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("cannot build a merkle tree from zero leaves")]
    EmptyInput,

    #[error("leaf not found in the tree")]
    LeafNotFound,

    #[error("duplicate leaf at position {0}")]
    DuplicateLeaf(usize),
}

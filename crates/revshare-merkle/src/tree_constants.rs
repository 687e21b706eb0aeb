/// Domain separation constants for merkle tree hashing.
/// These must stay in sync with every consumer that re-derives leaf or node
/// hashes from raw bytes; changing any of them invalidates all existing roots
/// and proofs.
///
/// Domain separation prefix for leaf nodes
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain separation prefix for internal nodes
pub const INTERNAL_PREFIX: u8 = 0x01;

/// Version byte of the allocation leaf encoding. A future layout change gets
/// a new version byte rather than mutating this one.
pub const LEAF_ENCODING_VERSION: u8 = 0x01;

/// Encoded allocation leaf length: version byte + 32-byte account
/// + 16-byte big-endian allocation.
pub const LEAF_ENCODED_LEN: usize = 1 + 32 + 16;

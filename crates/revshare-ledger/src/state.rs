use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::hex_hash;

/// One distribution epoch. Immutable once appended to the ledger:
/// `funds_available` is a snapshot taken when the window was opened and is
/// never updated as claims settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// 1-based ordinal of this window (the first opened window is 1).
    /// Claims address windows by zero-based position, i.e. `index - 1`.
    pub index: u64,

    /// Merkle root committing to this window's (account, allocation) set.
    #[serde(with = "hex_hash")]
    pub root: [u8; 32],

    /// Funds newly observed in the pool since the previous window. Every
    /// payout for this window is a percentage of this snapshot.
    pub funds_available: u128,

    /// Wall-clock time the window was opened.
    pub opened_at: SystemTime,
}

use revshare_merkle::AccountId;
use serde::{Deserialize, Serialize};

use crate::hex_hash;

/// Observation emitted by a successful `open_window`, for external indexing
/// or notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOpened {
    /// 1-based ordinal of the opened window (equals the window count after
    /// the open).
    pub index: u64,

    /// Funds snapshot the new window distributes.
    pub funds_available: u128,

    /// Running claimable balance across all windows after the open.
    pub total_claimable: u128,

    /// Merkle root the window's claims are verified against.
    #[serde(with = "hex_hash")]
    pub root: [u8; 32],
}

/// Observation emitted by a successfully settled claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSettled {
    /// Beneficiary the payout was delivered to.
    pub account: AccountId,

    /// Amount paid out.
    pub amount: u128,

    /// Running claimable balance after the payout was deducted.
    pub total_claimable: u128,
}

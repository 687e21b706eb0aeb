//! Collaborator capabilities the ledger consumes but does not implement.

use revshare_merkle::AccountId;

use crate::error::PaymentError;

/// Observes the total funds currently available to the distribution pool.
///
/// The ledger treats this quantity as monotone non-decreasing between
/// windows: each `open_window` snapshots the growth since the previous one.
/// An observation below the already-committed claimable balance is rejected
/// rather than trusted (see `LedgerError::PoolBalanceRegressed`).
pub trait PoolBalance {
    fn current_pool_balance(&self) -> u128;
}

/// Moves value to a beneficiary. The actual transfer mechanism (token
/// contract, bank rail, internal ledger) is outside this crate.
///
/// `pay` is treated as a fallible, non-cancelable unit: the ledger only
/// records a claim after it returns `Ok`, so a failed payment leaves the
/// claim fully retryable. Retrying is the caller's responsibility.
pub trait Payout {
    fn pay(&self, account: &AccountId, amount: u128) -> Result<(), PaymentError>;
}

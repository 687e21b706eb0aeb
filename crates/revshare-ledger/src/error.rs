use revshare_merkle::AccountId;
use thiserror::Error;

/// Failure reported by the external payment collaborator. Opaque at this
/// boundary; the ledger only needs to know the transfer did not happen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("payment failed: {0}")]
pub struct PaymentError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("cannot claim for a future window: requested {requested}, {current} opened")]
    FutureWindow { requested: u64, current: u64 },

    #[error("account {account} already claimed window {window}")]
    AlreadyClaimed { window: u64, account: AccountId },

    #[error("allocation proof does not match the window's root")]
    InvalidProof,

    #[error("payout calculation overflowed")]
    NumericOverflow,

    #[error("payout {requested} exceeds the claimable balance {available}")]
    InsufficientClaimable { requested: u128, available: u128 },

    #[error("observed pool balance {observed} is below the committed claimable balance {committed}")]
    PoolBalanceRegressed { observed: u128, committed: u128 },

    #[error(transparent)]
    Payment(#[from] PaymentError),
}

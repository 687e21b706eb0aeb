pub mod error;
pub mod events;
pub mod external;
pub mod ledger;
pub mod state;

mod hex_hash;

pub use error::{LedgerError, PaymentError};
pub use events::{TransferSettled, WindowOpened};
pub use external::{Payout, PoolBalance};
pub use ledger::{scale_amount_by_percentage, DistributionLedger, PERCENTAGE_SCALE};
pub use state::Window;

// The claim authorization types travel together with the ledger.
pub use revshare_merkle::{AccountId, AllocationTree, Proof};

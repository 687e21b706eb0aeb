use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::SystemTime;

use revshare_merkle::{AccountId, AllocationTree, Proof};
use tracing::{debug, info, warn};

use crate::error::LedgerError;
use crate::events::{TransferSettled, WindowOpened};
use crate::external::{Payout, PoolBalance};
use crate::state::Window;

/// Fixed-point denominator for allocations: an allocation of
/// `20 * PERCENTAGE_SCALE` means 20% of a window's funds.
pub const PERCENTAGE_SCALE: u128 = 1_000_000;

/// Scale `amount` by a fixed-point percentage:
/// `amount × scaled_percent / (100 × PERCENTAGE_SCALE)`, integer division
/// truncating toward zero.
pub fn scale_amount_by_percentage(
    amount: u128,
    scaled_percent: u128,
) -> Result<u128, LedgerError> {
    let numerator = amount
        .checked_mul(scaled_percent)
        .ok_or(LedgerError::NumericOverflow)?;
    Ok(numerator / (100 * PERCENTAGE_SCALE))
}

#[derive(Default)]
struct LedgerState {
    windows: Vec<Window>,
    /// Set of (zero-based window position, account) pairs that have settled.
    /// Grows monotonically; entries are never removed.
    claimed: HashSet<(u64, AccountId)>,
    /// Running claimable balance: sum of all windows' funds snapshots minus
    /// the sum of all settled payouts.
    total_claimable: u128,
}

/// The windowed claim state machine.
///
/// Every mutating operation (`open_window`, `claim`) runs as a single
/// critical section behind one write lock, including the delegated `pay`
/// call, so mark-claimed stays transactionally coupled to payment. Read-only
/// queries share a read lock and observe consistent snapshots.
///
/// Claims address windows by zero-based position: after the first
/// `open_window`, position 0 is claimable and position 1 is a future window.
/// The `Window::index` ordinal carried in events is 1-based.
pub struct DistributionLedger<B, P> {
    pool: B,
    payout: P,
    state: RwLock<LedgerState>,
}

impl<B: PoolBalance, P: Payout> DistributionLedger<B, P> {
    pub fn new(pool: B, payout: P) -> Self {
        DistributionLedger {
            pool,
            payout,
            state: RwLock::new(LedgerState::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open a new distribution window bound to `root`.
    ///
    /// The window's funds snapshot is the pool growth observed since the
    /// previous window: `current_pool_balance() - total_claimable`. Earlier
    /// windows' claim rights are a floor under the pool, never redistributed.
    pub fn open_window(&self, root: [u8; 32]) -> Result<WindowOpened, LedgerError> {
        let mut state = self.write();

        let observed = self.pool.current_pool_balance();
        let funds_available = observed.checked_sub(state.total_claimable).ok_or(
            LedgerError::PoolBalanceRegressed {
                observed,
                committed: state.total_claimable,
            },
        )?;

        let index = state.windows.len() as u64 + 1;
        state.windows.push(Window {
            index,
            root,
            funds_available,
            opened_at: SystemTime::now(),
        });
        // committed claimable + this window's delta == the observed pool
        state.total_claimable = observed;

        let event = WindowOpened {
            index,
            funds_available,
            total_claimable: state.total_claimable,
            root,
        };
        info!(
            index,
            funds_available,
            total_claimable = state.total_claimable,
            root = %hex::encode(root),
            "window opened"
        );
        Ok(event)
    }

    /// Settle one beneficiary's claim against an opened window.
    ///
    /// Check order: window exists, not already claimed, proof verifies,
    /// payout computed, payment delivered. Only a delivered payment advances
    /// the claim set, so every rejected or failed claim is retryable exactly
    /// as if it had never been attempted.
    pub fn claim(
        &self,
        window_index: u64,
        account: &AccountId,
        allocation: u128,
        proof: &Proof,
    ) -> Result<TransferSettled, LedgerError> {
        let mut state = self.write();

        let current = state.windows.len() as u64;
        let window = usize::try_from(window_index)
            .ok()
            .and_then(|position| state.windows.get(position))
            .copied()
            .ok_or(LedgerError::FutureWindow {
                requested: window_index,
                current,
            })?;

        // Replay check first: replays are cheap to reject, and a failed
        // proof below never poisons the claim set.
        if state.claimed.contains(&(window_index, *account)) {
            return Err(LedgerError::AlreadyClaimed {
                window: window_index,
                account: *account,
            });
        }

        if !AllocationTree::verify(account, allocation, proof, &window.root) {
            warn!(window_index, account = %account, "claim rejected: invalid proof");
            return Err(LedgerError::InvalidProof);
        }

        let amount = scale_amount_by_percentage(window.funds_available, allocation)?;
        let available = state.total_claimable;
        if amount > available {
            return Err(LedgerError::InsufficientClaimable {
                requested: amount,
                available,
            });
        }

        // Pay first; only a delivered payment is recorded.
        self.payout.pay(account, amount)?;

        state.claimed.insert((window_index, *account));
        state.total_claimable -= amount;

        let event = TransferSettled {
            account: *account,
            amount,
            total_claimable: state.total_claimable,
        };
        debug!(
            window_index,
            account = %account,
            amount,
            total_claimable = state.total_claimable,
            "claim settled"
        );
        Ok(event)
    }

    /// Whether `(window_index, account)` has already settled.
    pub fn is_claimed(&self, window_index: u64, account: &AccountId) -> bool {
        self.read().claimed.contains(&(window_index, *account))
    }

    /// The funds snapshot of an opened window (zero-based position).
    pub fn balance_for_window(&self, window_index: u64) -> Result<u128, LedgerError> {
        self.window_at(window_index).map(|w| w.funds_available)
    }

    /// The commitment root of an opened window (zero-based position).
    pub fn window_root(&self, window_index: u64) -> Result<[u8; 32], LedgerError> {
        self.window_at(window_index).map(|w| w.root)
    }

    /// Running claimable balance across all opened windows.
    pub fn total_claimable_balance(&self) -> u128 {
        self.read().total_claimable
    }

    /// Number of windows opened so far. The highest claimable position is
    /// `current_window() - 1`.
    pub fn current_window(&self) -> u64 {
        self.read().windows.len() as u64
    }

    /// Snapshot of all opened windows, in order.
    pub fn windows(&self) -> Vec<Window> {
        self.read().windows.clone()
    }

    /// Snapshot of the claim set as (window position, account) pairs, for
    /// persistence or indexing. Unordered.
    pub fn claimed_entries(&self) -> Vec<(u64, AccountId)> {
        self.read().claimed.iter().copied().collect()
    }

    fn window_at(&self, window_index: u64) -> Result<Window, LedgerError> {
        let state = self.read();
        usize::try_from(window_index)
            .ok()
            .and_then(|position| state.windows.get(position))
            .copied()
            .ok_or(LedgerError::FutureWindow {
                requested: window_index,
                current: state.windows.len() as u64,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_amount_by_percentage() {
        // 20% of 10000
        let percent = 20 * PERCENTAGE_SCALE;
        assert_eq!(scale_amount_by_percentage(10_000, percent).unwrap(), 2_000);

        // truncates toward zero
        assert_eq!(scale_amount_by_percentage(1, 50 * PERCENTAGE_SCALE).unwrap(), 0);

        // 100% is the identity
        assert_eq!(
            scale_amount_by_percentage(12_345, 100 * PERCENTAGE_SCALE).unwrap(),
            12_345
        );
    }

    #[test]
    fn test_scale_amount_overflow() {
        assert_eq!(
            scale_amount_by_percentage(u128::MAX, 2).unwrap_err(),
            LedgerError::NumericOverflow
        );
    }
}

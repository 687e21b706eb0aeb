//! End-to-end claim scenarios against mock pool and payout collaborators.

use std::sync::{Arc, Mutex};

use revshare_ledger::{
    scale_amount_by_percentage, AccountId, AllocationTree, DistributionLedger, LedgerError,
    PaymentError, Payout, PoolBalance, Proof, PERCENTAGE_SCALE,
};

/// Pool whose balance the test mints into, like revenue arriving on-band.
#[derive(Clone, Default)]
struct MockPool {
    balance: Arc<Mutex<u128>>,
}

impl MockPool {
    fn with_balance(balance: u128) -> Self {
        MockPool {
            balance: Arc::new(Mutex::new(balance)),
        }
    }

    fn mint(&self, amount: u128) {
        *self.balance.lock().unwrap() += amount;
    }

    fn drain_to(&self, balance: u128) {
        *self.balance.lock().unwrap() = balance;
    }
}

impl PoolBalance for MockPool {
    fn current_pool_balance(&self) -> u128 {
        *self.balance.lock().unwrap()
    }
}

/// Payout collaborator recording every delivered transfer and debiting the
/// pool it pays from; can be switched into a failing mode to model an
/// unavailable transfer rail.
#[derive(Clone)]
struct MockPayout {
    pool: MockPool,
    payments: Arc<Mutex<Vec<(AccountId, u128)>>>,
    failing: Arc<Mutex<bool>>,
}

impl MockPayout {
    fn new(pool: MockPool) -> Self {
        MockPayout {
            pool,
            payments: Arc::default(),
            failing: Arc::default(),
        }
    }

    fn payments(&self) -> Vec<(AccountId, u128)> {
        self.payments.lock().unwrap().clone()
    }

    fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }
}

impl Payout for MockPayout {
    fn pay(&self, account: &AccountId, amount: u128) -> Result<(), PaymentError> {
        if *self.failing.lock().unwrap() {
            return Err(PaymentError("transfer rail unavailable".into()));
        }
        // funds leave the pool when the transfer settles
        let mut balance = self.pool.balance.lock().unwrap();
        *balance -= amount;
        self.payments.lock().unwrap().push((*account, amount));
        Ok(())
    }
}

fn account(tag: u8) -> AccountId {
    AccountId::new([tag; 32])
}

/// Five beneficiaries at 20% each.
fn allocations() -> Vec<(AccountId, u128)> {
    (1..=5u8).map(|i| (account(i), 20 * PERCENTAGE_SCALE)).collect()
}

fn fixture(
    initial_pool: u128,
) -> (
    DistributionLedger<MockPool, MockPayout>,
    MockPool,
    MockPayout,
    AllocationTree,
) {
    let pool = MockPool::with_balance(initial_pool);
    let payout = MockPayout::new(pool.clone());
    let ledger = DistributionLedger::new(pool.clone(), payout.clone());
    let tree = AllocationTree::new(allocations()).unwrap();
    (ledger, pool, payout, tree)
}

#[test]
fn open_window_snapshots_pool_deltas() {
    let (ledger, pool, _payout, tree) = fixture(10_000);
    let root = tree.root();

    let first = ledger.open_window(root).unwrap();
    assert_eq!(first.index, 1);
    assert_eq!(first.funds_available, 10_000);
    assert_eq!(first.total_claimable, 10_000);
    assert_eq!(first.root, root);

    // more revenue arrives, second window only distributes the delta
    pool.mint(20_000);
    let second = ledger.open_window(root).unwrap();
    assert_eq!(second.index, 2);
    assert_eq!(second.funds_available, 20_000);
    assert_eq!(second.total_claimable, 30_000);

    assert_eq!(ledger.current_window(), 2);
    assert_eq!(ledger.balance_for_window(0).unwrap(), 10_000);
    assert_eq!(ledger.balance_for_window(1).unwrap(), 20_000);
    assert_eq!(ledger.window_root(0).unwrap(), root);
}

#[test]
fn claim_pays_out_and_updates_state() {
    let (ledger, _pool, payout, tree) = fixture(10_000);
    ledger.open_window(tree.root()).unwrap();

    let alice = account(1);
    let share = 20 * PERCENTAGE_SCALE;
    let proof = tree.proof(&alice, share).unwrap();

    assert!(!ledger.is_claimed(0, &alice));

    let settled = ledger.claim(0, &alice, share, &proof).unwrap();
    assert_eq!(settled.account, alice);
    assert_eq!(settled.amount, 2_000);
    assert_eq!(settled.total_claimable, 8_000);

    assert!(ledger.is_claimed(0, &alice));
    assert_eq!(ledger.total_claimable_balance(), 8_000);
    assert_eq!(payout.payments(), vec![(alice, 2_000)]);

    // the window's own snapshot is untouched by the claim
    assert_eq!(ledger.balance_for_window(0).unwrap(), 10_000);
}

#[test]
fn claim_rejects_future_windows() {
    let (ledger, _pool, payout, tree) = fixture(10_000);
    ledger.open_window(tree.root()).unwrap();

    let alice = account(1);
    let share = 20 * PERCENTAGE_SCALE;
    let proof = tree.proof(&alice, share).unwrap();

    let err = ledger.claim(1, &alice, share, &proof).unwrap_err();
    assert_eq!(
        err,
        LedgerError::FutureWindow {
            requested: 1,
            current: 1
        }
    );
    assert!(payout.payments().is_empty());
}

#[test]
fn claim_is_exactly_once_per_window_and_account() {
    let (ledger, _pool, payout, tree) = fixture(10_000);
    ledger.open_window(tree.root()).unwrap();

    let alice = account(1);
    let share = 20 * PERCENTAGE_SCALE;
    let proof = tree.proof(&alice, share).unwrap();

    ledger.claim(0, &alice, share, &proof).unwrap();
    let err = ledger.claim(0, &alice, share, &proof).unwrap_err();
    assert_eq!(
        err,
        LedgerError::AlreadyClaimed {
            window: 0,
            account: alice
        }
    );

    // no double payout
    assert_eq!(payout.payments().len(), 1);
    assert_eq!(ledger.total_claimable_balance(), 8_000);
}

#[test]
fn invalid_proof_does_not_lock_out_a_later_valid_claim() {
    let (ledger, _pool, _payout, tree) = fixture(10_000);
    ledger.open_window(tree.root()).unwrap();

    let alice = account(1);
    let share = 20 * PERCENTAGE_SCALE;

    // proof for a different beneficiary does not authorize alice
    let bob_proof = tree.proof(&account(2), share).unwrap();
    let err = ledger.claim(0, &alice, share, &bob_proof).unwrap_err();
    assert_eq!(err, LedgerError::InvalidProof);
    assert!(!ledger.is_claimed(0, &alice));

    // a tampered proof fails the same way
    let good_proof = tree.proof(&alice, share).unwrap();
    let mut tampered = good_proof.hashes().to_vec();
    tampered[0][0] ^= 0x01;
    let err = ledger
        .claim(0, &alice, share, &Proof::new(tampered))
        .unwrap_err();
    assert_eq!(err, LedgerError::InvalidProof);

    // the correct proof still settles
    let settled = ledger.claim(0, &alice, share, &good_proof).unwrap();
    assert_eq!(settled.amount, 2_000);
}

#[test]
fn failed_payment_leaves_the_claim_retryable() {
    let (ledger, _pool, payout, tree) = fixture(10_000);
    ledger.open_window(tree.root()).unwrap();

    let alice = account(1);
    let share = 20 * PERCENTAGE_SCALE;
    let proof = tree.proof(&alice, share).unwrap();

    payout.set_failing(true);
    let err = ledger.claim(0, &alice, share, &proof).unwrap_err();
    assert!(matches!(err, LedgerError::Payment(_)));

    // nothing settled, nothing recorded
    assert!(!ledger.is_claimed(0, &alice));
    assert_eq!(ledger.total_claimable_balance(), 10_000);
    assert!(payout.payments().is_empty());

    // the same claim succeeds once the rail recovers
    payout.set_failing(false);
    let settled = ledger.claim(0, &alice, share, &proof).unwrap();
    assert_eq!(settled.amount, 2_000);
    assert!(ledger.is_claimed(0, &alice));
}

#[test]
fn earlier_windows_stay_claimable_after_new_ones_open() {
    let (ledger, pool, _payout, tree) = fixture(10_000);
    let root = tree.root();
    ledger.open_window(root).unwrap();
    pool.mint(20_000);
    ledger.open_window(root).unwrap();

    let alice = account(1);
    let share = 20 * PERCENTAGE_SCALE;
    let proof = tree.proof(&alice, share).unwrap();

    // claim the older window first, then the newer one
    let first = ledger.claim(0, &alice, share, &proof).unwrap();
    assert_eq!(first.amount, 2_000);
    let second = ledger.claim(1, &alice, share, &proof).unwrap();
    assert_eq!(second.amount, 4_000);

    assert_eq!(ledger.total_claimable_balance(), 24_000);
}

#[test]
fn claimable_balance_is_conserved() {
    let (ledger, pool, payout, tree) = fixture(10_000);
    let root = tree.root();
    ledger.open_window(root).unwrap();

    let share = 20 * PERCENTAGE_SCALE;
    for tag in 1..=3u8 {
        let acct = account(tag);
        let proof = tree.proof(&acct, share).unwrap();
        ledger.claim(0, &acct, share, &proof).unwrap();
    }

    pool.mint(5_000);
    ledger.open_window(root).unwrap();

    let windows_total: u128 = (0..ledger.current_window())
        .map(|w| ledger.balance_for_window(w).unwrap())
        .sum();
    let paid_total: u128 = payout.payments().iter().map(|(_, amount)| amount).sum();

    assert_eq!(
        ledger.total_claimable_balance(),
        windows_total - paid_total,
        "running balance must equal window snapshots minus settled payouts"
    );
}

#[test]
fn pool_regression_is_rejected() {
    let (ledger, pool, _payout, tree) = fixture(10_000);
    ledger.open_window(tree.root()).unwrap();

    // the pool should never shrink below the committed claimable balance;
    // if it does, the next window is refused instead of snapshotting garbage
    pool.drain_to(4_000);
    let err = ledger.open_window(tree.root()).unwrap_err();
    assert_eq!(
        err,
        LedgerError::PoolBalanceRegressed {
            observed: 4_000,
            committed: 10_000
        }
    );
    assert_eq!(ledger.current_window(), 1);
}

#[test]
fn end_to_end_two_account_example() {
    // Two accounts at 20% of a 10000 window: each payout is
    // 10000 × 20_000_000 / (100 × 1_000_000) = 2000.
    let pool = MockPool::with_balance(10_000);
    let payout = MockPayout::new(pool.clone());
    let ledger = DistributionLedger::new(pool.clone(), payout.clone());

    let a = account(0xaa);
    let b = account(0xbb);
    let share = 20 * PERCENTAGE_SCALE;
    let tree = AllocationTree::new(vec![(a, share), (b, share)]).unwrap();
    ledger.open_window(tree.root()).unwrap();

    let proof_a = tree.proof(&a, share).unwrap();
    let expected = scale_amount_by_percentage(10_000, share).unwrap();
    assert_eq!(expected, 2_000);

    let settled = ledger.claim(0, &a, share, &proof_a).unwrap();
    assert_eq!(settled.amount, 2_000);
    assert_eq!(ledger.total_claimable_balance(), 8_000);

    assert_eq!(
        ledger.claim(0, &a, share, &proof_a).unwrap_err(),
        LedgerError::AlreadyClaimed {
            window: 0,
            account: a
        }
    );
    assert!(matches!(
        ledger.claim(1, &a, share, &proof_a).unwrap_err(),
        LedgerError::FutureWindow { requested: 1, .. }
    ));
}

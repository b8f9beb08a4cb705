//! Collaborator traits consumed by the transfer engine
//!
//! The engine does not own account or transaction storage, time, or id
//! allocation; it borrows them through these seams. Tests substitute
//! deterministic implementations for every one of them.

use crate::types::{Account, AccountId, StoreError, Transaction, TransactionId, TransferError};
use chrono::{DateTime, Utc};

/// Keyed account storage with per-account mutation rights
///
/// Lookups return snapshots; mutation happens exclusively through
/// [`AccountStore::update_pair`], which serializes concurrent transfers
/// touching either account.
pub trait AccountStore {
    /// Look up an account snapshot, failing distinctly when absent
    fn find_by_id(&self, id: AccountId) -> Result<Account, StoreError>;

    /// Register or replace an account, returning the stored value
    fn save(&self, account: Account) -> Account;

    /// Snapshot of every account, ordered by account id
    fn find_all(&self) -> Vec<Account>;

    /// Run a closure over two distinct accounts with both locked
    ///
    /// The store acquires the two per-account locks in ascending id
    /// order regardless of argument order, then hands the closure
    /// mutable references in argument order (`first`, `second`). Locks
    /// are released on every exit path, including closure failure.
    ///
    /// # Errors
    ///
    /// * `SelfTransfer` if `first == second`
    /// * `UnknownAccount` if either id is not in the store
    /// * Whatever error the closure returns, with no mutation visible
    fn update_pair<F>(&self, first: AccountId, second: AccountId, f: F) -> Result<(), TransferError>
    where
        F: FnOnce(&mut Account, &mut Account) -> Result<(), TransferError>;
}

/// Append-only storage for committed transaction records
pub trait TransactionStore {
    /// Append a record, returning the caller's copy
    ///
    /// The append is atomic per record: a concurrent reader sees the
    /// whole transaction or nothing.
    fn save(&self, transaction: Transaction) -> Transaction;

    /// All recorded transactions in append order
    fn find_all(&self) -> Vec<Transaction>;
}

/// Source of timestamps for transaction and account creation
///
/// Injected rather than read ambiently so tests control time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of globally unique identifiers
pub trait IdGenerator {
    /// Allocate an id for a newly opened account
    fn next_account_id(&self) -> AccountId;

    /// Allocate an id for a transaction record
    fn next_transaction_id(&self) -> TransactionId;
}

//! Ledger transfer engine
//!
//! This module provides the `LedgerEngine` that orchestrates the
//! transfer use case by coordinating the account store, the validator,
//! the balance mutator, and the transaction recorder.
//!
//! The engine enforces the business invariants before mutating state:
//! - no self-transfer
//! - savings accounts only move money between accounts of one owner
//! - the sender's balance covers the amount, re-checked under lock
//! - transfer amounts are strictly positive
//!
//! Every failure path is all-or-nothing: no balance changes and no
//! transaction record unless the whole pipeline succeeds.

use crate::core::account_store::InMemoryAccountStore;
use crate::core::providers::{SystemClock, UuidGenerator};
use crate::core::traits::{AccountStore, Clock, IdGenerator, TransactionStore};
use crate::core::transaction_store::InMemoryTransactionStore;
use crate::core::{mutator, recorder, validator};
use crate::types::{
    Account, AccountId, AccountType, OwnerId, Transaction, TransferError,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Transfer orchestration over injected collaborators
///
/// Generic over the account store, transaction store, clock, and id
/// generator so tests can pin time and ids while production wires the
/// in-memory stores with system providers.
pub struct LedgerEngine<A, T, C, G> {
    accounts: A,
    transactions: T,
    clock: C,
    ids: G,
}

/// The production wiring: in-memory stores, wall clock, random UUIDs.
pub type InMemoryLedgerEngine =
    LedgerEngine<InMemoryAccountStore, InMemoryTransactionStore, SystemClock, UuidGenerator>;

impl InMemoryLedgerEngine {
    /// Create an empty in-memory engine with system providers
    pub fn in_memory() -> Self {
        LedgerEngine::new(
            InMemoryAccountStore::new(),
            InMemoryTransactionStore::new(),
            SystemClock,
            UuidGenerator,
        )
    }
}

impl<A, T, C, G> LedgerEngine<A, T, C, G>
where
    A: AccountStore,
    T: TransactionStore,
    C: Clock,
    G: IdGenerator,
{
    /// Create an engine over the given collaborators
    pub fn new(accounts: A, transactions: T, clock: C, ids: G) -> Self {
        LedgerEngine {
            accounts,
            transactions,
            clock,
            ids,
        }
    }

    /// Move `amount` from `sender` to `receiver`, recording the result
    ///
    /// Pipeline: resolve both accounts → validate → lock both accounts
    /// in ascending id order → re-check funds and mutate → record. The
    /// returned transaction is the caller's copy of the appended record.
    ///
    /// # Errors
    ///
    /// The first failing check as a [`TransferError`]; on any error no
    /// balance has changed and nothing was recorded.
    pub fn make_transfer(
        &self,
        sender: AccountId,
        receiver: AccountId,
        amount: Decimal,
        message: &str,
    ) -> Result<Transaction, TransferError> {
        match self.execute_transfer(sender, receiver, amount, message) {
            Ok(transaction) => {
                debug!(
                    transaction = %transaction.id(),
                    %sender,
                    %receiver,
                    %amount,
                    "transfer applied"
                );
                Ok(transaction)
            }
            Err(rejection) => {
                warn!(%sender, %receiver, %amount, %rejection, "transfer rejected");
                Err(rejection)
            }
        }
    }

    fn execute_transfer(
        &self,
        sender: AccountId,
        receiver: AccountId,
        amount: Decimal,
        message: &str,
    ) -> Result<Transaction, TransferError> {
        let sender_account = self.accounts.find_by_id(sender).map_err(TransferError::from)?;
        let receiver_account = self
            .accounts
            .find_by_id(receiver)
            .map_err(TransferError::from)?;

        // Fail-fast pass over unlocked snapshots; the funds check runs
        // again under the sender's lock inside the mutator.
        let transfer = validator::validate(
            &self.accounts,
            Some(&sender_account),
            Some(&receiver_account),
            amount,
        )?;

        self.accounts
            .update_pair(sender, receiver, |sender, receiver| {
                mutator::apply(&transfer, sender, receiver)
            })?;

        // Appending happens outside the account locks.
        Ok(recorder::record(
            &self.transactions,
            &self.ids,
            &self.clock,
            &transfer,
            message,
        ))
    }

    /// Open a new account and register it with the account store
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if the opening balance is negative.
    pub fn create_new_account(
        &self,
        owner: OwnerId,
        account_type: AccountType,
        opening_balance: Decimal,
    ) -> Result<Account, TransferError> {
        if opening_balance < Decimal::ZERO {
            return Err(TransferError::invalid_amount(opening_balance));
        }

        let account = Account::new(
            self.ids.next_account_id(),
            owner,
            account_type,
            opening_balance,
            self.clock.now(),
        );
        let account = self.accounts.save(account);
        debug!(account = %account.id, %owner, kind = %account.account_type, "account opened");
        Ok(account)
    }

    /// Snapshot of every account, ordered by account id
    pub fn list_all_accounts(&self) -> Vec<Account> {
        self.accounts.find_all()
    }

    /// Every recorded transaction in append order
    pub fn find_all_transactions(&self) -> Vec<Transaction> {
        self.transactions.find_all()
    }

    /// Snapshot of a single account
    pub fn find_account(&self, id: AccountId) -> Result<Account, TransferError> {
        self.accounts.find_by_id(id).map_err(TransferError::from)
    }
}

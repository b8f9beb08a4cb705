//! Thread-safe in-memory account storage
//!
//! This module provides `InMemoryAccountStore`, the account table
//! backing the transfer engine.
//!
//! # Design
//!
//! Each account lives behind its own `Mutex`, and the table itself is a
//! `DashMap` keyed by account id. Lookups clone a snapshot under the
//! account's lock; two-account mutations acquire both locks through
//! [`InMemoryAccountStore::update_pair`], always in ascending id order
//! so that transfers referencing the same pair in opposite directions
//! cannot deadlock.
//!
//! # Lock poisoning
//!
//! The mutation closure either fails before touching a balance or
//! performs plain field writes after all checks, so a panicking thread
//! cannot leave a half-applied transfer behind. Poisoned mutexes are
//! therefore recovered with `PoisonError::into_inner`.

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountId, StoreError, TransferError};
use dashmap::DashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// In-memory account table with per-account locking
pub struct InMemoryAccountStore {
    /// Map of account id to its lockable state
    accounts: DashMap<AccountId, Arc<Mutex<Account>>>,
}

impl InMemoryAccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        InMemoryAccountStore {
            accounts: DashMap::new(),
        }
    }

    /// Number of accounts currently registered
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn slot(&self, id: AccountId) -> Result<Arc<Mutex<Account>>, StoreError> {
        self.accounts
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn lock(slot: &Mutex<Account>) -> MutexGuard<'_, Account> {
        slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AccountStore for InMemoryAccountStore {
    fn find_by_id(&self, id: AccountId) -> Result<Account, StoreError> {
        let slot = self.slot(id)?;
        let account = Self::lock(&slot).clone();
        Ok(account)
    }

    fn save(&self, account: Account) -> Account {
        // Existing accounts are overwritten in place so that any thread
        // already holding the entry keeps locking the same mutex.
        let slot = Arc::clone(
            self.accounts
                .entry(account.id)
                .or_insert_with(|| Arc::new(Mutex::new(account.clone())))
                .value(),
        );
        *Self::lock(&slot) = account.clone();
        account
    }

    fn find_all(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| Self::lock(entry.value()).clone())
            .collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    fn update_pair<F>(&self, first: AccountId, second: AccountId, f: F) -> Result<(), TransferError>
    where
        F: FnOnce(&mut Account, &mut Account) -> Result<(), TransferError>,
    {
        if first == second {
            return Err(TransferError::self_transfer(first));
        }

        let first_slot = self.slot(first).map_err(TransferError::from)?;
        let second_slot = self.slot(second).map_err(TransferError::from)?;

        // Global lock order: ascending account id.
        if first < second {
            let mut first_guard = Self::lock(&first_slot);
            let mut second_guard = Self::lock(&second_slot);
            f(&mut first_guard, &mut second_guard)
        } else {
            let mut second_guard = Self::lock(&second_slot);
            let mut first_guard = Self::lock(&first_slot);
            f(&mut first_guard, &mut second_guard)
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

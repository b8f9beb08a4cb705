//! Append-only transaction storage
//!
//! This module provides `InMemoryTransactionStore`, the append-only log
//! of committed transfers. Records are immutable once appended; readers
//! receive clones and can never observe a partially written record.
//!
//! Appends happen outside the account locks. Transactions need no
//! cross-account ordering, only per-record atomicity, which the single
//! log mutex provides.

use crate::core::traits::TransactionStore;
use crate::types::Transaction;
use std::sync::{Mutex, PoisonError};

/// In-memory append-only transaction log
pub struct InMemoryTransactionStore {
    transactions: Mutex<Vec<Transaction>>,
}

impl InMemoryTransactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        InMemoryTransactionStore {
            transactions: Mutex::new(Vec::new()),
        }
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn save(&self, transaction: Transaction) -> Transaction {
        self.transactions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(transaction.clone());
        transaction
    }

    fn find_all(&self) -> Vec<Transaction> {
        self.transactions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for InMemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

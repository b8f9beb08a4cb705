//! Ledger Engine Library
//! # Overview
//!
//! This library provides an in-memory ledger with accounts, balances,
//! and an atomic transfer engine, plus a CSV session runner on top.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Transfer orchestration and account use cases
//!   - [`core::validator`] - Pre-mutation transfer checks
//!   - [`core::mutator`] - Token-gated balance mutation
//!   - [`core::account_store`] - Concurrent account state management
//!   - [`core::transaction_store`] - Append-only transaction history
//! - [`io`] - Session CSV parsing and account output
//! - [`session`] - Batch session runner driving the engine from CSV
//!
//! # Transfer Rules
//!
//! A transfer moves a positive amount between two distinct accounts:
//!
//! - Both parties must exist in the account store
//! - Savings accounts only move money between accounts of one owner
//! - The sender's balance must cover the amount (equality suffices)
//! - Either both balances change and a transaction is recorded, or
//!   neither does
//!
//! # Account Model
//!
//! Each account carries an id, an owner, a kind (`checking` or
//! `savings`), a balance, and a creation timestamp. Transactions are
//! immutable once recorded.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use core::{InMemoryLedgerEngine, LedgerEngine};
pub use io::write_accounts_csv;
pub use session::{run_file, run_session, SessionError, SessionOutcome};
pub use types::{
    Account, AccountId, AccountType, OwnerId, Transaction, TransactionId, TransferError,
};

//! Types module
//!
//! Contains core data structures used throughout the ledger engine.
//! This module organizes types into logical submodules:
//! - `account`: Account identifiers, account type, and account state
//! - `transaction`: Immutable transaction records and identifiers
//! - `error`: Transfer rejection kinds and store errors

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountId, AccountType, OwnerId};
pub use error::{StoreError, TransferError};
pub use transaction::{Transaction, TransactionId};

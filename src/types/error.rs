//! Error types for the ledger engine
//!
//! This module defines the transfer rejection taxonomy and the account
//! store error. Every rejection refuses the current operation without
//! corrupting ledger state; none of them is retried automatically.
//!
//! # Rejection kinds
//!
//! - **MissingParty / SelfTransfer / UnknownAccount**: structural checks
//!   on the two parties of a transfer
//! - **OwnershipViolation**: the savings-account ownership rule
//! - **InsufficientBalance / InvalidAmount**: funds and amount sanity
//! - **ArithmeticOverflow**: checked balance arithmetic refused to apply

use super::account::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Rejection kinds surfaced by the transfer engine
///
/// Each variant carries the context needed to report the refusal to a
/// caller. The first failing check in the validation order is surfaced
/// verbatim; rejections are never coerced into a generic failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    /// Sender or receiver reference was absent
    #[error("sender and receiver accounts must both be present")]
    MissingParty,

    /// Sender and receiver are the same account
    #[error("cannot transfer from account {account} into itself")]
    SelfTransfer {
        /// The account appearing on both sides
        account: AccountId,
    },

    /// The referenced account does not exist in the ledger
    #[error("account {account} does not exist in the ledger")]
    UnknownAccount {
        /// The unresolvable account id
        account: AccountId,
    },

    /// A savings account is involved and the owners differ
    #[error("accounts {sender} and {receiver} must both be checking or belong to the same owner")]
    OwnershipViolation {
        /// Sending account
        sender: AccountId,
        /// Receiving account
        receiver: AccountId,
    },

    /// Sender balance is below the requested amount
    #[error("insufficient balance on account {account}: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// The account that would go negative
        account: AccountId,
        /// Balance at the time of the check
        balance: Decimal,
        /// Requested transfer amount
        requested: Decimal,
    },

    /// Transfer amount is zero or negative
    #[error("transfer amount must be positive, got {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Checked balance arithmetic would overflow
    #[error("arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account whose balance was being updated
        account: AccountId,
    },
}

/// Errors raised by the account store itself
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No account exists under the given id
    #[error("account {account} does not exist in the store")]
    NotFound {
        /// The missing account id
        account: AccountId,
    },
}

/// At the orchestration boundary a store miss is an unknown account.
impl From<StoreError> for TransferError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { account } => TransferError::UnknownAccount { account },
        }
    }
}

// Helper functions for creating common errors

impl TransferError {
    /// Create a SelfTransfer error
    pub fn self_transfer(account: AccountId) -> Self {
        TransferError::SelfTransfer { account }
    }

    /// Create an UnknownAccount error
    pub fn unknown_account(account: AccountId) -> Self {
        TransferError::UnknownAccount { account }
    }

    /// Create an OwnershipViolation error
    pub fn ownership_violation(sender: AccountId, receiver: AccountId) -> Self {
        TransferError::OwnershipViolation { sender, receiver }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(account: AccountId, balance: Decimal, requested: Decimal) -> Self {
        TransferError::InsufficientBalance {
            account,
            balance,
            requested,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        TransferError::InvalidAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountId) -> Self {
        TransferError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }
}

impl StoreError {
    /// Create a NotFound error
    pub fn not_found(account: AccountId) -> Self {
        StoreError::NotFound { account }
    }
}

//! Account-related types for the ledger engine
//!
//! This module defines account identifiers, the account type
//! classification, and the Account structure holding per-account
//! ledger state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Account identifier
///
/// Opaque UUID-backed token. Ordering on account ids defines the
/// global lock-acquisition order for two-account mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Wrap a raw UUID as an account identifier
    pub fn from_uuid(id: Uuid) -> Self {
        AccountId(id)
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of the user who owns an account
///
/// Ownership identity drives the transfer ownership rule: any transfer
/// involving a savings account requires both accounts to share an owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OwnerId(u64);

impl OwnerId {
    pub fn new(id: u64) -> Self {
        OwnerId(id)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account classification
///
/// Checking-to-checking transfers are unrestricted across owners.
/// As soon as a savings account is involved on either side, sender
/// and receiver must belong to the same owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Checking => write!(f, "checking"),
            AccountType::Savings => write!(f, "savings"),
        }
    }
}

/// Ledger account state
///
/// Created once at account-opening time and mutated only through the
/// balance mutator while both transfer parties are locked. The balance
/// is never negative after a committed transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique account identifier
    pub id: AccountId,

    /// The user this account belongs to
    pub owner: OwnerId,

    /// Checking or savings classification
    pub account_type: AccountType,

    /// Current balance
    pub balance: Decimal,

    /// When the account was opened
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create an account with the given opening state
    pub fn new(
        id: AccountId,
        owner: OwnerId,
        account_type: AccountType,
        balance: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Account {
            id,
            owner,
            account_type,
            balance,
            created_at,
        }
    }
}

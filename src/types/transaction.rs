//! Transaction record types for the ledger engine
//!
//! A Transaction is the immutable evidence of one applied transfer.
//! Records are created exclusively by the transfer pipeline after the
//! validator and the balance mutator have both succeeded, and are
//! append-only from then on.

use super::account::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Transaction identifier
///
/// Opaque UUID-backed token, allocated by the injected id generator
/// at recording time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Wrap a raw UUID as a transaction identifier
    pub fn from_uuid(id: Uuid) -> Self {
        TransactionId(id)
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Immutable record of an applied transfer
///
/// References sender and receiver by id; referential existence is
/// enforced by the validator before the record is created, not by the
/// store. Fields are private so a committed record can never be edited;
/// the store hands out clones only.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: TransactionId,
    sender: AccountId,
    receiver: AccountId,
    amount: Decimal,
    message: String,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Assemble a transaction record
    ///
    /// Only the transaction recorder constructs records; everything
    /// outside the crate observes them read-only.
    pub(crate) fn new(
        id: TransactionId,
        sender: AccountId,
        receiver: AccountId,
        amount: Decimal,
        message: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Transaction {
            id,
            sender,
            receiver,
            amount,
            message,
            created_at,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// The debited account
    pub fn sender(&self) -> AccountId {
        self.sender
    }

    /// The credited account
    pub fn receiver(&self) -> AccountId {
        self.receiver
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

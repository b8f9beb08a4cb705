//! Clock and id generator implementations
//!
//! Production code uses `SystemClock` and `UuidGenerator`; tests inject
//! `FixedClock` and `SequentialIdGenerator` to make timestamps and ids
//! deterministic.

use crate::core::traits::{Clock, IdGenerator};
use crate::types::{AccountId, TransactionId};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Wall-clock time source
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random (v4) UUID allocator
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_account_id(&self) -> AccountId {
        AccountId::from_uuid(Uuid::new_v4())
    }

    fn next_transaction_id(&self) -> TransactionId {
        TransactionId::from_uuid(Uuid::new_v4())
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        FixedClock(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Deterministic id allocator
///
/// Hands out UUIDs built from an incrementing counter, so allocation
/// order matches id order. Account and transaction ids draw from the
/// same counter.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        SequentialIdGenerator {
            next: AtomicU64::new(1),
        }
    }

    fn next_uuid(&self) -> Uuid {
        Uuid::from_u128(self.next.fetch_add(1, Ordering::Relaxed) as u128)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_account_id(&self) -> AccountId {
        AccountId::from_uuid(self.next_uuid())
    }

    fn next_transaction_id(&self) -> TransactionId {
        TransactionId::from_uuid(self.next_uuid())
    }
}

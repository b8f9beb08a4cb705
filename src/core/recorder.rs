//! Transaction recording
//!
//! Builds the immutable transaction record for an applied transfer,
//! stamps it with a fresh id and the injected clock's current time,
//! and appends it to the transaction store. The caller receives a copy;
//! the store retains the authoritative one.

use crate::core::traits::{Clock, IdGenerator, TransactionStore};
use crate::core::validator::ValidatedTransfer;
use crate::types::Transaction;

/// Record an applied transfer
pub fn record<T, C, G>(
    transactions: &T,
    ids: &G,
    clock: &C,
    transfer: &ValidatedTransfer,
    message: &str,
) -> Transaction
where
    T: TransactionStore,
    C: Clock,
    G: IdGenerator,
{
    let transaction = Transaction::new(
        ids.next_transaction_id(),
        transfer.sender(),
        transfer.receiver(),
        transfer.amount(),
        message.to_string(),
        clock.now(),
    );
    transactions.save(transaction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account_store::InMemoryAccountStore;
    use crate::core::providers::{FixedClock, SequentialIdGenerator};
    use crate::core::traits::AccountStore;
    use crate::core::transaction_store::InMemoryTransactionStore;
    use crate::core::validator::validate;
    use crate::types::{Account, AccountId, AccountType, OwnerId, TransactionId};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_record_stamps_id_and_time_from_injected_providers() {
        let sender = Account::new(
            AccountId::from_uuid(Uuid::from_u128(100)),
            OwnerId::new(1),
            AccountType::Checking,
            dec!(50),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        let receiver = Account::new(
            AccountId::from_uuid(Uuid::from_u128(200)),
            OwnerId::new(2),
            AccountType::Checking,
            dec!(0),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        let accounts = InMemoryAccountStore::new();
        accounts.save(sender.clone());
        accounts.save(receiver.clone());
        let transfer = validate(&accounts, Some(&sender), Some(&receiver), dec!(25)).unwrap();

        let store = InMemoryTransactionStore::new();
        let ids = SequentialIdGenerator::new();
        let instant = Utc.with_ymd_and_hms(2024, 5, 2, 14, 30, 0).unwrap();
        let clock = FixedClock::at(instant);

        let recorded = record(&store, &ids, &clock, &transfer, "lunch");

        assert_eq!(recorded.id(), TransactionId::from_uuid(Uuid::from_u128(1)));
        assert_eq!(recorded.sender(), sender.id);
        assert_eq!(recorded.receiver(), receiver.id);
        assert_eq!(recorded.amount(), dec!(25));
        assert_eq!(recorded.message(), "lunch");
        assert_eq!(recorded.created_at(), instant);

        // The store keeps the authoritative copy.
        assert_eq!(store.find_all(), vec![recorded]);
    }
}

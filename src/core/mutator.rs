//! Balance mutation
//!
//! This module applies a validated transfer to the two account balances.
//! It is callable only with a [`ValidatedTransfer`] token, and only ever
//! runs while the orchestration holds both account locks.
//!
//! The sufficient-funds check is re-evaluated here, immediately before
//! mutation: the balance may have changed between the unlocked
//! validation pass and lock acquisition, and a losing concurrent
//! transfer must fail with `InsufficientBalance` rather than drive the
//! balance negative.
//!
//! Both new balances are computed with checked arithmetic before either
//! field is written, so an interrupted apply can never leave the pair
//! partially updated.

use crate::core::validator::ValidatedTransfer;
use crate::types::{Account, TransferError};

/// Apply a validated transfer to both balances
///
/// # Errors
///
/// * `InsufficientBalance` if the sender's balance dropped below the
///   amount since validation
/// * `ArithmeticOverflow` if either new balance is unrepresentable
pub fn apply(
    transfer: &ValidatedTransfer,
    sender: &mut Account,
    receiver: &mut Account,
) -> Result<(), TransferError> {
    let amount = transfer.amount();

    // Re-check-then-act under the sender's lock.
    if sender.balance < amount {
        return Err(TransferError::insufficient_balance(
            sender.id,
            sender.balance,
            amount,
        ));
    }

    let debited = sender
        .balance
        .checked_sub(amount)
        .ok_or_else(|| TransferError::arithmetic_overflow("debit", sender.id))?;
    let credited = receiver
        .balance
        .checked_add(amount)
        .ok_or_else(|| TransferError::arithmetic_overflow("credit", receiver.id))?;

    sender.balance = debited;
    receiver.balance = credited;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account_store::InMemoryAccountStore;
    use crate::core::traits::AccountStore;
    use crate::core::validator::validate;
    use crate::types::{AccountId, AccountType, OwnerId};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn account(id: u128, balance: Decimal) -> Account {
        Account::new(
            AccountId::from_uuid(Uuid::from_u128(id)),
            OwnerId::new(1),
            AccountType::Checking,
            balance,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    fn token(sender: &Account, receiver: &Account, amount: Decimal) -> ValidatedTransfer {
        let store = InMemoryAccountStore::new();
        store.save(sender.clone());
        store.save(receiver.clone());
        validate(&store, Some(sender), Some(receiver), amount).unwrap()
    }

    #[test]
    fn test_apply_moves_the_amount() {
        let mut sender = account(1, dec!(100));
        let mut receiver = account(2, dec!(0));
        let transfer = token(&sender, &receiver, dec!(40));

        apply(&transfer, &mut sender, &mut receiver).unwrap();

        assert_eq!(sender.balance, dec!(60));
        assert_eq!(receiver.balance, dec!(40));
    }

    #[test]
    fn test_apply_allows_exact_balance() {
        let mut sender = account(1, dec!(40));
        let mut receiver = account(2, dec!(5));
        let transfer = token(&sender, &receiver, dec!(40));

        apply(&transfer, &mut sender, &mut receiver).unwrap();

        assert_eq!(sender.balance, Decimal::ZERO);
        assert_eq!(receiver.balance, dec!(45));
    }

    #[test]
    fn test_apply_recheck_rejects_shrunk_balance() {
        let mut sender = account(1, dec!(100));
        let mut receiver = account(2, dec!(0));
        let transfer = token(&sender, &receiver, dec!(40));

        // Balance shrank between validation and lock acquisition.
        sender.balance = dec!(10);

        let result = apply(&transfer, &mut sender, &mut receiver);

        assert_eq!(
            result.unwrap_err(),
            TransferError::insufficient_balance(sender.id, dec!(10), dec!(40))
        );
        assert_eq!(sender.balance, dec!(10));
        assert_eq!(receiver.balance, dec!(0));
    }

    #[test]
    fn test_apply_overflow_leaves_both_balances_unchanged() {
        let mut sender = account(1, dec!(100));
        let mut receiver = account(2, Decimal::MAX);
        let transfer = token(&sender, &receiver, dec!(40));

        let result = apply(&transfer, &mut sender, &mut receiver);

        assert_eq!(
            result.unwrap_err(),
            TransferError::arithmetic_overflow("credit", receiver.id)
        );
        assert_eq!(sender.balance, dec!(100));
        assert_eq!(receiver.balance, Decimal::MAX);
    }
}

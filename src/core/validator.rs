//! Transfer validation
//!
//! This module implements the pre-mutation checks for a proposed
//! transfer. Validation is a pure decision over account snapshots plus
//! one existence probe against the account store; it mutates nothing.
//!
//! Checks run in a fixed order and short-circuit on the first failure,
//! so a request violating several rules always reports the same
//! rejection:
//!
//! 1. both parties present
//! 2. sender and receiver are distinct accounts
//! 3. both accounts still exist in the store
//! 4. ownership rule: a savings account on either side requires a
//!    shared owner
//! 5. sender balance covers the amount (equality is sufficient)
//! 6. amount is positive
//!
//! A successful run yields a [`ValidatedTransfer`] token, the only way
//! to invoke the balance mutator.

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountId, AccountType, TransferError};
use rust_decimal::Decimal;

/// Proof that a proposed transfer passed every pre-mutation check
///
/// Constructed only by [`validate`]; the private fields keep callers
/// from forging one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTransfer {
    sender: AccountId,
    receiver: AccountId,
    amount: Decimal,
}

impl ValidatedTransfer {
    /// The account to debit
    pub fn sender(&self) -> AccountId {
        self.sender
    }

    /// The account to credit
    pub fn receiver(&self) -> AccountId {
        self.receiver
    }

    /// The validated amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Validate a proposed transfer against current ledger state
///
/// `sender` and `receiver` are snapshots resolved by the caller; they
/// are re-verified against the store to guard against stale references.
///
/// # Errors
///
/// The first failing check in the documented order, as a
/// [`TransferError`].
pub fn validate<S: AccountStore>(
    store: &S,
    sender: Option<&Account>,
    receiver: Option<&Account>,
    amount: Decimal,
) -> Result<ValidatedTransfer, TransferError> {
    let (sender, receiver) = match (sender, receiver) {
        (Some(sender), Some(receiver)) => (sender, receiver),
        _ => return Err(TransferError::MissingParty),
    };

    if sender.id == receiver.id {
        return Err(TransferError::self_transfer(sender.id));
    }

    // Guards against snapshots of accounts removed since resolution.
    store.find_by_id(sender.id).map_err(TransferError::from)?;
    store.find_by_id(receiver.id).map_err(TransferError::from)?;

    let savings_involved = sender.account_type == AccountType::Savings
        || receiver.account_type == AccountType::Savings;
    if savings_involved && sender.owner != receiver.owner {
        return Err(TransferError::ownership_violation(sender.id, receiver.id));
    }

    if sender.balance < amount {
        return Err(TransferError::insufficient_balance(
            sender.id,
            sender.balance,
            amount,
        ));
    }

    if amount <= Decimal::ZERO {
        return Err(TransferError::invalid_amount(amount));
    }

    Ok(ValidatedTransfer {
        sender: sender.id,
        receiver: receiver.id,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account_store::InMemoryAccountStore;
    use crate::types::OwnerId;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn account(id: u128, owner: u64, kind: AccountType, balance: Decimal) -> Account {
        Account::new(
            AccountId::from_uuid(Uuid::from_u128(id)),
            OwnerId::new(owner),
            kind,
            balance,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    fn store_with(accounts: &[&Account]) -> InMemoryAccountStore {
        use crate::core::traits::AccountStore as _;
        let store = InMemoryAccountStore::new();
        for account in accounts {
            store.save((*account).clone());
        }
        store
    }

    #[test]
    fn test_valid_transfer_produces_token() {
        let sender = account(1, 10, AccountType::Checking, dec!(100));
        let receiver = account(2, 20, AccountType::Checking, dec!(0));
        let store = store_with(&[&sender, &receiver]);

        let token = validate(&store, Some(&sender), Some(&receiver), dec!(40)).unwrap();

        assert_eq!(token.sender(), sender.id);
        assert_eq!(token.receiver(), receiver.id);
        assert_eq!(token.amount(), dec!(40));
    }

    #[rstest]
    #[case::sender_absent(false, true)]
    #[case::receiver_absent(true, false)]
    #[case::both_absent(false, false)]
    fn test_missing_party(#[case] with_sender: bool, #[case] with_receiver: bool) {
        let sender = account(1, 10, AccountType::Checking, dec!(100));
        let receiver = account(2, 20, AccountType::Checking, dec!(0));
        let store = store_with(&[&sender, &receiver]);

        let result = validate(
            &store,
            with_sender.then_some(&sender),
            with_receiver.then_some(&receiver),
            dec!(10),
        );

        assert_eq!(result.unwrap_err(), TransferError::MissingParty);
    }

    #[test]
    fn test_self_transfer_rejected_regardless_of_balance() {
        let sender = account(1, 10, AccountType::Checking, dec!(1000));
        let store = store_with(&[&sender]);

        let result = validate(&store, Some(&sender), Some(&sender), dec!(10));

        assert_eq!(result.unwrap_err(), TransferError::self_transfer(sender.id));
    }

    #[test]
    fn test_stale_sender_snapshot_rejected() {
        let sender = account(1, 10, AccountType::Checking, dec!(100));
        let receiver = account(2, 20, AccountType::Checking, dec!(0));
        // Only the receiver is registered; the sender snapshot is stale.
        let store = store_with(&[&receiver]);

        let result = validate(&store, Some(&sender), Some(&receiver), dec!(10));

        assert_eq!(
            result.unwrap_err(),
            TransferError::unknown_account(sender.id)
        );
    }

    #[rstest]
    #[case::savings_sender(AccountType::Savings, AccountType::Checking)]
    #[case::savings_receiver(AccountType::Checking, AccountType::Savings)]
    #[case::both_savings(AccountType::Savings, AccountType::Savings)]
    fn test_savings_across_owners_rejected(
        #[case] sender_kind: AccountType,
        #[case] receiver_kind: AccountType,
    ) {
        let sender = account(1, 10, sender_kind, dec!(100));
        let receiver = account(2, 20, receiver_kind, dec!(0));
        let store = store_with(&[&sender, &receiver]);

        let result = validate(&store, Some(&sender), Some(&receiver), dec!(10));

        assert_eq!(
            result.unwrap_err(),
            TransferError::ownership_violation(sender.id, receiver.id)
        );
    }

    #[rstest]
    #[case::savings_same_owner(AccountType::Savings, AccountType::Savings, 10, 10)]
    #[case::savings_to_checking_same_owner(AccountType::Savings, AccountType::Checking, 10, 10)]
    #[case::checking_across_owners(AccountType::Checking, AccountType::Checking, 10, 20)]
    fn test_ownership_rule_allows(
        #[case] sender_kind: AccountType,
        #[case] receiver_kind: AccountType,
        #[case] sender_owner: u64,
        #[case] receiver_owner: u64,
    ) {
        let sender = account(1, sender_owner, sender_kind, dec!(100));
        let receiver = account(2, receiver_owner, receiver_kind, dec!(0));
        let store = store_with(&[&sender, &receiver]);

        assert!(validate(&store, Some(&sender), Some(&receiver), dec!(10)).is_ok());
    }

    #[test]
    fn test_insufficient_balance() {
        let sender = account(1, 10, AccountType::Checking, dec!(30));
        let receiver = account(2, 20, AccountType::Checking, dec!(0));
        let store = store_with(&[&sender, &receiver]);

        let result = validate(&store, Some(&sender), Some(&receiver), dec!(30.01));

        assert_eq!(
            result.unwrap_err(),
            TransferError::insufficient_balance(sender.id, dec!(30), dec!(30.01))
        );
    }

    #[test]
    fn test_balance_equal_to_amount_is_sufficient() {
        let sender = account(1, 10, AccountType::Checking, dec!(30));
        let receiver = account(2, 20, AccountType::Checking, dec!(0));
        let store = store_with(&[&sender, &receiver]);

        assert!(validate(&store, Some(&sender), Some(&receiver), dec!(30)).is_ok());
    }

    #[rstest]
    #[case::zero(dec!(0))]
    #[case::negative(dec!(-5))]
    fn test_non_positive_amount_rejected(#[case] amount: Decimal) {
        let sender = account(1, 10, AccountType::Checking, dec!(100));
        let receiver = account(2, 20, AccountType::Checking, dec!(0));
        let store = store_with(&[&sender, &receiver]);

        let result = validate(&store, Some(&sender), Some(&receiver), amount);

        assert_eq!(result.unwrap_err(), TransferError::invalid_amount(amount));
    }

    // Check-order determinism: the first failing check wins.

    #[test]
    fn test_self_transfer_reported_before_insufficient_balance() {
        let sender = account(1, 10, AccountType::Checking, dec!(0));
        let store = store_with(&[&sender]);

        let result = validate(&store, Some(&sender), Some(&sender), dec!(50));

        assert_eq!(result.unwrap_err(), TransferError::self_transfer(sender.id));
    }

    #[test]
    fn test_ownership_violation_reported_before_invalid_amount() {
        let sender = account(1, 10, AccountType::Savings, dec!(100));
        let receiver = account(2, 20, AccountType::Checking, dec!(0));
        let store = store_with(&[&sender, &receiver]);

        let result = validate(&store, Some(&sender), Some(&receiver), dec!(0));

        assert_eq!(
            result.unwrap_err(),
            TransferError::ownership_violation(sender.id, receiver.id)
        );
    }
}

//! CSV format handling for session records and account output
//!
//! This module centralizes the session CSV format concerns:
//! - SessionRecord structure for deserialization
//! - Conversion from CSV records to session operations
//! - Labeled account output serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Account, AccountType, OwnerId};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the session input format with columns:
/// `op, account, counterparty, owner, kind, amount, message`.
/// Everything past `account` is optional because the two operations use
/// different subsets of the columns.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionRecord {
    pub op: String,
    pub account: String,
    #[serde(default)]
    pub counterparty: Option<String>,
    #[serde(default)]
    pub owner: Option<u64>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A parsed session operation
///
/// Accounts are referenced by session-local labels; the session runner
/// resolves labels to generated account ids.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOp {
    /// Open an account under a label
    Open {
        label: String,
        owner: OwnerId,
        account_type: AccountType,
        opening_balance: Decimal,
    },
    /// Transfer between two previously opened labels
    Transfer {
        sender: String,
        receiver: String,
        amount: Decimal,
        message: String,
    },
}

/// Convert a SessionRecord to a SessionOp
///
/// Validates that the columns required by the operation are present and
/// parse: `open` needs owner, kind, and an opening balance; `transfer`
/// needs a counterparty and an amount.
///
/// # Errors
///
/// A message describing the conversion failure; the row is skipped by
/// the session runner, never the whole session.
pub fn convert_session_record(record: SessionRecord) -> Result<SessionOp, String> {
    if record.account.is_empty() {
        return Err("row is missing an account label".to_string());
    }

    match record.op.to_lowercase().as_str() {
        "open" => {
            let owner = record
                .owner
                .ok_or_else(|| format!("open '{}' requires an owner", record.account))?;
            let account_type = match record.kind.as_deref() {
                Some("checking") => AccountType::Checking,
                Some("savings") => AccountType::Savings,
                Some(other) => {
                    return Err(format!(
                        "invalid account kind '{}' for open '{}'",
                        other, record.account
                    ))
                }
                None => {
                    return Err(format!("open '{}' requires an account kind", record.account))
                }
            };
            let opening_balance = parse_amount(record.amount.as_deref(), &record.account)?;

            Ok(SessionOp::Open {
                label: record.account,
                owner: OwnerId::new(owner),
                account_type,
                opening_balance,
            })
        }
        "transfer" => {
            let receiver = match record.counterparty {
                Some(receiver) if !receiver.is_empty() => receiver,
                _ => {
                    return Err(format!(
                        "transfer from '{}' requires a counterparty",
                        record.account
                    ))
                }
            };
            let amount = parse_amount(record.amount.as_deref(), &record.account)?;

            Ok(SessionOp::Transfer {
                sender: record.account,
                receiver,
                amount,
                message: record.message.unwrap_or_default(),
            })
        }
        other => Err(format!("invalid operation '{}'", other)),
    }
}

fn parse_amount(amount: Option<&str>, label: &str) -> Result<Decimal, String> {
    match amount {
        Some(raw) if !raw.trim().is_empty() => Decimal::from_str(raw.trim())
            .map_err(|_| format!("invalid amount '{}' for '{}'", raw, label)),
        _ => Err(format!("row for '{}' requires an amount", label)),
    }
}

/// Write labeled account states to CSV format
///
/// Columns: `account, owner, kind, balance`, sorted by label for
/// deterministic output.
///
/// # Errors
///
/// A message describing the write failure.
pub fn write_accounts_csv(
    accounts: &[(String, Account)],
    output: &mut dyn Write,
) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record(["account", "owner", "kind", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted: Vec<&(String, Account)> = accounts.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    for (label, account) in sorted {
        writer
            .write_record(&[
                label.clone(),
                account.owner.to_string(),
                account.account_type.to_string(),
                account.balance.to_string(),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

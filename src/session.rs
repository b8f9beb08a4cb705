//! Batch session runner
//!
//! Drives a fresh in-memory engine from a CSV stream of session
//! operations and writes the final account states back out as CSV.
//!
//! Rows reference accounts by session-local labels; `open` binds a
//! label to a newly created account and later `transfer` rows resolve
//! labels through that binding. A row that fails to parse, convert, or
//! execute is logged and skipped; the session always runs to the end.

use crate::core::InMemoryLedgerEngine;
use crate::io::csv_format::{convert_session_record, write_accounts_csv, SessionOp, SessionRecord};
use crate::types::AccountId;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Row counts for a completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOutcome {
    /// Rows that executed against the engine
    pub processed: usize,
    /// Rows skipped for any reason
    pub rejected: usize,
}

/// Errors that abort a session
///
/// Only input/output failures abort; per-row failures are counted in
/// the [`SessionOutcome`] instead.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read session input: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write account output: {0}")]
    Output(String),
}

/// Run a session from a CSV reader and write final account states
///
/// # Errors
///
/// [`SessionError`] if the input stream cannot be read or the output
/// cannot be written.
pub fn run_session<R: Read, W: Write>(
    input: R,
    output: &mut W,
) -> Result<SessionOutcome, SessionError> {
    let engine = InMemoryLedgerEngine::in_memory();
    let mut labels: HashMap<String, AccountId> = HashMap::new();
    let mut outcome = SessionOutcome::default();

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    for (index, result) in reader.deserialize::<SessionRecord>().enumerate() {
        let row = index + 1;
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                warn!(row, %error, "skipping malformed row");
                outcome.rejected += 1;
                continue;
            }
        };

        let op = match convert_session_record(record) {
            Ok(op) => op,
            Err(error) => {
                warn!(row, error, "skipping invalid row");
                outcome.rejected += 1;
                continue;
            }
        };

        match op {
            SessionOp::Open {
                label,
                owner,
                account_type,
                opening_balance,
            } => {
                if labels.contains_key(&label) {
                    warn!(row, label, "skipping open: label already bound");
                    outcome.rejected += 1;
                    continue;
                }
                match engine.create_new_account(owner, account_type, opening_balance) {
                    Ok(account) => {
                        labels.insert(label, account.id);
                        outcome.processed += 1;
                    }
                    Err(rejection) => {
                        warn!(row, label, %rejection, "skipping open");
                        outcome.rejected += 1;
                    }
                }
            }
            SessionOp::Transfer {
                sender,
                receiver,
                amount,
                message,
            } => {
                let (Some(&sender_id), Some(&receiver_id)) =
                    (labels.get(&sender), labels.get(&receiver))
                else {
                    warn!(row, sender, receiver, "skipping transfer: unknown label");
                    outcome.rejected += 1;
                    continue;
                };
                // The engine logs its own rejections.
                match engine.make_transfer(sender_id, receiver_id, amount, &message) {
                    Ok(_) => outcome.processed += 1,
                    Err(_) => outcome.rejected += 1,
                }
            }
        }
    }

    let mut rows: Vec<(String, AccountId)> = labels.into_iter().collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    let mut snapshots = Vec::with_capacity(rows.len());
    for (label, id) in rows {
        let account = engine
            .find_account(id)
            .map_err(|e| SessionError::Output(e.to_string()))?;
        snapshots.push((label, account));
    }

    write_accounts_csv(&snapshots, output).map_err(SessionError::Output)?;

    Ok(outcome)
}

/// Run a session from a file path
///
/// # Errors
///
/// [`SessionError`] if the file cannot be opened or the session fails.
pub fn run_file<W: Write>(path: &Path, output: &mut W) -> Result<SessionOutcome, SessionError> {
    let file = File::open(path)?;
    run_session(file, output)
}

//! Session CSV input and account output
//!
//! - `csv_format` - Record structures, record-to-operation conversion,
//!   and labeled account output

pub mod csv_format;

pub use csv_format::{convert_session_record, write_accounts_csv, SessionOp, SessionRecord};

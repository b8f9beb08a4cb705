//! Core business logic module
//!
//! This module contains the transfer engine and its collaborators:
//! - `traits` - Collaborator seams (stores, clock, id generator)
//! - `validator` - Pre-mutation transfer checks and the proof token
//! - `mutator` - Token-gated balance mutation with funds re-check
//! - `recorder` - Immutable transaction recording
//! - `engine` - Transfer orchestration and account use cases
//! - `account_store` / `transaction_store` - In-memory storage
//! - `providers` - Clock and id generator implementations

pub mod account_store;
pub mod engine;
pub mod mutator;
pub mod providers;
pub mod recorder;
pub mod traits;
pub mod transaction_store;
pub mod validator;

pub use account_store::InMemoryAccountStore;
pub use engine::{InMemoryLedgerEngine, LedgerEngine};
pub use providers::{FixedClock, SequentialIdGenerator, SystemClock, UuidGenerator};
pub use traits::{AccountStore, Clock, IdGenerator, TransactionStore};
pub use transaction_store::InMemoryTransactionStore;
pub use validator::{validate, ValidatedTransfer};

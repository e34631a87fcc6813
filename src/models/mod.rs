//! Data models for Ohmy7702 commands and services
//!
//! This module organizes the record, draft and notification structs shared
//! across the command handlers and services.

pub mod achievement;
pub mod notification;
pub mod transaction;

// Re-export commonly used types for convenience
pub use achievement::Achievement;
pub use notification::{Notice, Severity};
pub use transaction::{
    seed_records, DraftField, DraftTransaction, TransactionRecord, GAS_ESTIMATE_MAX,
    GAS_ESTIMATE_MIN,
};

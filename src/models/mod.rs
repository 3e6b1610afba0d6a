//! Data models shared between the transaction store client and its consumers
//!
//! Wire casing is snake_case throughout; the store speaks JSON.

pub mod nfc;
pub mod pagination;
pub mod summary;
pub mod transaction;

// Re-export commonly used types for convenience
pub use nfc::{NfcEvent, NfcRawData};
pub use pagination::Paginated;
pub use summary::TransactionSummary;
pub use transaction::{NewTransaction, Transaction, TransactionKind, TransactionStatus};

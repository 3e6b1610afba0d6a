use serde::{Deserialize, Serialize};

/// Aggregate counts and amounts over an optional date range
///
/// Purely derived by the remote store; there is no identity to preserve
/// between two summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub total_transactions: i64,
    pub total_amount: f64,
    pub credit_amount: f64,
    pub debit_amount: f64,
    pub nfc_transactions: i64,
    pub pending_transactions: i64,
    pub completed_transactions: i64,
    pub failed_transactions: i64,
}

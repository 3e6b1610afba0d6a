//! Transaction records as the remote store materializes them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nfc::NfcEvent;

/// Direction of a transaction relative to the account holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Debit,
    Credit,
}

impl TransactionKind {
    /// Wire value, as the store expects it in query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Debit => "debit",
            TransactionKind::Credit => "credit",
        }
    }
}

/// Lifecycle status of a transaction
///
/// Transitions (pending -> completed or failed) are performed by the remote
/// store; this client only ever reads the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    /// Wire value, as the store expects it in query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }
}

/// A fully materialized transaction record
///
/// `id` and `transaction_id` are server-assigned and globally unique; the
/// client never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub transaction_id: String,
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    #[serde(default)]
    pub merchant_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Present when the record originated from a contactless capture
    #[serde(default)]
    pub nfc_data: Option<NfcEvent>,
    pub transaction_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied subset of a transaction for creation
///
/// The store fills `id`, `transaction_id`, `created_at`, `updated_at`, and
/// assigns an initial `status` when none is given. Unset fields are omitted
/// from the request body entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfc_data: Option<NfcEvent>,
    pub transaction_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_new_transaction() -> NewTransaction {
        NewTransaction {
            amount: 12.50,
            currency: "EUR".to_string(),
            kind: TransactionKind::Debit,
            status: None,
            merchant_name: None,
            category: None,
            nfc_data: None,
            transaction_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let json = serde_json::to_value(sample_new_transaction()).unwrap();
        assert_eq!(json["type"], "debit");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_unset_fields_are_omitted_from_body() {
        let json = serde_json::to_value(sample_new_transaction()).unwrap();
        let body = json.as_object().unwrap();
        assert!(!body.contains_key("status"));
        assert!(!body.contains_key("merchant_name"));
        assert!(!body.contains_key("category"));
        assert!(!body.contains_key("nfc_data"));
        assert!(body.contains_key("amount"));
        assert!(body.contains_key("transaction_date"));
    }

    #[test]
    fn test_transaction_deserializes_from_store_json() {
        let json = r#"{
            "id": 7,
            "transaction_id": "TXN_00007",
            "amount": 42.75,
            "currency": "USD",
            "type": "credit",
            "status": "completed",
            "merchant_name": "Corner Cafe",
            "transaction_date": "2024-03-01T09:30:00Z",
            "created_at": "2024-03-01T09:30:01Z",
            "updated_at": "2024-03-01T09:31:00Z"
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, 7);
        assert_eq!(tx.transaction_id, "TXN_00007");
        assert_eq!(tx.kind, TransactionKind::Credit);
        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(tx.merchant_name.as_deref(), Some("Corner Cafe"));
        // category and nfc_data were absent entirely
        assert!(tx.category.is_none());
        assert!(tx.nfc_data.is_none());
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(TransactionStatus::Pending.as_str(), "pending");
        assert_eq!(TransactionStatus::Completed.as_str(), "completed");
        assert_eq!(TransactionStatus::Failed.as_str(), "failed");
        assert_eq!(TransactionKind::Debit.as_str(), "debit");
        assert_eq!(TransactionKind::Credit.as_str(), "credit");
    }
}

//! Client library for the paytap transaction store
//!
//! Two cooperating components:
//!
//! - [`api::TransactionClient`] — typed async HTTP access to the remote
//!   transaction store (listing with filters and pagination, single-record
//!   fetch, creation, summary aggregation, recent contactless captures).
//! - [`nfc::NfcReader`] — a simulated contactless reader producing
//!   "card detected" events for registered listeners, standing in for real
//!   NFC hardware during development.
//!
//! The two never call each other; an application-level orchestrator
//! typically turns a captured [`models::NfcEvent`] into a transaction via
//! the client.
//!
//! The store address is resolved once per process from
//! `PAYTAP_API_BASE_URL` (see [`config`]), falling back to
//! `http://localhost:8000/api/v1`.

pub mod api;
pub mod config;
pub mod models;
pub mod nfc;

pub use api::{ApiError, TransactionClient, TransactionFilters};
pub use models::{
    NewTransaction, NfcEvent, Paginated, Transaction, TransactionKind, TransactionStatus,
    TransactionSummary,
};
pub use nfc::{HardwareProbe, ListenerHandle, NfcError, NfcReader, SimulatedHardware};

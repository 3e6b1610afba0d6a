//! Contactless detection events

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Free-form payload attached to a detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NfcRawData {
    /// Capture time of the detection
    pub timestamp: DateTime<Utc>,
    /// Marks events produced by the simulated reader
    pub simulated: bool,
}

/// A single "card detected" event
///
/// Ephemeral: created at detection time, handed to listeners synchronously,
/// then owned by whichever listener retains it. Serializable so a capture
/// can be embedded as `Transaction::nfc_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NfcEvent {
    pub card_id: String,
    pub terminal_id: String,
    /// Received signal strength in dBm
    pub signal_strength: i32,
    pub raw_data: NfcRawData,
}

impl NfcEvent {
    /// Weakest signal the simulated reader reports, in dBm
    pub const MIN_SIGNAL_DBM: i32 = -80;
    /// Strongest signal the simulated reader reports, in dBm
    pub const MAX_SIGNAL_DBM: i32 = -20;

    /// Synthesize a plausible detection with random identifiers
    pub fn simulated() -> Self {
        let mut rng = rand::thread_rng();
        let signal_strength = rng.gen_range(Self::MIN_SIGNAL_DBM..=Self::MAX_SIGNAL_DBM);
        NfcEvent {
            card_id: format!("CARD_{}", random_token(9)),
            terminal_id: format!("TERM_{}", random_token(6)),
            signal_strength,
            raw_data: NfcRawData {
                timestamp: Utc::now(),
                simulated: true,
            },
        }
    }
}

/// Random alphanumeric token for opaque card/terminal identifiers
fn random_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

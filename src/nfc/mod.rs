//! Simulated contactless event source
//!
//! Stands in for a physical NFC reader: a switchable device with a
//! subscriber registry and a pseudo-random detection generator, used to
//! exercise payment-capture flows without hardware.

pub mod probe;
pub mod reader;

pub use probe::{HardwareProbe, SimulatedHardware};
pub use reader::{ListenerHandle, NfcError, NfcReader};

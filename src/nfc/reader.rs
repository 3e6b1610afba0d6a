use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::NfcEvent;

use super::probe::{HardwareProbe, SimulatedHardware};

/// Failures a hardware-backed reader reports when starting a session
///
/// The simulated probe never produces them, but the call sites where a real
/// backend must fail are typed here rather than papered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NfcError {
    #[error("NFC is not supported on this device")]
    Unsupported,
    #[error("NFC permission was denied")]
    PermissionDenied,
    #[error("The reader is already listening")]
    ReaderBusy,
}

/// Token returned by [`NfcReader::subscribe`], usable for unsubscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerHandle(u64);

type Listener = Box<dyn Fn(&NfcEvent) + Send>;

struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Simulated contactless reader with an owned subscriber registry
///
/// Listeners are held in registration order, duplicates permitted, and are
/// invoked synchronously: every listener observes a detection before
/// [`simulate_detection`](NfcReader::simulate_detection) returns. The
/// registry is mutex-guarded so the reader stays sound if shared across
/// threads.
pub struct NfcReader<P: HardwareProbe = SimulatedHardware> {
    probe: P,
    listening: AtomicBool,
    registry: Mutex<Registry>,
}

impl NfcReader<SimulatedHardware> {
    /// Create a reader backed by the always-available simulated hardware
    pub fn simulated() -> Self {
        Self::with_probe(SimulatedHardware)
    }
}

impl Default for NfcReader<SimulatedHardware> {
    fn default() -> Self {
        Self::simulated()
    }
}

impl<P: HardwareProbe> NfcReader<P> {
    /// Create a reader over a specific hardware probe
    pub fn with_probe(probe: P) -> Self {
        NfcReader {
            probe,
            listening: AtomicBool::new(false),
            registry: Mutex::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            }),
        }
    }

    /// Whether the device carries NFC hardware at all
    pub fn check_support(&self) -> bool {
        self.probe.is_supported()
    }

    /// Whether the NFC radio is currently switched on
    pub fn is_enabled(&self) -> bool {
        self.probe.is_enabled()
    }

    /// Ask the platform for NFC permissions; true when granted
    pub fn request_permissions(&self) -> bool {
        self.probe.request_permissions()
    }

    /// Begin accepting detections
    ///
    /// Fails when the probe reports missing hardware or denied permission,
    /// or when a reading session is already active.
    pub fn start_reading(&self) -> Result<(), NfcError> {
        if !self.probe.is_supported() {
            return Err(NfcError::Unsupported);
        }
        if !self.probe.request_permissions() {
            return Err(NfcError::PermissionDenied);
        }
        if self.listening.swap(true, Ordering::SeqCst) {
            return Err(NfcError::ReaderBusy);
        }
        info!("Simulated NFC reading started");
        Ok(())
    }

    /// Stop accepting detections and drop every subscription
    ///
    /// Stopping invalidates all registered listeners; callers must
    /// re-subscribe after restarting. Idempotent.
    pub fn stop_reading(&self) {
        self.listening.store(false, Ordering::SeqCst);
        let mut registry = self.registry.lock().unwrap();
        let dropped = registry.listeners.len();
        registry.listeners.clear();
        info!("Simulated NFC reading stopped, {} listener(s) dropped", dropped);
    }

    /// Whether a reading session is active
    pub fn is_reading(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// Register a callback invoked once per detection, in registration order
    ///
    /// No de-duplication: subscribing the same logic twice invokes it twice.
    /// The returned handle allows removal via [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&self, callback: F) -> ListenerHandle
    where
        F: Fn(&NfcEvent) + Send + 'static,
    {
        let mut registry = self.registry.lock().unwrap();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(callback)));
        debug!("NFC listener {} registered ({} total)", id, registry.listeners.len());
        ListenerHandle(id)
    }

    /// Remove one subscription; true when it was still registered
    pub fn unsubscribe(&self, handle: ListenerHandle) -> bool {
        let mut registry = self.registry.lock().unwrap();
        let before = registry.listeners.len();
        registry.listeners.retain(|(id, _)| *id != handle.0);
        registry.listeners.len() < before
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        self.registry.lock().unwrap().listeners.len()
    }

    /// Synthesize one detection and deliver it to every listener
    ///
    /// Listeners run synchronously in registration order, all observing the
    /// same event, which is then returned to the caller. Callbacks must not
    /// call back into the reader. The event is produced even while no
    /// session is active, since the simulated hardware cannot actually be
    /// switched off; a real backend would reject the detection instead.
    pub fn simulate_detection(&self) -> NfcEvent {
        if !self.is_reading() {
            warn!("NFC detection simulated while the reader is not listening");
        }

        let event = NfcEvent::simulated();
        let registry = self.registry.lock().unwrap();
        for (_, listener) in registry.listeners.iter() {
            listener(&event);
        }
        debug!(
            "Simulated detection of card {} delivered to {} listener(s)",
            event.card_id,
            registry.listeners.len()
        );
        event
    }
}

/// Capability checks a hardware-backed reader would ask the platform
///
/// The reader consults the probe before accepting detections, so tests and
/// alternative backends can make any probe answer "no".
pub trait HardwareProbe {
    /// Whether the device carries an NFC radio at all
    fn is_supported(&self) -> bool;

    /// Whether the radio is currently switched on
    fn is_enabled(&self) -> bool;

    /// Ask the platform for NFC permissions; true when granted
    fn request_permissions(&self) -> bool;
}

/// Simulated hardware: every probe answers yes
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedHardware;

impl HardwareProbe for SimulatedHardware {
    fn is_supported(&self) -> bool {
        true
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn request_permissions(&self) -> bool {
        true
    }
}

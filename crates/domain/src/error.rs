//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors; nothing here is fatal for the
//! remote control, callers report and carry on.

/// Errors raised by a device when an operation is not allowed in its
/// current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// The thermostat only accepts a setpoint while it is on.
    #[error("{location} thermostat is off")]
    PoweredOff {
        /// Location of the rejecting thermostat.
        location: String,
    },
}

/// Errors raised by the remote control itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Slot index outside `0..slots`.
    #[error("slot {slot} is out of range, the remote has {slots} slots")]
    SlotOutOfRange {
        /// The requested slot.
        slot: usize,
        /// Number of slots on the remote.
        slots: usize,
    },
}

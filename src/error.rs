//! Unified error type for probelink.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Errors here are configuration mistakes surfaced to the settings
//! collaborator. Data-quality problems (short buffers, non-finite raw
//! readings) never reach this type: the decoders substitute documented
//! fallback values instead, so a single corrupt notification cannot stall
//! a live measurement stream.

use crate::sensors::{CalibrationMode, SensorKind};

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The requested calibration mode is not in the sensor's supported set.
    /// The channel's current mode is left unchanged.
    #[error("calibration mode {mode:?} not supported by {kind:?}")]
    UnsupportedMode {
        kind: SensorKind,
        mode: CalibrationMode,
    },

    /// No sensor is registered under the given identifier.
    #[error("unknown sensor identifier")]
    UnknownSensor,

    /// The channel bank has no free slot left.
    #[error("channel bank full")]
    BankFull,
}

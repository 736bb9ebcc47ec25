//! Protocol-wide constants and compile-time configuration.
//!
//! Per-sensor payload layouts (frame lengths, field offsets, conversion
//! constants) live in the individual decoder modules under `sensors/` so
//! that one probe's calibration can be tuned without touching another's.
//! Only constants shared with the connection collaborator belong here.

// BLE

/// GATT service that carries every measurement characteristic on the board.
///
/// The connection collaborator discovers this service and subscribes to its
/// characteristics; each characteristic UUID (suffixed with a channel index
/// for multi-axis sources) is the stable sensor identifier used by the
/// registry.
pub const SENSOR_SERVICE_UUID: &str = "555a0001-0000-467a-9538-01f0652c74e8";

// Channels

/// Maximum number of simultaneously attached sensor channels.
///
/// The board exposes six measurement characteristics; the extra slots leave
/// headroom for additional axis channels of the same characteristic.
pub const MAX_CHANNELS: usize = 8;

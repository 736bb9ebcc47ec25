//! Resistance probe payload.
//!
//! Layout (4 bytes):
//! ```text
//! Byte 0-3: f32 LE, resistance in Ohms
//! ```
//!
//! An open probe circuit makes the firmware's voltage-divider math blow up
//! to infinity (or NaN), so a non-finite raw reading is the hardware's
//! "nothing connected" signal, not noise.

/// Resistance probe frame size in bytes.
pub const RESISTANCE_FRAME_LEN: usize = 4;

/// Substitute raw value (Ohms) for a non-finite reading.
///
/// Opaque hardware-calibration constant inherited from the firmware:
/// 1 MΩ reads as a clearly out-of-range 1000 kΩ "open circuit" indicator
/// once scaled, keeping NaN/Infinity out of the chart layer.
const OPEN_CIRCUIT_OHMS: f64 = 1_000_000.0;

/// Ohms per displayed kΩ.
const OHMS_PER_KILOHM: f64 = 1_000.0;

/// Decode a resistance probe notification into kΩ.
///
/// Short buffers decode to `0.0`; trailing bytes are ignored.
pub fn decode(data: &[u8]) -> f64 {
    let ohms = match super::f32_le(data, 0) {
        Some(raw) => raw as f64,
        None => return 0.0,
    };
    let ohms = if ohms.is_finite() {
        ohms
    } else {
        OPEN_CIRCUIT_OHMS
    };
    ohms / OHMS_PER_KILOHM
}

//! Current probe payload.
//!
//! Layout (4 bytes):
//! ```text
//! Byte 0-3: f32 LE, current in Amps (already calibrated by firmware)
//! ```
//!
//! No mode selection; the firmware delivers the value in display units.

/// Current probe frame size in bytes.
pub const CURRENT_FRAME_LEN: usize = 4;

/// Decode a current probe notification into Amps.
///
/// Short buffers decode to `0.0`; trailing bytes are ignored.
pub fn decode(data: &[u8]) -> f64 {
    match super::f32_le(data, 0) {
        Some(amps) => amps as f64,
        None => 0.0,
    }
}

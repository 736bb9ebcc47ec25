//! Magnetometer payload.
//!
//! Layout (12 bytes):
//! ```text
//! Byte 0-3:  f32 LE, X field component
//! Byte 4-7:  f32 LE, Y field component
//! Byte 8-11: f32 LE, Z field component
//! ```
//!
//! The app charts the orientation-independent field strength, so the three
//! components collapse to their Euclidean magnitude, scaled by 100 into
//! display units (µT).

/// Three-axis magnetometer frame size in bytes.
pub const MAG_FRAME_LEN: usize = 12;

/// Magnitude-to-display-unit scale factor.
const DISPLAY_SCALE: f64 = 100.0;

/// Decode a magnetometer notification into field strength (µT).
///
/// Any frame whose length is not exactly [`MAG_FRAME_LEN`] decodes to `0.0`.
pub fn decode(data: &[u8]) -> f64 {
    if data.len() != MAG_FRAME_LEN {
        return 0.0;
    }
    let (Some(x), Some(y), Some(z)) = (
        super::f32_le(data, 0),
        super::f32_le(data, 4),
        super::f32_le(data, 8),
    ) else {
        return 0.0;
    };
    let (x, y, z) = (x as f64, y as f64, z as f64);
    libm::sqrt(x * x + y * y + z * z) * DISPLAY_SCALE
}

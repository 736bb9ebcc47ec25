//! Gyroscope payload, Z axis.
//!
//! The IMU characteristic pushes all three axes in one notification:
//! ```text
//! Byte 0-3:  f32 LE, X angular velocity (deg/s)
//! Byte 4-7:  f32 LE, Y angular velocity (deg/s)
//! Byte 8-11: f32 LE, Z angular velocity (deg/s)
//! ```
//!
//! This decoder serves the Z-axis channel (`<uuid>_2` in the registry) and
//! extracts only the last field.

/// Three-axis gyroscope frame size in bytes.
pub const GYRO_FRAME_LEN: usize = 12;

/// Byte offset of the Z-axis field.
const Z_AXIS_OFFSET: usize = 8;

/// Decode a gyroscope notification into Z-axis deg/s.
///
/// Any frame whose length is not exactly [`GYRO_FRAME_LEN`] decodes to
/// `0.0` - a truncated or concatenated multi-axis frame cannot be trusted,
/// and the zero shows up as a recoverable blip on the chart instead of a
/// fault in the stream.
pub fn decode(data: &[u8]) -> f64 {
    if data.len() != GYRO_FRAME_LEN {
        return 0.0;
    }
    match super::f32_le(data, Z_AXIS_OFFSET) {
        Some(dps) => dps as f64,
        None => 0.0,
    }
}

//! Analog input 2 payload (general-purpose alligator-clip input).
//!
//! Layout (2 bytes):
//! ```text
//! Byte 0-1: i16 LE, 10-bit ADC reading (0..=1023 in normal operation)
//! ```
//!
//! Same ADC front end as input 1, but this pin has no temperature-probe
//! wiring, so only the raw and light conversions apply. The formulas are
//! deliberately NOT shared with `analog1`: the inputs are independent
//! hardware channels and a recalibration of one must never reach through
//! shared code to the other.

use super::CalibrationMode;

/// Analog input frame size in bytes.
pub const ANALOG2_FRAME_LEN: usize = 2;

/// ADC reference voltage in millivolts.
const ADC_REFERENCE_MV: f64 = 3300.0;

/// ADC full-scale reading (10-bit converter).
const ADC_FULL_SCALE: f64 = 1023.0;

/// Lux per millivolt for the stock photocell.
const LUX_PER_MV: f64 = 0.5;

/// Decode an analog input 2 notification under the given mode.
///
/// Short buffers decode to `0.0`; trailing bytes are ignored. Modes outside
/// this input's supported set (enforced upstream by the calibration model)
/// fall back to raw passthrough, keeping the function total.
pub fn decode(data: &[u8], mode: CalibrationMode) -> f64 {
    let raw = match super::i16_le(data, 0) {
        Some(v) => v as f64,
        None => return 0.0,
    };
    match mode {
        CalibrationMode::LightIntensity => raw * ADC_REFERENCE_MV / ADC_FULL_SCALE * LUX_PER_MV,
        _ => raw,
    }
}

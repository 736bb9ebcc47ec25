//! Analog input 1 payload (3-pin header, pre-wired for temperature probes).
//!
//! Layout (2 bytes):
//! ```text
//! Byte 0-1: i16 LE, 10-bit ADC reading (0..=1023 in normal operation)
//! ```
//!
//! The conversion formula is selected by the channel's current calibration
//! mode. This input's header carries the reference voltage a TMP36-style
//! probe expects, hence the temperature modes; a photocell on the same pins
//! uses the light formula.
//!
//! Input 2 duplicates the raw and light formulas on purpose: the two inputs
//! are physically different pins whose calibration must be able to diverge
//! with a firmware revision, so no conversion code is shared between them.

use super::CalibrationMode;

/// Analog input frame size in bytes.
pub const ANALOG1_FRAME_LEN: usize = 2;

/// ADC reference voltage in millivolts.
const ADC_REFERENCE_MV: f64 = 3300.0;

/// ADC full-scale reading (10-bit converter).
const ADC_FULL_SCALE: f64 = 1023.0;

/// TMP36 output offset at 0 °C, in millivolts.
const TEMP_OFFSET_MV: f64 = 500.0;

/// Degrees Celsius per millivolt above the offset.
const CELSIUS_PER_MV: f64 = 0.1;

/// Lux per millivolt for the stock photocell.
const LUX_PER_MV: f64 = 0.5;

/// Decode an analog input 1 notification under the given mode.
///
/// Short buffers decode to `0.0`; trailing bytes are ignored. Every mode in
/// [`CalibrationMode`] is supported by this input.
pub fn decode(data: &[u8], mode: CalibrationMode) -> f64 {
    let raw = match super::i16_le(data, 0) {
        Some(v) => v as f64,
        None => return 0.0,
    };
    let millivolts = raw * ADC_REFERENCE_MV / ADC_FULL_SCALE;
    match mode {
        CalibrationMode::Raw => raw,
        CalibrationMode::TemperatureCelsius => (millivolts - TEMP_OFFSET_MV) * CELSIUS_PER_MV,
        CalibrationMode::TemperatureFahrenheit => {
            (millivolts - TEMP_OFFSET_MV) * CELSIUS_PER_MV * 9.0 / 5.0 + 32.0
        }
        CalibrationMode::LightIntensity => millivolts * LUX_PER_MV,
    }
}

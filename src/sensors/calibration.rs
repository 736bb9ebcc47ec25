//! Calibration mode model.
//!
//! Each sensor type exposes an ordered set of selectable conversion modes
//! and a type-specific default. Mode changes are explicit user actions
//! validated here before they become current; there are no automatic
//! transitions.

use super::SensorKind;
use crate::error::Error;

/// Selectable conversion formula applied to a sensor's raw reading.
///
/// `#[repr(u8)]` with a lossless `u8` round-trip so a channel can hold its
/// current mode in an atomic tag (see `channel::SensorChannel`).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationMode {
    /// Raw ADC / raw physical value, unconverted.
    Raw = 0,
    /// Temperature in degrees Celsius.
    TemperatureCelsius = 1,
    /// Temperature in degrees Fahrenheit.
    TemperatureFahrenheit = 2,
    /// Light intensity in lux.
    LightIntensity = 3,
}

impl CalibrationMode {
    /// Tag value for atomic storage.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`](Self::as_u8).
    pub const fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(CalibrationMode::Raw),
            1 => Some(CalibrationMode::TemperatureCelsius),
            2 => Some(CalibrationMode::TemperatureFahrenheit),
            3 => Some(CalibrationMode::LightIntensity),
            _ => None,
        }
    }
}

/// Ordered list of modes a sensor type supports.
///
/// Sensor types with a single implicit conversion expose a one-element list
/// containing [`CalibrationMode::Raw`].
pub fn supported_modes(kind: SensorKind) -> &'static [CalibrationMode] {
    match kind {
        SensorKind::AnalogInput1 => &[
            CalibrationMode::Raw,
            CalibrationMode::TemperatureCelsius,
            CalibrationMode::TemperatureFahrenheit,
            CalibrationMode::LightIntensity,
        ],
        SensorKind::AnalogInput2 => &[CalibrationMode::Raw, CalibrationMode::LightIntensity],
        SensorKind::CurrentProbe
        | SensorKind::GyroscopeZ
        | SensorKind::Magnetometer
        | SensorKind::ResistanceProbe => &[CalibrationMode::Raw],
    }
}

/// Mode a freshly bound channel starts in.
///
/// Input 1 is pre-wired for temperature probes, so it defaults to Celsius;
/// every other sensor type starts raw.
pub fn default_mode(kind: SensorKind) -> CalibrationMode {
    match kind {
        SensorKind::AnalogInput1 => CalibrationMode::TemperatureCelsius,
        _ => CalibrationMode::Raw,
    }
}

/// Reject a mode that is not in the sensor type's supported set.
pub fn validate(kind: SensorKind, mode: CalibrationMode) -> Result<(), Error> {
    if supported_modes(kind).contains(&mode) {
        Ok(())
    } else {
        Err(Error::UnsupportedMode { kind, mode })
    }
}

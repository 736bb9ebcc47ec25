//! Sensor types and notification payload decoding.
//!
//! One module per sensor type; each holds its own frame layout and
//! conversion constants so the probes stay independently tunable. The
//! decoders share nothing beyond the little-endian field extraction
//! primitives below.
//!
//! Every decoder is a pure function of `(payload, mode)`: no side effects,
//! no retained references, no shared state. Calls may run concurrently from
//! any number of channel tasks.

pub mod analog1;
pub mod analog2;
pub mod calibration;
pub mod current;
pub mod gyroscope;
pub mod magnetometer;
pub mod resistance;


pub use calibration::CalibrationMode;

/// The sensor types the board exposes.
///
/// Each variant owns exactly one decoder module; dispatch happens here so
/// callers never reach into the per-type modules directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorKind {
    /// Inline current probe, Amps.
    CurrentProbe,
    /// Z axis of the on-board IMU gyroscope, deg/s.
    GyroscopeZ,
    /// On-board 3-axis magnetometer, field magnitude in µT.
    Magnetometer,
    /// Two-terminal resistance probe, kΩ.
    ResistanceProbe,
    /// Analog header pre-wired for temperature probes.
    AnalogInput1,
    /// General-purpose alligator-clip analog input.
    AnalogInput2,
}

impl SensorKind {
    /// Every sensor type, in registry order.
    pub const ALL: [SensorKind; 6] = [
        SensorKind::CurrentProbe,
        SensorKind::GyroscopeZ,
        SensorKind::Magnetometer,
        SensorKind::ResistanceProbe,
        SensorKind::AnalogInput1,
        SensorKind::AnalogInput2,
    ];

    /// Decode one notification payload under the given calibration mode.
    ///
    /// Never panics and never errors: malformed payloads decode to the
    /// fallback documented by the sensor's module (`0.0`, or the open
    /// circuit sentinel for the resistance probe).
    pub fn decode(self, data: &[u8], mode: CalibrationMode) -> f64 {
        match self {
            SensorKind::CurrentProbe => current::decode(data),
            SensorKind::GyroscopeZ => gyroscope::decode(data),
            SensorKind::Magnetometer => magnetometer::decode(data),
            SensorKind::ResistanceProbe => resistance::decode(data),
            SensorKind::AnalogInput1 => analog1::decode(data, mode),
            SensorKind::AnalogInput2 => analog2::decode(data, mode),
        }
    }

    /// Notification payload length this sensor type expects.
    pub const fn expected_len(self) -> usize {
        match self {
            SensorKind::CurrentProbe => current::CURRENT_FRAME_LEN,
            SensorKind::GyroscopeZ => gyroscope::GYRO_FRAME_LEN,
            SensorKind::Magnetometer => magnetometer::MAG_FRAME_LEN,
            SensorKind::ResistanceProbe => resistance::RESISTANCE_FRAME_LEN,
            SensorKind::AnalogInput1 => analog1::ANALOG1_FRAME_LEN,
            SensorKind::AnalogInput2 => analog2::ANALOG2_FRAME_LEN,
        }
    }

    /// Ordered calibration modes this sensor type supports.
    pub fn supported_modes(self) -> &'static [CalibrationMode] {
        calibration::supported_modes(self)
    }

    /// Mode a freshly bound channel of this type starts in.
    pub fn default_mode(self) -> CalibrationMode {
        calibration::default_mode(self)
    }

    /// Display unit for a value decoded under the given mode.
    ///
    /// Raw readings are unitless (empty label).
    pub fn unit_label(self, mode: CalibrationMode) -> &'static str {
        match self {
            SensorKind::CurrentProbe => "A",
            SensorKind::GyroscopeZ => "°/s",
            SensorKind::Magnetometer => "µT",
            SensorKind::ResistanceProbe => "kΩ",
            SensorKind::AnalogInput1 | SensorKind::AnalogInput2 => match mode {
                CalibrationMode::Raw => "",
                CalibrationMode::TemperatureCelsius => "°C",
                CalibrationMode::TemperatureFahrenheit => "°F",
                CalibrationMode::LightIntensity => "lx",
            },
        }
    }
}

// Little-endian field extraction primitives shared by the decoders.

/// Read an `f32` at a fixed byte offset; `None` if the buffer is too short.
pub(crate) fn f32_le(data: &[u8], offset: usize) -> Option<f32> {
    let bytes = data.get(offset..offset + 4)?;
    Some(f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Read an `i16` at a fixed byte offset; `None` if the buffer is too short.
pub(crate) fn i16_le(data: &[u8], offset: usize) -> Option<i16> {
    let bytes = data.get(offset..offset + 2)?;
    Some(i16::from_le_bytes([bytes[0], bytes[1]]))
}

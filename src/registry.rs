//! Static sensor identity registry.
//!
//! Maps the stable, UUID-derived sensor identifier to display/help metadata
//! and to the sensor type whose decoder serves it. The table is built at
//! compile time - no I/O, no mutation - so lookups are safe from any thread
//! without synchronization, and looking an identifier up twice returns the
//! identical `&'static` reference.
//!
//! Identifiers are the measurement characteristic UUID, suffixed with
//! `_<channelIndex>` when one characteristic carries several axis channels
//! (the gyroscope Z channel is `<uuid>_2`). String keys in the metadata are
//! localization/asset keys resolved by the UI collaborator.

use crate::sensors::SensorKind;

/// "Learn more" panel content for a sensor.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LearnMore {
    pub first_paragraph_key: &'static str,
    pub second_paragraph_key: &'static str,
    pub image_ref: &'static str,
}

/// Static descriptive metadata for one sensor channel.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorInfo {
    /// Stable identifier: characteristic UUID, optionally `_<channelIndex>`.
    pub id: &'static str,
    /// Sensor type whose decoder serves this channel.
    pub kind: SensorKind,
    pub display_name_key: &'static str,
    pub icon_key: &'static str,
    pub filled_icon_key: &'static str,
    pub animating_icon_key: &'static str,
    pub help_text_key: &'static str,
    pub learn_more: LearnMore,
}

/// The full sensor table for the board.
static SENSORS: [SensorInfo; 6] = [
    SensorInfo {
        id: "555a0001-2001-467a-9538-01f0652c74e8",
        kind: SensorKind::CurrentProbe,
        display_name_key: "sensor_current_name",
        icon_key: "ic_sensor_current",
        filled_icon_key: "ic_sensor_current_filled",
        animating_icon_key: "anim_sensor_current",
        help_text_key: "sensor_current_help",
        learn_more: LearnMore {
            first_paragraph_key: "sensor_current_learn_more_first",
            second_paragraph_key: "sensor_current_learn_more_second",
            image_ref: "img_sensor_current_learn_more",
        },
    },
    SensorInfo {
        id: "555a0001-4001-467a-9538-01f0652c74e8_2",
        kind: SensorKind::GyroscopeZ,
        display_name_key: "sensor_gyroscope_z_name",
        icon_key: "ic_sensor_gyroscope",
        filled_icon_key: "ic_sensor_gyroscope_filled",
        animating_icon_key: "anim_sensor_gyroscope",
        help_text_key: "sensor_gyroscope_z_help",
        learn_more: LearnMore {
            first_paragraph_key: "sensor_gyroscope_learn_more_first",
            second_paragraph_key: "sensor_gyroscope_learn_more_second",
            image_ref: "img_sensor_gyroscope_learn_more",
        },
    },
    SensorInfo {
        id: "555a0001-5001-467a-9538-01f0652c74e8",
        kind: SensorKind::Magnetometer,
        display_name_key: "sensor_magnetometer_name",
        icon_key: "ic_sensor_magnetometer",
        filled_icon_key: "ic_sensor_magnetometer_filled",
        animating_icon_key: "anim_sensor_magnetometer",
        help_text_key: "sensor_magnetometer_help",
        learn_more: LearnMore {
            first_paragraph_key: "sensor_magnetometer_learn_more_first",
            second_paragraph_key: "sensor_magnetometer_learn_more_second",
            image_ref: "img_sensor_magnetometer_learn_more",
        },
    },
    SensorInfo {
        id: "555a0001-3001-467a-9538-01f0652c74e8",
        kind: SensorKind::ResistanceProbe,
        display_name_key: "sensor_resistance_name",
        icon_key: "ic_sensor_resistance",
        filled_icon_key: "ic_sensor_resistance_filled",
        animating_icon_key: "anim_sensor_resistance",
        help_text_key: "sensor_resistance_help",
        learn_more: LearnMore {
            first_paragraph_key: "sensor_resistance_learn_more_first",
            second_paragraph_key: "sensor_resistance_learn_more_second",
            image_ref: "img_sensor_resistance_learn_more",
        },
    },
    SensorInfo {
        id: "555a0001-6001-467a-9538-01f0652c74e8",
        kind: SensorKind::AnalogInput1,
        display_name_key: "sensor_input1_name",
        icon_key: "ic_sensor_input1",
        filled_icon_key: "ic_sensor_input1_filled",
        animating_icon_key: "anim_sensor_input1",
        help_text_key: "sensor_input1_help",
        learn_more: LearnMore {
            first_paragraph_key: "sensor_input1_learn_more_first",
            second_paragraph_key: "sensor_input1_learn_more_second",
            image_ref: "img_sensor_input1_learn_more",
        },
    },
    SensorInfo {
        id: "555a0001-6002-467a-9538-01f0652c74e8",
        kind: SensorKind::AnalogInput2,
        display_name_key: "sensor_input2_name",
        icon_key: "ic_sensor_input2",
        filled_icon_key: "ic_sensor_input2_filled",
        animating_icon_key: "anim_sensor_input2",
        help_text_key: "sensor_input2_help",
        learn_more: LearnMore {
            first_paragraph_key: "sensor_input2_learn_more_first",
            second_paragraph_key: "sensor_input2_learn_more_second",
            image_ref: "img_sensor_input2_learn_more",
        },
    },
];

/// Look up a sensor by its stable identifier.
pub fn lookup(id: &str) -> Option<&'static SensorInfo> {
    SENSORS.iter().find(|info| info.id == id)
}

/// Sensor type bound to an identifier, if any. Decoder factory input.
pub fn kind_for(id: &str) -> Option<SensorKind> {
    lookup(id).map(|info| info.kind)
}

/// Every registered sensor, in table order.
pub fn all() -> &'static [SensorInfo] {
    &SENSORS
}

//! Integration tests for probelink: notification-to-value flows through the
//! channel bank, the way the connection/settings/chart collaborators drive it.

use probelink::{registry, CalibrationMode, ChannelBank, Error, SensorKind};

const CURRENT_ID: &str = "555a0001-2001-467a-9538-01f0652c74e8";
const GYRO_Z_ID: &str = "555a0001-4001-467a-9538-01f0652c74e8_2";
const MAG_ID: &str = "555a0001-5001-467a-9538-01f0652c74e8";
const RESISTANCE_ID: &str = "555a0001-3001-467a-9538-01f0652c74e8";
const INPUT1_ID: &str = "555a0001-6001-467a-9538-01f0652c74e8";
const INPUT2_ID: &str = "555a0001-6002-467a-9538-01f0652c74e8";

fn bank_with(ids: &[&str]) -> ChannelBank {
    let mut bank = ChannelBank::new();
    for id in ids {
        bank.attach(id).expect("registered sensor should attach");
    }
    bank
}

fn triple(x: f32, y: f32, z: f32) -> [u8; 12] {
    let mut frame = [0u8; 12];
    frame[0..4].copy_from_slice(&x.to_le_bytes());
    frame[4..8].copy_from_slice(&y.to_le_bytes());
    frame[8..12].copy_from_slice(&z.to_le_bytes());
    frame
}

#[test]
fn current_notification_to_value() {
    let bank = bank_with(&[CURRENT_ID]);
    assert_eq!(bank.decode(CURRENT_ID, &1.5f32.to_le_bytes()), 1.5);
    assert_eq!(bank.unit_label(CURRENT_ID), "A");
}

#[test]
fn gyroscope_channel_reads_z_axis() {
    let bank = bank_with(&[GYRO_Z_ID]);
    assert_eq!(bank.decode(GYRO_Z_ID, &triple(10.0, 20.0, -30.5)), -30.5);
    assert_eq!(bank.unit_label(GYRO_Z_ID), "°/s");
}

#[test]
fn magnetometer_channel_charts_field_strength() {
    let bank = bank_with(&[MAG_ID]);
    assert_eq!(bank.decode(MAG_ID, &triple(3.0, 4.0, 0.0)), 500.0);
    assert_eq!(bank.unit_label(MAG_ID), "µT");
}

#[test]
fn open_resistance_probe_reads_as_sentinel() {
    let bank = bank_with(&[RESISTANCE_ID]);
    let open = f32::INFINITY.to_le_bytes();
    assert_eq!(bank.decode(RESISTANCE_ID, &open), 1000.0);
    assert_eq!(bank.unit_label(RESISTANCE_ID), "kΩ");
}

#[test]
fn input1_defaults_to_celsius_and_switches_units() {
    let bank = bank_with(&[INPUT1_ID]);
    let channel = bank.channel(INPUT1_ID).unwrap();
    assert_eq!(channel.mode(), CalibrationMode::TemperatureCelsius);
    assert_eq!(bank.unit_label(INPUT1_ID), "°C");

    let frame = 0i16.to_le_bytes();
    assert_eq!(bank.decode(INPUT1_ID, &frame), -50.0);

    bank.set_mode(INPUT1_ID, CalibrationMode::TemperatureFahrenheit)
        .unwrap();
    assert_eq!(bank.decode(INPUT1_ID, &frame), -58.0);
    assert_eq!(bank.unit_label(INPUT1_ID), "°F");

    bank.set_mode(INPUT1_ID, CalibrationMode::LightIntensity).unwrap();
    assert_eq!(bank.decode(INPUT1_ID, &1023i16.to_le_bytes()), 1650.0);
    assert_eq!(bank.unit_label(INPUT1_ID), "lx");
}

#[test]
fn input2_defaults_to_raw_and_rejects_temperature() {
    let bank = bank_with(&[INPUT2_ID]);
    let channel = bank.channel(INPUT2_ID).unwrap();
    assert_eq!(channel.mode(), CalibrationMode::Raw);
    assert_eq!(bank.unit_label(INPUT2_ID), "");

    let err = bank
        .set_mode(INPUT2_ID, CalibrationMode::TemperatureCelsius)
        .unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedMode {
            kind: SensorKind::AnalogInput2,
            mode: CalibrationMode::TemperatureCelsius,
        }
    );
    // Rejection leaves the mode untouched.
    assert_eq!(channel.mode(), CalibrationMode::Raw);
    assert_eq!(bank.decode(INPUT2_ID, &512i16.to_le_bytes()), 512.0);
}

#[test]
fn corrupt_notification_does_not_stall_the_stream() {
    let bank = bank_with(&[GYRO_Z_ID]);
    // Truncated frame mid-stream decodes to a visible zero...
    assert_eq!(bank.decode(GYRO_Z_ID, &[0xDE, 0xAD]), 0.0);
    // ...and the next good frame decodes normally.
    assert_eq!(bank.decode(GYRO_Z_ID, &triple(0.0, 0.0, 7.25)), 7.25);
}

#[test]
fn unknown_channel_decodes_to_zero_but_set_mode_errors() {
    let bank = bank_with(&[CURRENT_ID]);
    assert_eq!(bank.decode("not-a-sensor", &[0u8; 4]), 0.0);
    assert_eq!(
        bank.set_mode("not-a-sensor", CalibrationMode::Raw),
        Err(Error::UnknownSensor)
    );
    assert_eq!(bank.unit_label("not-a-sensor"), "");
}

#[test]
fn attach_is_idempotent_and_preserves_mode() {
    let mut bank = bank_with(&[INPUT1_ID]);
    bank.set_mode(INPUT1_ID, CalibrationMode::LightIntensity).unwrap();

    // Re-subscription after a reconnect re-attaches the same identifier.
    bank.attach(INPUT1_ID).unwrap();
    assert_eq!(bank.len(), 1);
    assert_eq!(
        bank.channel(INPUT1_ID).unwrap().mode(),
        CalibrationMode::LightIntensity
    );
}

#[test]
fn attach_rejects_unknown_identifiers() {
    let mut bank = ChannelBank::new();
    assert_eq!(bank.attach("555a0001-beef-467a-9538-01f0652c74e8"), Err(Error::UnknownSensor));
    assert!(bank.is_empty());
}

#[test]
fn whole_board_attaches_within_capacity() {
    let mut bank = ChannelBank::new();
    for info in registry::all() {
        bank.attach(info.id).unwrap();
    }
    assert_eq!(bank.len(), registry::all().len());

    // Registry metadata round-trips through the live channel.
    for info in registry::all() {
        let channel = bank.channel(info.id).unwrap();
        assert!(core::ptr::eq(channel.info(), info));
        assert_eq!(channel.mode(), info.kind.default_mode());
    }
}

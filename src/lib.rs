//! probelink - BLE sensor telemetry decoding.
//!
//! Turns raw BLE characteristic notification payloads from the science-probe
//! board into calibrated, unit-labeled physical measurements. The crate owns
//! nothing else: connection establishment, characteristic discovery, and all
//! UI belong to the collaborators that feed
//! [`ChannelBank::decode`](channel::ChannelBank::decode) and display the
//! returned values.
//!
//! The decoding core is pure `no_std` logic; `std` is only pulled in for
//! host-based tests (`cargo test`).

#![cfg_attr(not(test), no_std)]

pub mod channel;
pub mod config;
pub mod error;
pub mod registry;
pub mod sensors;

pub use channel::{ChannelBank, SensorChannel};
pub use error::Error;
pub use registry::{LearnMore, SensorInfo};
pub use sensors::{CalibrationMode, SensorKind};

//! Live sensor channels and the channel bank.
//!
//! A [`SensorChannel`] binds a registry identity to its decoder and to the
//! only piece of mutable state in the crate: the current calibration mode.
//! The mode lives in a per-channel `AtomicU8` tag - mode changes are rare
//! user actions while decode reads happen at sensor sample rate, so an
//! atomic per channel beats any shared lock and keeps channels independent.
//!
//! The [`ChannelBank`] is the surface handed to the collaborators: the
//! connection layer routes `(channel id, payload)` notification events into
//! [`ChannelBank::decode`], the settings UI calls
//! [`ChannelBank::set_mode`], and the chart layer reads
//! [`ChannelBank::unit_label`].

use core::sync::atomic::{AtomicU8, Ordering};

use heapless::Vec;

use crate::config::MAX_CHANNELS;
use crate::error::Error;
use crate::registry::{self, SensorInfo};
use crate::sensors::{calibration, CalibrationMode};

/// One live sensor channel: identity + current mode + decoder binding.
pub struct SensorChannel {
    info: &'static SensorInfo,
    /// Current mode as a `CalibrationMode` tag. Relaxed ordering is enough:
    /// the mode is a single independent value with no data published
    /// alongside it.
    mode: AtomicU8,
}

impl SensorChannel {
    /// Bind a channel to a registered sensor identifier.
    ///
    /// The channel starts in the sensor type's default mode. Returns `None`
    /// for an identifier the registry does not know.
    pub fn bind(id: &str) -> Option<Self> {
        let info = registry::lookup(id)?;
        Some(Self {
            info,
            mode: AtomicU8::new(info.kind.default_mode().as_u8()),
        })
    }

    /// Registry metadata for this channel.
    pub fn info(&self) -> &'static SensorInfo {
        self.info
    }

    /// Current calibration mode.
    pub fn mode(&self) -> CalibrationMode {
        // Only valid tags are ever stored, but stay total anyway.
        CalibrationMode::from_u8(self.mode.load(Ordering::Relaxed))
            .unwrap_or_else(|| self.info.kind.default_mode())
    }

    /// Select a new calibration mode.
    ///
    /// Rejected with [`Error::UnsupportedMode`] when the mode is not in this
    /// sensor type's supported set; the current mode is left unchanged.
    pub fn set_mode(&self, mode: CalibrationMode) -> Result<(), Error> {
        calibration::validate(self.info.kind, mode)?;
        self.mode.store(mode.as_u8(), Ordering::Relaxed);
        Ok(())
    }

    /// Decode one notification payload under the current mode.
    pub fn decode(&self, data: &[u8]) -> f64 {
        self.info.kind.decode(data, self.mode())
    }

    /// Display unit for values decoded under the current mode.
    pub fn unit_label(&self) -> &'static str {
        self.info.kind.unit_label(self.mode())
    }
}

/// Fixed-capacity set of live channels, keyed by sensor identifier.
#[derive(Default)]
pub struct ChannelBank {
    channels: Vec<SensorChannel, MAX_CHANNELS>,
}

impl ChannelBank {
    /// Create an empty bank.
    pub const fn new() -> Self {
        Self {
            channels: Vec::new(),
        }
    }

    /// Attach a channel for a registered sensor identifier.
    ///
    /// Attaching an already attached identifier is a no-op (the existing
    /// channel, and its selected mode, survive a re-subscription).
    pub fn attach(&mut self, id: &str) -> Result<(), Error> {
        if self.channel(id).is_some() {
            return Ok(());
        }
        let channel = SensorChannel::bind(id).ok_or(Error::UnknownSensor)?;
        self.channels.push(channel).map_err(|_| Error::BankFull)
    }

    /// The live channel for an identifier, if attached.
    pub fn channel(&self, id: &str) -> Option<&SensorChannel> {
        self.channels.iter().find(|c| c.info().id == id)
    }

    /// Route one notification payload to its channel's decoder.
    ///
    /// An unknown or detached identifier decodes to `0.0`: a stray
    /// notification must not fault the stream, same as a malformed payload.
    pub fn decode(&self, id: &str, data: &[u8]) -> f64 {
        match self.channel(id) {
            Some(channel) => channel.decode(data),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("notification for unattached channel {}", id);
                0.0
            }
        }
    }

    /// Select a calibration mode on an attached channel.
    pub fn set_mode(&self, id: &str, mode: CalibrationMode) -> Result<(), Error> {
        self.channel(id)
            .ok_or(Error::UnknownSensor)?
            .set_mode(mode)
    }

    /// Display unit for an attached channel (empty for unknown identifiers
    /// and raw readings).
    pub fn unit_label(&self, id: &str) -> &'static str {
        self.channel(id).map_or("", SensorChannel::unit_label)
    }

    /// Number of attached channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// `true` when no channel is attached.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

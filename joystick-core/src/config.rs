//! Build-time configuration: joystick ranges, dead-zone and radio link.
//!
//! Nothing here is reconfigurable at runtime. Firmware picks one of the
//! constants (or defines its own) and validates it in `const` context, so a
//! bad combination fails the build rather than the device.

use crate::mapping::Axis;

/// Debounce window for the enable switch, in milliseconds.
pub const DEBOUNCE_WINDOW_MS: u32 = 10;

/// Joystick sampling and speed mapping configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickConfig {
    /// Largest value the sampler returns.
    pub raw_max: u16,
    /// Lower end of the normalized range.
    pub min_speed: i32,
    /// Upper end of the normalized range, and the largest speed magnitude.
    pub max_speed: i32,
    /// Dead-zone half-width around the midpoint.
    pub guard_band: i32,
    /// Per-axis sign inversion, indexed by [`Axis::index`].
    pub invert: [bool; Axis::COUNT],
}

/// Configuration for a 12-bit ADC (RP2040) with speeds in `[0, 1000]`.
pub const DEFAULT_JOYSTICK: JoystickConfig = JoystickConfig {
    raw_max: 4095,
    min_speed: 0,
    max_speed: 1000,
    guard_band: 30,
    invert: [false; Axis::COUNT],
};

/// Error type for rejected configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `raw_max` is zero.
    EmptyRawRange,
    /// `max_speed` is not above `min_speed`.
    EmptySpeedRange,
    /// Guard band is negative.
    NegativeGuardBand,
    /// Dead-zone touches or exceeds either end of the speed range.
    GuardBandTooWide,
}

/// Dead-zone bounds derived from a [`JoystickConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    /// At or below this, the axis moves in the negative direction.
    pub lower: i32,
    /// At or above this, the axis moves in the positive direction.
    pub upper: i32,
}

impl JoystickConfig {
    /// Midpoint of the speed range.
    #[inline]
    #[must_use]
    pub const fn midpoint(&self) -> i32 {
        (self.min_speed + self.max_speed) / 2
    }

    /// Check that every mapper branch has a non-empty domain.
    pub const fn validate(&self) -> Result<Thresholds, ConfigError> {
        if self.raw_max == 0 {
            return Err(ConfigError::EmptyRawRange);
        }
        if self.max_speed <= self.min_speed {
            return Err(ConfigError::EmptySpeedRange);
        }
        if self.guard_band < 0 {
            return Err(ConfigError::NegativeGuardBand);
        }

        let thresholds = Thresholds {
            lower: self.midpoint() - self.guard_band,
            upper: self.midpoint() + self.guard_band,
        };
        if thresholds.lower <= self.min_speed || thresholds.upper >= self.max_speed {
            return Err(ConfigError::GuardBandTooWide);
        }
        Ok(thresholds)
    }
}

/// Transmit power tier of the radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

/// Over-the-air data rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    Kbps250,
    Mbps1,
    Mbps2,
}

/// One-way radio link configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Destination pipe address, shared with the receiver.
    pub address: [u8; 5],
    pub power: PowerLevel,
    /// RF channel, 0..=125.
    pub channel: u8,
    pub data_rate: DataRate,
    /// Static payload width; shorter records are zero-padded.
    pub payload_width: u8,
    /// Hardware auto-retransmit count, 0..=15.
    pub retransmit_count: u8,
    /// Hardware auto-retransmit delay in 250 µs steps above 250 µs, 0..=15.
    pub retransmit_delay: u8,
}

/// Link settings compatible with a receiver using the RF24 library defaults.
pub const DEFAULT_LINK: LinkConfig = LinkConfig {
    address: [0; 5],
    power: PowerLevel::Low,
    channel: 76,
    data_rate: DataRate::Mbps1,
    payload_width: 32,
    retransmit_count: 15,
    retransmit_delay: 5,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = DEFAULT_JOYSTICK.validate().unwrap();
        assert_eq!(DEFAULT_JOYSTICK.midpoint(), 500);
        assert_eq!(t, Thresholds { lower: 470, upper: 530 });
    }

    #[test]
    fn test_rejects_empty_ranges() {
        let cfg = JoystickConfig {
            raw_max: 0,
            ..DEFAULT_JOYSTICK
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyRawRange));

        let cfg = JoystickConfig {
            max_speed: 0,
            ..DEFAULT_JOYSTICK
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptySpeedRange));
    }

    #[test]
    fn test_rejects_bad_guard_band() {
        let cfg = JoystickConfig {
            guard_band: -1,
            ..DEFAULT_JOYSTICK
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NegativeGuardBand));

        let cfg = JoystickConfig {
            guard_band: 500,
            ..DEFAULT_JOYSTICK
        };
        assert_eq!(cfg.validate(), Err(ConfigError::GuardBandTooWide));
    }

    #[test]
    fn test_zero_guard_band_is_allowed() {
        let cfg = JoystickConfig {
            guard_band: 0,
            ..DEFAULT_JOYSTICK
        };
        assert_eq!(cfg.validate(), Ok(Thresholds { lower: 500, upper: 500 }));
    }
}

//! Raw joystick sample to directional speed command.
//!
//! Each axis is normalized to the speed range, then split three ways around
//! the midpoint: below the dead-zone it commands a negative speed, above it a
//! positive one, and inside it nothing at all.
//!
//! The two outer branches rescale with their source range written from the
//! dead-zone edge outwards (`lower -> min` and `max -> upper`). That reversal
//! makes the magnitude grow as the stick moves away from center, and the
//! exact integer rounding of [`map_range`] is part of the observable curve.

use crate::config::{ConfigError, JoystickConfig, Thresholds};
use joystick_proto::AxisCommand;

/// Joystick axis, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Number of axes.
    pub const COUNT: usize = 3;

    /// All axes in wire order.
    pub const ALL: [Axis; Self::COUNT] = [Axis::X, Axis::Y, Axis::Z];

    /// Position in wire order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Linearly rescale `x` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Integer arithmetic with division truncating toward zero. Either range may
/// be given high-to-low. `in_min` must differ from `in_max`.
#[inline]
#[must_use]
pub const fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    let num = (x as i64 - in_min as i64) * (out_max as i64 - out_min as i64);
    let den = in_max as i64 - in_min as i64;
    (num / den + out_min as i64) as i32
}

/// One axis worth of mapping results for the current cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisReading {
    /// Sample as returned by the sampler, clamped to `raw_max`.
    pub raw: u16,
    /// Sample normalized to `[min_speed, max_speed]`.
    pub mapped: i32,
    /// Final signed speed command.
    pub speed: i32,
    /// Outside the dead-zone.
    pub active: bool,
}

impl AxisReading {
    /// The `(active, speed)` pair carried on the wire.
    #[inline]
    #[must_use]
    pub const fn command(&self) -> AxisCommand {
        AxisCommand {
            active: self.active,
            speed: self.speed,
        }
    }
}

/// Dead-zone speed mapper shared by all three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMapper {
    config: JoystickConfig,
    thresholds: Thresholds,
}

impl AxisMapper {
    /// Create a mapper, deriving the dead-zone bounds once.
    pub const fn new(config: JoystickConfig) -> Result<Self, ConfigError> {
        match config.validate() {
            Ok(thresholds) => Ok(Self { config, thresholds }),
            Err(e) => Err(e),
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &JoystickConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Normalize a raw sample to the speed range.
    ///
    /// Samples above `raw_max` are clamped first.
    #[inline]
    #[must_use]
    pub fn normalize(&self, raw: u16) -> i32 {
        let cfg = &self.config;
        let raw = raw.min(cfg.raw_max);
        map_range(
            i32::from(raw),
            0,
            i32::from(cfg.raw_max),
            cfg.min_speed,
            cfg.max_speed,
        )
    }

    /// Map one raw sample to its speed command.
    #[must_use]
    pub fn map(&self, axis: Axis, raw: u16) -> AxisReading {
        let cfg = &self.config;
        let Thresholds { lower, upper } = self.thresholds;
        let raw = raw.min(cfg.raw_max);
        let mapped = self.normalize(raw);

        let (speed, active) = if mapped <= lower {
            (-map_range(mapped, lower, cfg.min_speed, cfg.min_speed, cfg.max_speed), true)
        } else if mapped >= upper {
            (map_range(mapped, cfg.max_speed, upper, cfg.max_speed, cfg.min_speed), true)
        } else {
            (0, false)
        };

        let speed = if cfg.invert[axis.index()] { -speed } else { speed };

        AxisReading {
            raw,
            mapped,
            speed,
            active,
        }
    }

    /// Map a full set of samples, one per axis in wire order.
    #[must_use]
    pub fn map_all(&self, raw: [u16; Axis::COUNT]) -> [AxisReading; Axis::COUNT] {
        Axis::ALL.map(|axis| self.map(axis, raw[axis.index()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_JOYSTICK;

    /// raw_max == max_speed so that `mapped == raw`.
    const UNIT: JoystickConfig = JoystickConfig {
        raw_max: 1000,
        ..DEFAULT_JOYSTICK
    };

    fn mapper(config: JoystickConfig) -> AxisMapper {
        AxisMapper::new(config).unwrap()
    }

    #[test]
    fn test_map_range_truncates_toward_zero() {
        assert_eq!(map_range(511, 0, 1023, 0, 1000), 499);
        assert_eq!(map_range(512, 0, 1023, 0, 1000), 500);
        assert_eq!(map_range(1, 470, 0, 0, 1000), 997);
        // negative quotient: (999 - 1000) * -1000 / -470 = -2.12 -> -2
        assert_eq!(map_range(999, 1000, 530, 1000, 0), 998);
    }

    #[test]
    fn test_map_range_reversed_ranges() {
        assert_eq!(map_range(470, 470, 0, 0, 1000), 0);
        assert_eq!(map_range(0, 470, 0, 0, 1000), 1000);
        assert_eq!(map_range(530, 1000, 530, 1000, 0), 0);
        assert_eq!(map_range(1000, 1000, 530, 1000, 0), 1000);
    }

    #[test]
    fn test_normalize_identity_on_unit_config() {
        let m = mapper(UNIT);
        assert_eq!(m.normalize(0), 0);
        assert_eq!(m.normalize(470), 470);
        assert_eq!(m.normalize(1000), 1000);
    }

    #[test]
    fn test_dead_zone_is_still() {
        let m = mapper(UNIT);
        for raw in 471..530 {
            let r = m.map(Axis::X, raw);
            assert!(!r.active, "raw {raw}");
            assert_eq!(r.speed, 0, "raw {raw}");
        }
    }

    #[test]
    fn test_branch_boundaries() {
        let m = mapper(UNIT);

        let at_lower = m.map(Axis::X, 470);
        assert!(at_lower.active);
        assert_eq!(at_lower.speed, 0);

        let above_lower = m.map(Axis::X, 471);
        assert!(!above_lower.active);

        let below_upper = m.map(Axis::X, 529);
        assert!(!below_upper.active);

        let at_upper = m.map(Axis::X, 530);
        assert!(at_upper.active);
        assert_eq!(at_upper.speed, 0);
    }

    #[test]
    fn test_full_deflection_reaches_max_speed() {
        let m = mapper(UNIT);
        assert_eq!(m.map(Axis::X, 0).speed, -1000);
        assert_eq!(m.map(Axis::X, 1000).speed, 1000);
    }

    #[test]
    fn test_negative_branch_strictly_decreasing() {
        let m = mapper(UNIT);
        let mut prev = m.map(Axis::Y, 470).speed;
        for raw in (0..470).rev() {
            let r = m.map(Axis::Y, raw);
            assert!(r.active);
            assert!(r.speed <= 0);
            assert!(r.speed < prev, "raw {raw}: {} !< {prev}", r.speed);
            prev = r.speed;
        }
    }

    #[test]
    fn test_positive_branch_strictly_increasing() {
        let m = mapper(UNIT);
        let mut prev = m.map(Axis::Z, 530).speed;
        for raw in 531..=1000 {
            let r = m.map(Axis::Z, raw);
            assert!(r.active);
            assert!(r.speed >= 0);
            assert!(r.speed > prev, "raw {raw}: {} !> {prev}", r.speed);
            prev = r.speed;
        }
    }

    #[test]
    fn test_inactive_implies_zero_speed_over_full_range() {
        let m = mapper(DEFAULT_JOYSTICK);
        for raw in 0..=DEFAULT_JOYSTICK.raw_max {
            let r = m.map(Axis::X, raw);
            assert!(r.command().is_consistent(), "raw {raw}");
            assert!(r.speed.abs() <= DEFAULT_JOYSTICK.max_speed);
        }
    }

    #[test]
    fn test_default_config_scenarios() {
        let m = mapper(DEFAULT_JOYSTICK);

        let mid = m.map(Axis::X, 2048);
        assert_eq!(mid.mapped, 500);
        assert_eq!(mid.command(), AxisCommand::STILL);

        let low = m.map(Axis::X, 0);
        assert_eq!(low.mapped, 0);
        assert_eq!(low.command(), AxisCommand::moving(-1000));

        let high = m.map(Axis::Y, 4095);
        assert_eq!(high.mapped, 1000);
        assert_eq!(high.command(), AxisCommand::moving(1000));
    }

    #[test]
    fn test_ten_bit_sampler() {
        let m = mapper(JoystickConfig {
            raw_max: 1023,
            ..DEFAULT_JOYSTICK
        });
        assert_eq!(m.map(Axis::X, 512).command(), AxisCommand::STILL);
        assert_eq!(m.map(Axis::X, 0).speed, -1000);
        assert_eq!(m.map(Axis::X, 1023).speed, 1000);
    }

    #[test]
    fn test_raw_above_range_is_clamped() {
        let m = mapper(UNIT);
        let r = m.map(Axis::X, u16::MAX);
        assert_eq!(r.raw, 1000);
        assert_eq!(r.mapped, 1000);
        assert_eq!(r.speed, 1000);
        assert!(r.active);
    }

    #[test]
    fn test_out_of_range_sample_reads_like_full_scale() {
        let m = mapper(UNIT);
        for raw in [1001, 4095, u16::MAX] {
            assert_eq!(m.map(Axis::Y, raw), m.map(Axis::Y, 1000), "raw {raw}");
        }
    }

    #[test]
    fn test_invert_flips_sign_only() {
        let m = mapper(JoystickConfig {
            invert: [false, true, false],
            ..UNIT
        });
        assert_eq!(m.map(Axis::X, 0).speed, -1000);
        assert_eq!(m.map(Axis::Y, 0).speed, 1000);
        assert!(m.map(Axis::Y, 0).active);
        assert_eq!(m.map(Axis::Y, 500).command(), AxisCommand::STILL);
    }

    #[test]
    fn test_map_all_follows_wire_order() {
        let m = mapper(UNIT);
        let [x, y, z] = m.map_all([0, 500, 1000]);
        assert_eq!(x.speed, -1000);
        assert!(!y.active);
        assert_eq!(z.speed, 1000);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let bad = JoystickConfig {
            guard_band: 600,
            ..DEFAULT_JOYSTICK
        };
        assert_eq!(AxisMapper::new(bad), Err(ConfigError::GuardBandTooWide));
    }
}

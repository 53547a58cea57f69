//! Input collaborator traits and the pin-backed debounced switch.

use crate::debounce::Debouncer;
use crate::mapping::Axis;
use embedded_hal::digital::InputPin;

/// Source of raw joystick samples.
///
/// Sampling is polled once per axis per cycle and must return promptly.
/// Values are expected in `[0, raw_max]` of the active
/// [`JoystickConfig`](crate::config::JoystickConfig); larger values are
/// clamped by the mapper.
pub trait AnalogSampler {
    fn sample(&mut self, axis: Axis) -> u16;
}

/// Debounced momentary switch.
pub trait SwitchInput {
    /// Poll the switch. Must be called exactly once per cycle.
    fn update(&mut self);

    /// True for exactly one cycle after a debounced high-to-low transition.
    fn fell(&self) -> bool;
}

/// Wrapping millisecond clock used for debouncing.
pub trait Millis {
    fn now_ms(&self) -> u32;
}

/// [`SwitchInput`] over an active-low GPIO with a [`Debouncer`].
///
/// A failed pin read is treated as "level unchanged".
pub struct DebouncedSwitch<P, C> {
    pin: P,
    clock: C,
    debouncer: Debouncer,
}

impl<P: InputPin, C: Millis> DebouncedSwitch<P, C> {
    /// Create a switch, taking the current pin level as the settled state.
    pub fn new(mut pin: P, clock: C, window_ms: u32) -> Self {
        let level = pin.is_high().unwrap_or(true);
        let debouncer = Debouncer::new(level, window_ms, clock.now_ms());
        Self {
            pin,
            clock,
            debouncer,
        }
    }

    /// Debounced level of the pin.
    #[inline]
    #[must_use]
    pub fn is_high(&self) -> bool {
        self.debouncer.is_high()
    }

    /// Decompose into the pin and clock.
    pub fn into_parts(self) -> (P, C) {
        (self.pin, self.clock)
    }
}

impl<P: InputPin, C: Millis> SwitchInput for DebouncedSwitch<P, C> {
    fn update(&mut self) {
        let level = self.pin.is_high().unwrap_or(self.debouncer.is_high());
        self.debouncer.update(level, self.clock.now_ms());
    }

    fn fell(&self) -> bool {
        self.debouncer.fell()
    }
}

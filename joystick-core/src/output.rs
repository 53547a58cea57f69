//! Output collaborator traits and error types.

use embedded_hal::digital::OutputPin;

/// Error type for link transmissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Bus or pin I/O error talking to the transceiver.
    Io,
    /// No receiver acknowledged the frame within the retransmit budget.
    NoAck,
    /// The transceiver never reported completion.
    Timeout,
    /// Record larger than the link's payload width.
    TooLarge,
}

/// One-way wireless link.
///
/// Fire-and-forget: the caller never retries, a failed frame is simply
/// superseded by the next cycle's frame.
pub trait LinkTransmitter {
    /// Transmit one record.
    fn send(&mut self, bytes: &[u8]) -> Result<(), LinkError>;
}

/// Binary status indicator (typically an LED).
pub trait Indicator {
    fn set_level(&mut self, on: bool);
}

/// [`Indicator`] on an active-high GPIO.
///
/// Pin errors are dropped; the level is re-asserted on the next cycle anyway.
pub struct PinIndicator<P> {
    pin: P,
}

impl<P: OutputPin> PinIndicator<P> {
    #[must_use]
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Indicator for PinIndicator<P> {
    fn set_level(&mut self, on: bool) {
        let _ = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use std::vec::Vec;

    #[derive(Default)]
    struct RecordingPin(Vec<bool>);

    impl ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl OutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.push(true);
            Ok(())
        }
    }

    #[test]
    fn test_pin_indicator_drives_every_call() {
        let mut led = PinIndicator::new(RecordingPin::default());
        led.set_level(true);
        led.set_level(true);
        led.set_level(false);
        assert_eq!(led.into_inner().0, [true, true, false]);
    }
}

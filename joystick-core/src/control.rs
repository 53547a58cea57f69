//! ControlLoop: samples the joystick and switch, and transmits one packet per cycle.

use crate::input::{AnalogSampler, SwitchInput};
use crate::latch::{EnableLatch, EnableState};
use crate::mapping::{Axis, AxisMapper, AxisReading};
use crate::output::{Indicator, LinkError, LinkTransmitter};
use crate::packet::build_packet;
use joystick_proto::Packet;

/// Result of one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cycle {
    /// The record handed to the link.
    pub packet: Packet,
    /// The enable latch flipped during this cycle.
    pub toggled: bool,
    /// Outcome of the transmission. Informational only.
    pub link: Result<(), LinkError>,
}

/// Owns every collaborator and all state carried between cycles.
///
/// Each [`tick`](Self::tick) runs switch update, latch, indicator, axis
/// mapping, packet build and transmit in that order, without delays. Link
/// failures are reported in the returned [`Cycle`] and otherwise ignored;
/// the next cycle sends the current state again.
pub struct ControlLoop<S, W, I, L> {
    sampler: S,
    switch: W,
    indicator: I,
    link: L,
    mapper: AxisMapper,
    latch: EnableLatch,
    readings: [AxisReading; Axis::COUNT],
}

impl<S, W, I, L> ControlLoop<S, W, I, L>
where
    S: AnalogSampler,
    W: SwitchInput,
    I: Indicator,
    L: LinkTransmitter,
{
    /// Create a control loop with the latch disabled.
    pub fn new(sampler: S, switch: W, indicator: I, link: L, mapper: AxisMapper) -> Self {
        Self {
            sampler,
            switch,
            indicator,
            link,
            mapper,
            latch: EnableLatch::new(),
            readings: [AxisReading::default(); Axis::COUNT],
        }
    }

    /// Run the loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            let _ = self.tick();
        }
    }

    /// Run a single cycle.
    pub fn tick(&mut self) -> Cycle {
        self.switch.update();
        let toggled = self.latch.update(self.switch.fell());
        self.indicator.set_level(self.latch.is_enabled());

        for axis in Axis::ALL {
            let raw = self.sampler.sample(axis);
            self.readings[axis.index()] = self.mapper.map(axis, raw);
        }

        let packet = build_packet(&self.readings, self.latch.state());
        let link = self.link.send(&packet.encode());

        Cycle {
            packet,
            toggled,
            link,
        }
    }

    /// Current enable state.
    #[inline]
    pub fn enable_state(&self) -> EnableState {
        self.latch.state()
    }

    /// Axis readings from the most recent cycle.
    #[inline]
    pub fn readings(&self) -> &[AxisReading; Axis::COUNT] {
        &self.readings
    }

    #[inline]
    pub fn mapper(&self) -> &AxisMapper {
        &self.mapper
    }

    /// Get a reference to the link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Get a mutable reference to the link.
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Decompose into sampler, switch, indicator and link.
    pub fn into_parts(self) -> (S, W, I, L) {
        (self.sampler, self.switch, self.indicator, self.link)
    }
}

//! Platform-agnostic joystick transmitter core.
//!
//! This crate holds everything between the raw peripheral reads and the
//! bytes handed to the radio, with no dependency on a particular chip. It
//! builds for `no_std` targets and runs its tests on the host.
//!
//! # Overview
//!
//! - [`config`]: Build-time constants ([`JoystickConfig`], [`LinkConfig`])
//! - [`mapping`]: Dead-zone speed mapping ([`AxisMapper`], [`map_range`])
//! - [`debounce`]: Time-window switch filter ([`Debouncer`])
//! - [`latch`]: Enable toggle state machine ([`EnableLatch`])
//! - [`packet`]: Wire record assembly ([`build_packet`])
//! - [`input`]: Sampler and switch traits ([`AnalogSampler`], [`SwitchInput`])
//! - [`output`]: Indicator and link traits ([`Indicator`], [`LinkTransmitter`])
//! - [`control`]: One-cycle orchestration ([`ControlLoop`])
//! - [`radio`]: Transmit-only nRF24L01 driver ([`Nrf24`])
//!
//! # Cycle
//!
//! Each [`ControlLoop::tick`] polls the switch, updates the enable latch and
//! indicator, maps all three axes, builds a [`Packet`] and sends it. There is
//! no delay between cycles and no retry of failed sends; the next cycle
//! carries the current state anyway.
//!
//! # Example
//!
//! ```rust
//! use joystick_core::{Axis, AxisMapper, DEFAULT_JOYSTICK};
//!
//! let mapper = AxisMapper::new(DEFAULT_JOYSTICK).unwrap();
//!
//! // Centered stick stays inside the dead-zone
//! let reading = mapper.map(Axis::X, 2048);
//! assert!(!reading.active);
//! assert_eq!(reading.speed, 0);
//!
//! // Full deflection towards zero commands full reverse speed
//! assert_eq!(mapper.map(Axis::X, 0).speed, -1000);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod control;
pub mod debounce;
pub mod input;
pub mod latch;
pub mod mapping;
pub mod output;
pub mod packet;
pub mod radio;

// Re-export main types at crate root
pub use config::{
    ConfigError, DataRate, JoystickConfig, LinkConfig, PowerLevel, Thresholds, DEBOUNCE_WINDOW_MS,
    DEFAULT_JOYSTICK, DEFAULT_LINK,
};
pub use control::{ControlLoop, Cycle};
pub use debounce::Debouncer;
pub use input::{AnalogSampler, DebouncedSwitch, Millis, SwitchInput};
pub use joystick_proto::{AxisCommand, Packet};
pub use latch::{EnableLatch, EnableState};
pub use mapping::{map_range, Axis, AxisMapper, AxisReading};
pub use output::{Indicator, LinkError, LinkTransmitter, PinIndicator};
pub use packet::build_packet;
pub use radio::{Nrf24, RadioError};

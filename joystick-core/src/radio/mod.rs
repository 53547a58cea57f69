//! Radio transceiver drivers.

mod nrf24;
pub mod registers;

pub use nrf24::{Nrf24, RadioError};

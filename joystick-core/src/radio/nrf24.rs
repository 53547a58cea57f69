//! Transmit-only nRF24L01(+) driver over `embedded-hal` 1.0.
//!
//! The chip is configured as a primary transmitter with hardware auto-ack
//! and auto-retransmit left on, static payload width, and pipe 0 opened only
//! so the chip can receive the acknowledgements for its own frames.

use super::registers::{
    Commands, ConfigReg, Registers, RfSetup, Status, ADDRESS_WIDTH_5, EN_AA_ALL, FIFO_WIDTH,
};
use crate::config::{DataRate, LinkConfig, PowerLevel};
use crate::output::{LinkError, LinkTransmitter};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

/// Power-on reset and standby settling time.
const SETTLE_MS: u32 = 5;
/// Minimum CE high pulse to start a transmission.
const CE_PULSE_US: u32 = 15;
const POLL_INTERVAL_US: u32 = 10;
/// Upper bound on waiting for TX_DS / MAX_RT, roughly 95 ms.
const POLL_LIMIT: u32 = 9_500;

/// Error type for the radio driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError<SpiE, PinE> {
    /// SPI bus error.
    Spi(SpiE),
    /// CE pin error.
    Pin(PinE),
    /// Register read-back did not match; no chip on the bus.
    NotDetected,
    /// Payload width, channel or retransmit setting out of range.
    InvalidConfig,
    /// Record larger than the configured payload width.
    TooLarge,
    /// Retransmit budget exhausted without an acknowledgement.
    NoAck,
    /// Neither TX_DS nor MAX_RT was raised in time.
    Timeout,
}

impl<SpiE, PinE> From<RadioError<SpiE, PinE>> for LinkError {
    fn from(err: RadioError<SpiE, PinE>) -> Self {
        match err {
            RadioError::Spi(_) | RadioError::Pin(_) => LinkError::Io,
            RadioError::NotDetected | RadioError::InvalidConfig => LinkError::Io,
            RadioError::TooLarge => LinkError::TooLarge,
            RadioError::NoAck => LinkError::NoAck,
            RadioError::Timeout => LinkError::Timeout,
        }
    }
}

type RadioResult<T, SPI, CE> = Result<
    T,
    RadioError<
        <SPI as embedded_hal::spi::ErrorType>::Error,
        <CE as embedded_hal::digital::ErrorType>::Error,
    >,
>;

/// nRF24L01 in primary-transmitter mode.
pub struct Nrf24<SPI, CE, D> {
    spi: SPI,
    ce: CE,
    delay: D,
    config: LinkConfig,
}

impl<SPI, CE, D> Nrf24<SPI, CE, D>
where
    SPI: SpiDevice,
    CE: OutputPin,
    D: DelayNs,
{
    /// Wrap the bus, CE pin and delay. Call [`init`](Self::init) before sending.
    pub fn new(spi: SPI, ce: CE, delay: D, config: LinkConfig) -> Self {
        Self {
            spi,
            ce,
            delay,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Bring the chip up as a transmitter on the configured address.
    pub fn init(&mut self) -> RadioResult<(), SPI, CE> {
        let cfg = self.config;
        if cfg.payload_width == 0
            || usize::from(cfg.payload_width) > FIFO_WIDTH
            || cfg.channel > 125
            || cfg.retransmit_count > 15
            || cfg.retransmit_delay > 15
        {
            return Err(RadioError::InvalidConfig);
        }

        self.ce.set_low().map_err(RadioError::Pin)?;
        self.delay.delay_ms(SETTLE_MS);

        self.write_register(Registers::CONFIG, ConfigReg::EN_CRC | ConfigReg::CRCO)?;

        let retr = (cfg.retransmit_delay << 4) | cfg.retransmit_count;
        self.write_register(Registers::SETUP_RETR, retr)?;
        if self.read_register(Registers::SETUP_RETR)? != retr {
            return Err(RadioError::NotDetected);
        }

        self.write_register(Registers::RF_SETUP, rf_setup(cfg.power, cfg.data_rate))?;
        self.write_register(Registers::FEATURE, 0)?;
        self.write_register(Registers::DYNPD, 0)?;
        self.write_register(Registers::EN_AA, EN_AA_ALL)?;
        self.write_register(Registers::SETUP_AW, ADDRESS_WIDTH_5)?;
        self.write_register(Registers::RF_CH, cfg.channel)?;
        self.write_register(Registers::STATUS, Status::IRQ_MASK)?;
        self.command(Commands::FLUSH_RX)?;
        self.command(Commands::FLUSH_TX)?;

        // Pipe 0 listens on the destination address for acknowledgements.
        self.write_register_bytes(Registers::RX_ADDR_P0, &cfg.address)?;
        self.write_register_bytes(Registers::TX_ADDR, &cfg.address)?;
        self.write_register(Registers::RX_PW_P0, cfg.payload_width)?;
        self.write_register(Registers::EN_RXADDR, 0x01)?;

        self.write_register(
            Registers::CONFIG,
            ConfigReg::EN_CRC | ConfigReg::CRCO | ConfigReg::PWR_UP,
        )?;
        self.delay.delay_ms(SETTLE_MS);

        Ok(())
    }

    /// Send one frame, zero-padded to the payload width, and wait for the
    /// hardware to finish with it.
    pub fn transmit(&mut self, bytes: &[u8]) -> RadioResult<(), SPI, CE> {
        let width = usize::from(self.config.payload_width);
        if width > FIFO_WIDTH {
            return Err(RadioError::InvalidConfig);
        }
        if bytes.len() > width {
            return Err(RadioError::TooLarge);
        }

        let mut frame = [0u8; FIFO_WIDTH + 1];
        frame[0] = Commands::W_TX_PAYLOAD;
        frame[1..=bytes.len()].copy_from_slice(bytes);
        self.spi
            .transfer_in_place(&mut frame[..=width])
            .map_err(RadioError::Spi)?;

        self.ce.set_high().map_err(RadioError::Pin)?;
        self.delay.delay_us(CE_PULSE_US);

        let mut status = 0;
        let mut polls = 0;
        while status & (Status::TX_DS | Status::MAX_RT) == 0 && polls < POLL_LIMIT {
            status = self.command(Commands::NOP)?;
            if status & (Status::TX_DS | Status::MAX_RT) == 0 {
                self.delay.delay_us(POLL_INTERVAL_US);
            }
            polls += 1;
        }

        self.ce.set_low().map_err(RadioError::Pin)?;
        self.write_register(Registers::STATUS, Status::IRQ_MASK)?;

        if status & Status::TX_DS != 0 {
            Ok(())
        } else {
            // A failed frame stays in the FIFO until flushed.
            self.command(Commands::FLUSH_TX)?;
            if status & Status::MAX_RT != 0 {
                Err(RadioError::NoAck)
            } else {
                Err(RadioError::Timeout)
            }
        }
    }

    /// Release the bus, CE pin and delay.
    pub fn release(self) -> (SPI, CE, D) {
        (self.spi, self.ce, self.delay)
    }

    /// Single-byte command. Returns STATUS.
    fn command(&mut self, cmd: u8) -> RadioResult<u8, SPI, CE> {
        let mut buf = [cmd];
        self.spi.transfer_in_place(&mut buf).map_err(RadioError::Spi)?;
        Ok(buf[0])
    }

    fn read_register(&mut self, reg: u8) -> RadioResult<u8, SPI, CE> {
        let mut buf = [Commands::R_REGISTER | (reg & Commands::REGISTER_MASK), Commands::NOP];
        self.spi.transfer_in_place(&mut buf).map_err(RadioError::Spi)?;
        Ok(buf[1])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> RadioResult<(), SPI, CE> {
        self.write_register_bytes(reg, &[value])
    }

    fn write_register_bytes(&mut self, reg: u8, value: &[u8]) -> RadioResult<(), SPI, CE> {
        let mut buf = [0u8; 6];
        buf[0] = Commands::W_REGISTER | (reg & Commands::REGISTER_MASK);
        buf[1..=value.len()].copy_from_slice(value);
        self.spi
            .transfer_in_place(&mut buf[..=value.len()])
            .map_err(RadioError::Spi)
    }
}

impl<SPI, CE, D> LinkTransmitter for Nrf24<SPI, CE, D>
where
    SPI: SpiDevice,
    CE: OutputPin,
    D: DelayNs,
{
    fn send(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        self.transmit(bytes).map_err(LinkError::from)
    }
}

/// RF_SETUP value for a power tier and data rate.
const fn rf_setup(power: PowerLevel, rate: DataRate) -> u8 {
    let pwr = match power {
        PowerLevel::Min => 0,
        PowerLevel::Low => 1,
        PowerLevel::High => 2,
        PowerLevel::Max => 3,
    };
    let dr = match rate {
        DataRate::Kbps250 => RfSetup::RF_DR_LOW,
        DataRate::Mbps1 => 0,
        DataRate::Mbps2 => RfSetup::RF_DR_HIGH,
    };
    (pwr << RfSetup::RF_PWR_SHIFT) | dr | RfSetup::LNA_HCURR
}

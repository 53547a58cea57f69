//! nRF24L01(+) command set and register map.

pub struct Commands;
impl Commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
    /// Register address bits of R_REGISTER / W_REGISTER.
    pub const REGISTER_MASK: u8 = 0x1F;
}

pub struct Registers;
impl Registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;
}

/// CONFIG bits.
pub struct ConfigReg;
impl ConfigReg {
    pub const PRIM_RX: u8 = 1 << 0;
    pub const PWR_UP: u8 = 1 << 1;
    /// 2-byte CRC.
    pub const CRCO: u8 = 1 << 2;
    pub const EN_CRC: u8 = 1 << 3;
}

/// STATUS bits. Interrupt flags are cleared by writing 1.
pub struct Status;
impl Status {
    pub const MAX_RT: u8 = 1 << 4;
    pub const TX_DS: u8 = 1 << 5;
    pub const RX_DR: u8 = 1 << 6;
    pub const IRQ_MASK: u8 = Self::MAX_RT | Self::TX_DS | Self::RX_DR;
}

/// RF_SETUP bits.
pub struct RfSetup;
impl RfSetup {
    /// Low-noise amplifier gain (nRF24L01 only, ignored by the + variant).
    pub const LNA_HCURR: u8 = 1 << 0;
    pub const RF_PWR_SHIFT: u8 = 1;
    pub const RF_DR_HIGH: u8 = 1 << 3;
    pub const RF_DR_LOW: u8 = 1 << 5;
}

/// SETUP_AW value for 5-byte addresses.
pub const ADDRESS_WIDTH_5: u8 = 0x03;

/// All six pipes auto-acknowledged (power-on default).
pub const EN_AA_ALL: u8 = 0x3F;

/// Hardware FIFO width.
pub const FIFO_WIDTH: usize = 32;

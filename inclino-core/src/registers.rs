//! ADXL345 register map
//!
//! Addresses and bit positions follow the Analog Devices datasheet
//! (Rev. G, table 19). All registers are a single byte wide.

/// Default I2C address (ALT ADDRESS pin low)
pub const PRIMARY_ADDRESS: u8 = 0x53;

/// Alternate I2C address (ALT ADDRESS pin high)
pub const SECONDARY_ADDRESS: u8 = 0x1D;

/// Fixed value of the DEVID register
pub const DEVICE_ID: u8 = 0xE5;

/// Register addresses
pub mod reg {
    /// Device ID (read only)
    pub const DEVID: u8 = 0x00;
    /// Tap threshold
    pub const THRESH_TAP: u8 = 0x1D;
    /// X-axis offset
    pub const OFSX: u8 = 0x1E;
    /// Y-axis offset
    pub const OFSY: u8 = 0x1F;
    /// Z-axis offset
    pub const OFSZ: u8 = 0x20;
    /// Tap duration
    pub const DUR: u8 = 0x21;
    /// Tap latency
    pub const LATENT: u8 = 0x22;
    /// Tap window
    pub const WINDOW: u8 = 0x23;
    /// Activity threshold
    pub const THRESH_ACT: u8 = 0x24;
    /// Inactivity threshold
    pub const THRESH_INACT: u8 = 0x25;
    /// Inactivity time
    pub const TIME_INACT: u8 = 0x26;
    /// Axis enable control for activity and inactivity detection
    pub const ACT_INACT_CTL: u8 = 0x27;
    /// Free-fall threshold
    pub const THRESH_FF: u8 = 0x28;
    /// Free-fall time
    pub const TIME_FF: u8 = 0x29;
    /// Axis control for single/double tap
    pub const TAP_AXES: u8 = 0x2A;
    /// Source of single/double tap (read only)
    pub const ACT_TAP_STATUS: u8 = 0x2B;
    /// Data rate and power mode control
    pub const BW_RATE: u8 = 0x2C;
    /// Power-saving features control
    pub const POWER_CTL: u8 = 0x2D;
    /// Interrupt enable control
    pub const INT_ENABLE: u8 = 0x2E;
    /// Interrupt mapping control
    pub const INT_MAP: u8 = 0x2F;
    /// Source of interrupts (read only, clears on read)
    pub const INT_SOURCE: u8 = 0x30;
    /// Data format control
    pub const DATA_FORMAT: u8 = 0x31;
    /// X-axis data 0
    pub const DATAX0: u8 = 0x32;
    pub const DATAX1: u8 = 0x33;
    pub const DATAY0: u8 = 0x34;
    pub const DATAY1: u8 = 0x35;
    pub const DATAZ0: u8 = 0x36;
    pub const DATAZ1: u8 = 0x37;
    /// FIFO control
    pub const FIFO_CTL: u8 = 0x38;
    /// FIFO status (read only)
    pub const FIFO_STATUS: u8 = 0x39;
}

/// BW_RATE bits
pub mod bw_rate {
    /// Rate code, bits 0-3
    pub const RATE_MASK: u8 = 0x0F;
    /// Reduced power operation
    pub const LOW_POWER: u8 = 4;
}

/// POWER_CTL bits
pub mod power_ctl {
    /// Wake-up frequency in sleep mode, bits 0-1
    pub const WAKEUP_MASK: u8 = 0x03;
    pub const SLEEP: u8 = 2;
    pub const MEASURE: u8 = 3;
    pub const AUTO_SLEEP: u8 = 4;
    pub const LINK: u8 = 5;
}

/// DATA_FORMAT bits
pub mod data_format {
    /// Range code, bits 0-1
    pub const RANGE_MASK: u8 = 0x03;
    pub const JUSTIFY: u8 = 2;
    pub const FULL_RES: u8 = 3;
    pub const INT_INVERT: u8 = 5;
    pub const SPI: u8 = 6;
    pub const SELF_TEST: u8 = 7;
}

/// ACT_TAP_STATUS bits
pub mod act_tap_status {
    pub const TAP_Z: u8 = 0;
    pub const TAP_Y: u8 = 1;
    pub const TAP_X: u8 = 2;
    pub const ASLEEP: u8 = 3;
    pub const ACT_Z: u8 = 4;
    pub const ACT_Y: u8 = 5;
    pub const ACT_X: u8 = 6;
}

/// TAP_AXES bits
pub mod tap_axes {
    /// Tap axis enables, bits 0-2
    pub const AXES_MASK: u8 = 0x07;
    pub const SUPPRESS: u8 = 3;
}

/// ACT_INACT_CTL nibbles
pub mod act_inact_ctl {
    /// Activity (AC/DC + axes) nibble
    pub const ACT_MASK: u8 = 0xF0;
    /// Inactivity (AC/DC + axes) nibble
    pub const INACT_MASK: u8 = 0x0F;
    /// Activity axis enables
    pub const ACT_AXES_MASK: u8 = 0x70;
}

/// FIFO_CTL and FIFO_STATUS fields
pub mod fifo {
    /// Samples field, bits 0-4
    pub const SAMPLES_MASK: u8 = 0x1F;
    /// Trigger routed to INT2 when set
    pub const TRIGGER: u8 = 5;
    /// Mode field shift, bits 6-7
    pub const MODE_SHIFT: u8 = 6;
    pub const MODE_MASK: u8 = 0xC0;
    /// FIFO_STATUS entries, bits 0-5
    pub const ENTRIES_MASK: u8 = 0x3F;
    /// FIFO_STATUS trigger event flag
    pub const FIFO_TRIG: u8 = 7;
    /// Depth of the on-chip FIFO
    pub const DEPTH: usize = 32;
}

/// SPI address byte flags
pub mod spi {
    /// Read transaction
    pub const READ: u8 = 0x80;
    /// Multi-byte transaction
    pub const MULTI_BYTE: u8 = 0x40;
}

/// First register of the 6-byte sample block
pub const DATA_START: u8 = reg::DATAX0;

/// Length of the sample block in bytes
pub const DATA_LEN: usize = 6;

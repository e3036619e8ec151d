//! Register transport trait

/// Byte-wide register access over some bus
///
/// Implementations exist for I2C and 4-wire SPI. A multi-byte read must
/// be one bus transaction: the sensor only guarantees a coherent x/y/z
/// triple while the burst is in progress.
pub trait RegisterInterface {
    /// Bus error type, surfaced to the caller unchanged
    type Error;

    /// Write one byte to a register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Read `buf.len()` consecutive registers starting at `reg`
    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Read a single register
    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.read_registers(reg, &mut buf)?;
        Ok(buf[0])
    }

    /// Read-modify-write: clear `mask`, then OR in `bits & mask`
    ///
    /// Bits outside `mask` are written back as read.
    fn modify_register(&mut self, reg: u8, mask: u8, bits: u8) -> Result<(), Self::Error> {
        let current = self.read_register(reg)?;
        self.write_register(reg, (current & !mask) | (bits & mask))
    }

    /// Set or clear a single bit
    fn write_bit(&mut self, reg: u8, bit: u8, set: bool) -> Result<(), Self::Error> {
        let mask = 1 << bit;
        self.modify_register(reg, mask, if set { mask } else { 0 })
    }
}

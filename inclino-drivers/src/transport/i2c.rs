//! I2C register transport
//!
//! Writes are `[reg, value]`; reads write the register pointer and
//! continue with a repeated start, so a 6-byte data read is one bus
//! transaction. The device auto-increments the pointer.

use inclino_core::traits::RegisterInterface;
use inclino_hal::I2cBus;

/// ADXL345 on an I2C bus
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// `address` is 0x53 or 0x1D depending on the ALT ADDRESS pin
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2cBus> RegisterInterface for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[reg, value])
    }

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[reg], buf)
    }
}

//! Adapters from `embedded-hal` 1.0 peripherals
//!
//! Wrap a board HAL peripheral to hand it to the driver:
//!
//! ```ignore
//! let bus = inclino_hal::EhI2c(i2c0);
//! ```

use crate::{I2cBus, OutputPin, SpiBus};

/// Wraps an [`embedded_hal::i2c::I2c`] implementation
#[derive(Debug)]
pub struct EhI2c<T>(pub T);

impl<T: embedded_hal::i2c::I2c> I2cBus for EhI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.0.write_read(address, write_data, read_buf)
    }
}

/// Wraps an [`embedded_hal::spi::SpiBus`] implementation
///
/// The bus is flushed after every call so that chip select is never
/// released while bytes are still being shifted.
#[derive(Debug)]
pub struct EhSpi<T>(pub T);

impl<T: embedded_hal::spi::SpiBus> SpiBus for EhSpi<T> {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(data)?;
        self.0.flush()
    }

    fn transfer_in_place(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        self.0.transfer_in_place(data)?;
        self.0.flush()
    }
}

/// Wraps an [`embedded_hal::digital::OutputPin`] implementation
#[derive(Debug)]
pub struct EhPin<T>(pub T);

impl<T: embedded_hal::digital::OutputPin> OutputPin for EhPin<T> {
    type Error = T::Error;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_high()
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_low()
    }
}

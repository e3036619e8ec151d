//! 4-wire SPI register transport
//!
//! Every access is framed by one chip select assertion. The address
//! byte carries R/W in bit 7 and multi-byte in bit 6; the device only
//! auto-increments when bit 6 is set.

use inclino_core::registers::spi;
use inclino_core::traits::RegisterInterface;
use inclino_hal::spi::{Mode, SpiConfig};
use inclino_hal::{OutputPin, SpiBus};

/// Bus settings the ADXL345 needs: mode 3, at most 5 MHz
pub const SPI_CONFIG: SpiConfig = SpiConfig::from_mode(5_000_000, Mode::Mode3);

/// Register address bits, bits 0-5
const ADDRESS_MASK: u8 = 0x3F;

/// SPI transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError<S, P> {
    /// Transfer failed
    Spi(S),
    /// Chip select could not be driven
    ChipSelect(P),
}

/// ADXL345 on a 4-wire SPI bus with a dedicated chip select
#[derive(Debug)]
pub struct SpiInterface<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiInterface<SPI, CS> {
    /// `cs` should idle high
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Give back the bus and chip select pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> SpiInterface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Run `f` with chip select asserted
    ///
    /// CS is released even when the transfer fails; a transfer error
    /// takes precedence over a release error.
    fn framed<R>(
        &mut self,
        f: impl FnOnce(&mut SPI) -> Result<R, SPI::Error>,
    ) -> Result<R, SpiError<SPI::Error, CS::Error>> {
        self.cs.set_low().map_err(SpiError::ChipSelect)?;
        let result = f(&mut self.spi);
        let released = self.cs.set_high();
        let value = result.map_err(SpiError::Spi)?;
        released.map_err(SpiError::ChipSelect)?;
        Ok(value)
    }
}

impl<SPI, CS> RegisterInterface for SpiInterface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = SpiError<SPI::Error, CS::Error>;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.framed(|spi| spi.write(&[reg & ADDRESS_MASK, value]))
    }

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        let mut address = (reg & ADDRESS_MASK) | spi::READ;
        if buf.len() > 1 {
            address |= spi::MULTI_BYTE;
        }
        buf.fill(0);
        self.framed(|spi| {
            spi.write(&[address])?;
            spi.transfer_in_place(buf)
        })
    }
}

//! Register transports
//!
//! Both implement [`RegisterInterface`](inclino_core::traits::RegisterInterface)
//! so the driver never knows which bus it sits on.

pub mod i2c;
pub mod spi;

pub use i2c::I2cInterface;
pub use spi::{SpiError, SpiInterface, SPI_CONFIG};

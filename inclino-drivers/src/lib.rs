//! ADXL345 driver
//!
//! Ties the pure logic in `inclino-core` to a bus from `inclino-hal`:
//!
//! - Register transports (I2C, 4-wire SPI)
//! - The [`Adxl345`] driver: init sequence, readings, configuration
//!
//! ```ignore
//! use inclino_drivers::Adxl345;
//! use inclino_hal::EhI2c;
//!
//! let mut accel = Adxl345::new_i2c(EhI2c(i2c), inclino_core::registers::PRIMARY_ADDRESS);
//! accel.init()?;
//! let g = accel.g_values()?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod accel;
pub mod transport;

pub use accel::{Adxl345, Error};
pub use transport::{I2cInterface, SpiError, SpiInterface, SPI_CONFIG};

//! Inclino Hardware Abstraction Layer
//!
//! This crate defines the bus traits the accelerometer driver talks
//! through. Boards either implement them directly or wrap an
//! `embedded-hal` 1.0 peripheral in one of the adapters from [`adapter`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  inclino-drivers (Adxl345 + transports) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  inclino-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal 1.0 / board HAL           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Chip select line
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`spi::SpiBus`] - SPI bus operations

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adapter;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use adapter::{EhI2c, EhPin, EhSpi};
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use spi::SpiBus;

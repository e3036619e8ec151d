//! Board-agnostic core logic for the ADXL345 accelerometer
//!
//! Everything in here is pure: no bus access, no driver state.
//!
//! - Register map and bit positions
//! - Configuration enums and their register encodings
//! - Physical-unit to register-count encoders
//! - Raw sample to g / angle / orientation conversion
//! - The register transport trait implemented by the driver crate

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod measurement;
pub mod registers;
pub mod traits;

//! Hardware abstraction traits
//!
//! These traits define the interface between the register-level driver
//! and the bus-specific transports.

pub mod register;

pub use register::RegisterInterface;

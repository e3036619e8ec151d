//! ADXL345 accelerometer
//!
//! The driver is split by concern; all parts are `impl` blocks on the
//! same [`Adxl345`] type:
//!
//! - [`adxl345`] - construction, init, range/rate/power, readings
//! - [`detection`] - interrupts, activity/tap/free-fall, FIFO

pub mod adxl345;
pub mod detection;

#[cfg(test)]
mod mock;

pub use adxl345::Adxl345;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus transaction failed; never retried
    Bus(E),
    /// FULL_RES did not read back as written during init
    ///
    /// Points at wiring or a dead device rather than a configuration
    /// mistake. The calibration state is not usable.
    Verification,
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Bus(e)
    }
}

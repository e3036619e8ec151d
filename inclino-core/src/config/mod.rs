//! Configuration types and their register encodings
//!
//! Every enum here maps onto a register bitfield through an explicit
//! `bits()` / `from_bits()` pair; nothing relies on the discriminant
//! happening to line up with the hardware layout.

pub mod detection;
pub mod fifo;
pub mod interrupt;
pub mod power;
pub mod range;
pub mod rate;
pub mod sensor;

pub use detection::{
    ActTapStatus, ActivityConfig, AxisSet, Coupling, DoubleTapConfig, FreeFallConfig,
    InactivityConfig, TapConfig,
};
pub use fifo::{FifoConfig, FifoMode, FifoStatus};
pub use interrupt::{Interrupt, InterruptPin, InterruptPolarity, InterruptSource};
pub use power::WakeUpFrequency;
pub use range::{DeviceConfig, Range, Resolution};
pub use rate::DataRate;
pub use sensor::SensorConfig;

/// Acceleration threshold step (THRESH_TAP, THRESH_ACT, THRESH_INACT, THRESH_FF)
pub const THRESHOLD_G_PER_LSB: f32 = 0.0625;

/// Free-fall time step (TIME_FF)
pub const FREE_FALL_MS_PER_LSB: f32 = 5.0;

/// Tap duration step (DUR)
pub const TAP_DURATION_MS_PER_LSB: f32 = 0.625;

/// Tap latency and window step (LATENT, WINDOW)
pub const TAP_GAP_MS_PER_LSB: f32 = 1.25;

/// Convert a physical quantity to a register count
///
/// Rounds to the nearest count. Negative and NaN inputs give 0, values
/// above the register range give 255 (float-to-int casts saturate).
pub fn encode_step(value: f32, step: f32) -> u8 {
    libm::roundf(value / step) as u8
}

/// Like [`encode_step`], but never returns 0
///
/// A zero threshold would leave the comparator permanently tripped (or
/// the feature silently off), so the smallest encodable count is 1.
pub fn encode_step_nonzero(value: f32, step: f32) -> u8 {
    encode_step(value, step).max(1)
}

//! Whole-sensor configuration applied in one call

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{DataRate, Range, Resolution};

/// Basic measurement settings
///
/// ```
/// use inclino_core::config::{DataRate, Range, SensorConfig};
///
/// let config = SensorConfig {
///     range: Range::G8,
///     rate: DataRate::Hz400,
///     ..Default::default()
/// };
/// assert!(!config.low_power);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    pub resolution: Resolution,
    pub range: Range,
    pub rate: DataRate,
    /// Reduced power operation, at the cost of more noise
    pub low_power: bool,
}

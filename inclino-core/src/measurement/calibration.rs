//! Per-axis calibration held in driver memory

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Axes, UNITS_PER_G};

/// Offset and gain correction per axis
///
/// Offsets are stored in full-resolution counts and divided by the
/// current range factor before use, so a range change does not require
/// recalibration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calibration {
    /// Zero-g offset in full-resolution counts
    pub offset: Axes<f32>,
    /// Gain correction (1.0 = nominal)
    pub factor: Axes<f32>,
}

impl Default for Calibration {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Calibration {
    /// No correction
    pub const IDENTITY: Self = Self {
        offset: Axes::new(0.0, 0.0, 0.0),
        factor: Axes::new(1.0, 1.0, 1.0),
    };

    /// Derive offsets and gains from the raw extremes seen with each axis
    /// pointing straight down and straight up
    ///
    /// `min` and `max` are raw full-resolution readings. An axis whose
    /// min and max coincide keeps a unit gain instead of dividing by zero.
    pub fn from_extremes(min: Axes<f32>, max: Axes<f32>) -> Self {
        let factor = min.zip_with(max, |lo, hi| {
            let half_span = 0.5 * (hi - lo);
            if half_span == 0.0 {
                1.0
            } else {
                UNITS_PER_G / half_span
            }
        });
        let offset = min.zip_with(max, |lo, hi| (hi + lo) * 0.5);
        Self { offset, factor }
    }
}

/// Angle baseline captured while the sensor sits in its reference pose
pub type AngleOffsets = Axes<f32>;

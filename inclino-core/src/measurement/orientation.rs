//! Which face of the sensor points up

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Angles;

/// Tilt beyond which an axis is considered to dominate (degrees)
pub const DOMINANCE_THRESHOLD_DEG: f32 = 45.0;

/// Coarse orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Lying flat, z up
    ZUp,
    /// Lying flat, upside down
    ZDown,
    YUp,
    YDown,
    XUp,
    XDown,
}

impl Orientation {
    /// Classify per-axis angles
    ///
    /// The x axis is checked first: once |x| reaches 45° its sign alone
    /// decides, whatever y says. Otherwise y is checked the same way, and
    /// when neither dominates the sign of z picks between flat and
    /// upside down (z = 0 counts as down).
    pub fn from_angles(angles: Angles) -> Self {
        if libm::fabsf(angles.x) < DOMINANCE_THRESHOLD_DEG {
            if libm::fabsf(angles.y) < DOMINANCE_THRESHOLD_DEG {
                if angles.z > 0.0 {
                    Self::ZUp
                } else {
                    Self::ZDown
                }
            } else if angles.y > 0.0 {
                Self::YUp
            } else {
                Self::YDown
            }
        } else if angles.x > 0.0 {
            Self::XUp
        } else {
            Self::XDown
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ZUp => "z up",
            Self::ZDown => "z down",
            Self::YUp => "y up",
            Self::YDown => "y down",
            Self::XUp => "x up",
            Self::XDown => "x down",
        }
    }
}

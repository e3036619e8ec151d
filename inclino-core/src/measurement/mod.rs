//! Sample conversion pipeline
//!
//! ```text
//! raw i16 ──► offset corrected ──► g ──► angle (deg) ──► relative angle
//!                                  │
//!                                  └──► pitch / roll
//! ```
//!
//! Each stage is a pure function of the previous stage plus the
//! calibration data; only the raw read touches the bus.

pub mod calibration;
pub mod convert;
pub mod orientation;

pub use calibration::{AngleOffsets, Calibration};
pub use convert::{angles, corrected_raw, g_values, pitch, relative_angles, roll};
pub use orientation::Orientation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One value per axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Axes<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Axes<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Apply `f` to every axis
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Axes<U> {
        Axes {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Combine two per-axis values
    pub fn zip_with<U, V>(self, other: Axes<U>, mut f: impl FnMut(T, U) -> V) -> Axes<V> {
        Axes {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
            z: f(self.z, other.z),
        }
    }
}

impl<T: Copy> Axes<T> {
    pub const fn splat(value: T) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }
}

/// Raw ADC counts straight from DATAX0..DATAZ1
pub type RawSample = Axes<i16>;

impl RawSample {
    /// Decode the 6-byte data block
    ///
    /// Each axis is a little-endian pair: x = b1:b0, y = b3:b2, z = b5:b4.
    pub const fn from_le_bytes(buf: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([buf[0], buf[1]]),
            y: i16::from_le_bytes([buf[2], buf[3]]),
            z: i16::from_le_bytes([buf[4], buf[5]]),
        }
    }
}

/// Acceleration in g
pub type GValues = Axes<f32>;

/// Tilt per axis in degrees
pub type Angles = Axes<f32>;

/// Nominal full-resolution sensitivity
pub const MILLI_G_PER_LSB: f32 = 3.9;

/// LSB counts per g at full resolution (1000 / 3.9)
pub const UNITS_PER_G: f32 = 256.41;

/// Radians to degrees as used for the per-axis angles
pub const DEGREES_PER_RADIAN: f32 = 57.296;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_le_bytes_byte_order() {
        let raw = RawSample::from_le_bytes([0x01, 0x02, 0xFF, 0xFF, 0x00, 0x80]);
        assert_eq!(raw.x, 0x0201);
        assert_eq!(raw.y, -1);
        assert_eq!(raw.z, i16::MIN);
    }

    #[test]
    fn test_map_and_zip() {
        let a = Axes::new(1, 2, 3);
        let b = Axes::splat(10);
        assert_eq!(a.map(|v| v * 2), Axes::new(2, 4, 6));
        assert_eq!(a.zip_with(b, |l, r| l + r), Axes::new(11, 12, 13));
    }
}

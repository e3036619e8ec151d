//! Measurement range and resolution (DATA_FORMAT bits 0-1 and 3)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Measurement range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Range {
    #[default]
    G2,
    G4,
    G8,
    G16,
}

impl Range {
    /// Range code written to DATA_FORMAT
    pub const fn bits(self) -> u8 {
        match self {
            Self::G2 => 0b00,
            Self::G4 => 0b01,
            Self::G8 => 0b10,
            Self::G16 => 0b11,
        }
    }

    /// Decode the range field of a DATA_FORMAT value
    pub const fn from_bits(data_format: u8) -> Self {
        match data_format & 0b11 {
            0b00 => Self::G2,
            0b01 => Self::G4,
            0b10 => Self::G8,
            _ => Self::G16,
        }
    }

    /// Scale of one LSB in fixed 10-bit mode, relative to ±2 g
    pub const fn fixed_resolution_factor(self) -> f32 {
        match self {
            Self::G2 => 1.0,
            Self::G4 => 2.0,
            Self::G8 => 4.0,
            Self::G16 => 8.0,
        }
    }

    /// Human readable label, e.g. `"16g"`
    pub const fn label(self) -> &'static str {
        match self {
            Self::G2 => "2g",
            Self::G4 => "4g",
            Self::G8 => "8g",
            Self::G16 => "16g",
        }
    }
}

/// Output resolution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Resolution {
    /// Output width grows with range, 3.9 mg/LSB everywhere
    #[default]
    Full,
    /// 10-bit output, mg/LSB grows with range
    Fixed10Bit,
}

/// Range and resolution as last written to the device
///
/// The range factor is derived on every call rather than cached, so it
/// cannot go stale when either field changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    pub resolution: Resolution,
    pub range: Range,
}

impl DeviceConfig {
    pub const fn new(resolution: Resolution, range: Range) -> Self {
        Self { resolution, range }
    }

    /// Multiplier from LSB counts to the 3.9 mg base step
    pub const fn range_factor(&self) -> f32 {
        match self.resolution {
            Resolution::Full => 1.0,
            Resolution::Fixed10Bit => self.range.fixed_resolution_factor(),
        }
    }
}

//! Output data rate (BW_RATE bits 0-3)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataRate {
    Hz3200,
    Hz1600,
    Hz800,
    Hz400,
    Hz200,
    #[default]
    Hz100,
    Hz50,
    Hz25,
    Hz12_5,
    Hz6_25,
    Hz3_13,
    Hz1_56,
    Hz0_78,
    Hz0_39,
    Hz0_20,
    Hz0_10,
}

impl DataRate {
    /// Rate code written to BW_RATE
    pub const fn bits(self) -> u8 {
        match self {
            Self::Hz3200 => 0b1111,
            Self::Hz1600 => 0b1110,
            Self::Hz800 => 0b1101,
            Self::Hz400 => 0b1100,
            Self::Hz200 => 0b1011,
            Self::Hz100 => 0b1010,
            Self::Hz50 => 0b1001,
            Self::Hz25 => 0b1000,
            Self::Hz12_5 => 0b0111,
            Self::Hz6_25 => 0b0110,
            Self::Hz3_13 => 0b0101,
            Self::Hz1_56 => 0b0100,
            Self::Hz0_78 => 0b0011,
            Self::Hz0_39 => 0b0010,
            Self::Hz0_20 => 0b0001,
            Self::Hz0_10 => 0b0000,
        }
    }

    /// Decode the rate field of a BW_RATE value (upper bits ignored)
    pub const fn from_bits(bw_rate: u8) -> Self {
        match bw_rate & 0x0F {
            0b1111 => Self::Hz3200,
            0b1110 => Self::Hz1600,
            0b1101 => Self::Hz800,
            0b1100 => Self::Hz400,
            0b1011 => Self::Hz200,
            0b1010 => Self::Hz100,
            0b1001 => Self::Hz50,
            0b1000 => Self::Hz25,
            0b0111 => Self::Hz12_5,
            0b0110 => Self::Hz6_25,
            0b0101 => Self::Hz3_13,
            0b0100 => Self::Hz1_56,
            0b0011 => Self::Hz0_78,
            0b0010 => Self::Hz0_39,
            0b0001 => Self::Hz0_20,
            _ => Self::Hz0_10,
        }
    }

    /// Human readable label, e.g. `"12.5 Hz"`
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hz3200 => "3200 Hz",
            Self::Hz1600 => "1600 Hz",
            Self::Hz800 => "800 Hz",
            Self::Hz400 => "400 Hz",
            Self::Hz200 => "200 Hz",
            Self::Hz100 => "100 Hz",
            Self::Hz50 => "50 Hz",
            Self::Hz25 => "25 Hz",
            Self::Hz12_5 => "12.5 Hz",
            Self::Hz6_25 => "6.25 Hz",
            Self::Hz3_13 => "3.13 Hz",
            Self::Hz1_56 => "1.56 Hz",
            Self::Hz0_78 => "0.78 Hz",
            Self::Hz0_39 => "0.39 Hz",
            Self::Hz0_20 => "0.20 Hz",
            Self::Hz0_10 => "0.10 Hz",
        }
    }
}

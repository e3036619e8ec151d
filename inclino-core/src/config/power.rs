//! Sleep-mode wake-up frequency (POWER_CTL bits 0-1)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sampling frequency while asleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WakeUpFrequency {
    #[default]
    Hz8,
    Hz4,
    Hz2,
    Hz1,
}

impl WakeUpFrequency {
    pub const fn bits(self) -> u8 {
        match self {
            Self::Hz8 => 0b00,
            Self::Hz4 => 0b01,
            Self::Hz2 => 0b10,
            Self::Hz1 => 0b11,
        }
    }

    pub const fn from_bits(power_ctl: u8) -> Self {
        match power_ctl & 0b11 {
            0b00 => Self::Hz8,
            0b01 => Self::Hz4,
            0b10 => Self::Hz2,
            _ => Self::Hz1,
        }
    }
}

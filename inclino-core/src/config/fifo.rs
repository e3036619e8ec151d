//! FIFO control and status

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::interrupt::InterruptPin;
use crate::registers::fifo;

/// FIFO operating mode (FIFO_CTL bits 6-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FifoMode {
    /// FIFO disabled
    #[default]
    Bypass,
    /// Collect until full, then stop
    Fifo,
    /// Collect continuously, oldest sample dropped when full
    Stream,
    /// Stream until the trigger event, then keep the surrounding samples
    Trigger,
}

impl FifoMode {
    pub const fn bits(self) -> u8 {
        match self {
            Self::Bypass => 0b00,
            Self::Fifo => 0b01,
            Self::Stream => 0b10,
            Self::Trigger => 0b11,
        }
    }

    pub const fn from_bits(fifo_ctl: u8) -> Self {
        match fifo_ctl >> fifo::MODE_SHIFT {
            0b00 => Self::Bypass,
            0b01 => Self::Fifo,
            0b10 => Self::Stream,
            _ => Self::Trigger,
        }
    }
}

/// Trigger routing and sample count (FIFO_CTL bits 0-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FifoConfig {
    /// Interrupt pin whose event triggers the FIFO in trigger mode
    pub trigger: InterruptPin,
    /// Watermark level, or samples kept before the trigger (1-32)
    pub samples: u8,
}

impl Default for FifoConfig {
    fn default() -> Self {
        Self {
            trigger: InterruptPin::Int1,
            samples: fifo::DEPTH as u8,
        }
    }
}

impl FifoConfig {
    /// Encode bits 0-5; the sample count is clamped to 1..=32
    pub fn bits(&self) -> u8 {
        let samples = self.samples.clamp(1, fifo::DEPTH as u8) - 1;
        let trigger = match self.trigger {
            InterruptPin::Int1 => 0,
            InterruptPin::Int2 => 1 << fifo::TRIGGER,
        };
        trigger | (samples & fifo::SAMPLES_MASK)
    }
}

/// Snapshot of FIFO_STATUS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus(pub u8);

impl FifoStatus {
    /// Number of samples waiting (0-33, the output registers hold one extra)
    pub const fn entries(self) -> u8 {
        self.0 & fifo::ENTRIES_MASK
    }

    /// A trigger event has occurred
    pub const fn triggered(self) -> bool {
        self.0 & (1 << fifo::FIFO_TRIG) != 0
    }
}

//! Interrupt sources, routing and polarity
//!
//! INT_ENABLE, INT_MAP and INT_SOURCE share one bit layout, so a single
//! [`Interrupt`] enum addresses all three.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interrupt function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interrupt {
    Overrun,
    Watermark,
    FreeFall,
    Inactivity,
    Activity,
    DoubleTap,
    SingleTap,
    DataReady,
}

impl Interrupt {
    /// All interrupt functions, lowest bit first
    pub const ALL: [Interrupt; 8] = [
        Self::Overrun,
        Self::Watermark,
        Self::FreeFall,
        Self::Inactivity,
        Self::Activity,
        Self::DoubleTap,
        Self::SingleTap,
        Self::DataReady,
    ];

    /// Bit position in INT_ENABLE / INT_MAP / INT_SOURCE
    pub const fn bit(self) -> u8 {
        match self {
            Self::Overrun => 0,
            Self::Watermark => 1,
            Self::FreeFall => 2,
            Self::Inactivity => 3,
            Self::Activity => 4,
            Self::DoubleTap => 5,
            Self::SingleTap => 6,
            Self::DataReady => 7,
        }
    }

    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }
}

/// Output pin an interrupt (or the FIFO trigger) is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InterruptPin {
    #[default]
    Int1,
    Int2,
}

/// Interrupt output level (DATA_FORMAT INT_INVERT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InterruptPolarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

/// Snapshot of INT_SOURCE
///
/// Reading INT_SOURCE clears the latched events on the device, so keep
/// the snapshot and test it as often as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptSource(pub u8);

impl InterruptSource {
    /// Check whether `interrupt` fired
    pub const fn contains(self, interrupt: Interrupt) -> bool {
        self.0 & interrupt.mask() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Iterate over the interrupts that fired
    pub fn iter(self) -> impl Iterator<Item = Interrupt> {
        Interrupt::ALL.into_iter().filter(move |i| self.contains(*i))
    }
}

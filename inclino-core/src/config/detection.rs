//! Activity, inactivity, free-fall and tap detection settings
//!
//! Each record carries physical units and knows how to encode itself
//! into the register counts the comparators use.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    encode_step, encode_step_nonzero, FREE_FALL_MS_PER_LSB, TAP_DURATION_MS_PER_LSB,
    TAP_GAP_MS_PER_LSB, THRESHOLD_G_PER_LSB,
};
use crate::registers::{act_inact_ctl, act_tap_status, tap_axes};

/// Comparator coupling for activity/inactivity detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coupling {
    /// Compare against the absolute threshold
    #[default]
    Dc,
    /// Compare against the acceleration at the start of detection
    Ac,
}

impl Coupling {
    /// Bit 3 of the activity or inactivity nibble
    pub const fn bits(self) -> u8 {
        match self {
            Self::Dc => 0x00,
            Self::Ac => 0x08,
        }
    }
}

/// Axes taking part in a detection function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisSet {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl AxisSet {
    pub const NONE: Self = Self::new(false, false, false);
    pub const XYZ: Self = Self::new(true, true, true);

    pub const fn new(x: bool, y: bool, z: bool) -> Self {
        Self { x, y, z }
    }

    /// Three-bit encoding shared by TAP_AXES and ACT_INACT_CTL: x=4, y=2, z=1
    pub const fn bits(self) -> u8 {
        (self.x as u8) << 2 | (self.y as u8) << 1 | self.z as u8
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self::new(bits & 0b100 != 0, bits & 0b010 != 0, bits & 0b001 != 0)
    }
}

/// Free-fall detection (THRESH_FF, TIME_FF)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FreeFallConfig {
    /// All axes must stay below this magnitude (g, 0.0625 g/LSB)
    pub threshold_g: f32,
    /// For at least this long (ms, 5 ms/LSB)
    pub time_ms: f32,
}

impl FreeFallConfig {
    pub fn threshold_bits(&self) -> u8 {
        encode_step_nonzero(self.threshold_g, THRESHOLD_G_PER_LSB)
    }

    pub fn time_bits(&self) -> u8 {
        encode_step_nonzero(self.time_ms, FREE_FALL_MS_PER_LSB)
    }
}

/// Activity detection (THRESH_ACT, upper nibble of ACT_INACT_CTL)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivityConfig {
    pub coupling: Coupling,
    pub axes: AxisSet,
    /// Threshold in g (0.0625 g/LSB)
    pub threshold_g: f32,
}

impl ActivityConfig {
    pub fn threshold_bits(&self) -> u8 {
        encode_step_nonzero(self.threshold_g, THRESHOLD_G_PER_LSB)
    }

    /// Upper nibble of ACT_INACT_CTL, already shifted
    pub const fn control_bits(&self) -> u8 {
        (self.coupling.bits() | self.axes.bits()) << 4
    }
}

/// Inactivity detection (THRESH_INACT, TIME_INACT, lower nibble of ACT_INACT_CTL)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InactivityConfig {
    pub coupling: Coupling,
    pub axes: AxisSet,
    /// Threshold in g (0.0625 g/LSB)
    pub threshold_g: f32,
    /// Time below threshold before inactivity is declared (s, 1 s/LSB)
    pub time_s: u8,
}

impl InactivityConfig {
    pub fn threshold_bits(&self) -> u8 {
        encode_step_nonzero(self.threshold_g, THRESHOLD_G_PER_LSB)
    }

    /// Lower nibble of ACT_INACT_CTL
    pub const fn control_bits(&self) -> u8 {
        self.coupling.bits() | self.axes.bits()
    }
}

/// Single tap detection (TAP_AXES, THRESH_TAP, DUR, LATENT)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TapConfig {
    pub axes: AxisSet,
    /// Peak threshold in g (0.0625 g/LSB)
    pub threshold_g: f32,
    /// Maximum time above threshold (ms, 0.625 ms/LSB)
    pub duration_ms: f32,
    /// Dead time before the double tap window opens (ms, 1.25 ms/LSB)
    pub latency_ms: f32,
}

impl TapConfig {
    pub fn threshold_bits(&self) -> u8 {
        encode_step_nonzero(self.threshold_g, THRESHOLD_G_PER_LSB)
    }

    pub fn duration_bits(&self) -> u8 {
        encode_step_nonzero(self.duration_ms, TAP_DURATION_MS_PER_LSB)
    }

    pub fn latency_bits(&self) -> u8 {
        encode_step_nonzero(self.latency_ms, TAP_GAP_MS_PER_LSB)
    }
}

/// Double tap extension (TAP_AXES suppress bit, WINDOW)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoubleTapConfig {
    /// Reject a double tap if acceleration stays high between the taps
    pub suppress: bool,
    /// Window for the second tap (ms, 1.25 ms/LSB)
    ///
    /// Zero is a valid encoding here: it disables double tap detection.
    pub window_ms: f32,
}

impl DoubleTapConfig {
    pub fn window_bits(&self) -> u8 {
        encode_step(self.window_ms, TAP_GAP_MS_PER_LSB)
    }
}

/// Maximum length of [`ActTapStatus::label`]
pub const STATUS_LABEL_LEN: usize = 36;

const STATUS_LABELS: [(u8, &str); 6] = [
    (act_tap_status::TAP_Z, "TAP-Z "),
    (act_tap_status::TAP_Y, "TAP-Y "),
    (act_tap_status::TAP_X, "TAP-X "),
    (act_tap_status::ACT_Z, "ACT-Z "),
    (act_tap_status::ACT_Y, "ACT-Y "),
    (act_tap_status::ACT_X, "ACT-X "),
];

/// Snapshot of ACT_TAP_STATUS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActTapStatus(pub u8);

impl ActTapStatus {
    /// Device is in auto-sleep
    pub const fn asleep(self) -> bool {
        self.0 & (1 << act_tap_status::ASLEEP) != 0
    }

    /// Axes that triggered the last tap event
    pub const fn tap_axes(self) -> AxisSet {
        AxisSet::from_bits(self.0 & tap_axes::AXES_MASK)
    }

    /// Axes that triggered the last activity event
    pub const fn activity_axes(self) -> AxisSet {
        AxisSet::from_bits((self.0 & act_inact_ctl::ACT_AXES_MASK) >> 4)
    }

    /// Only the source bits of axes that are enabled
    ///
    /// `act_ctl` and `tap_ctl` are the raw ACT_INACT_CTL and TAP_AXES
    /// values; the status register keeps stale flags for disabled axes.
    pub const fn masked(self, act_ctl: u8, tap_ctl: u8) -> Self {
        let mask = (act_ctl & act_inact_ctl::ACT_AXES_MASK) | (tap_ctl & tap_axes::AXES_MASK);
        Self(self.0 & mask)
    }

    /// Space separated labels, e.g. `"TAP-Z ACT-X "`
    pub fn label(self) -> String<STATUS_LABEL_LEN> {
        let mut out = String::new();
        for (bit, text) in STATUS_LABELS {
            if self.0 & (1 << bit) != 0 && out.push_str(text).is_err() {
                break;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_set_bits() {
        assert_eq!(AxisSet::NONE.bits(), 0b000);
        assert_eq!(AxisSet::new(false, false, true).bits(), 0b001);
        assert_eq!(AxisSet::new(false, true, false).bits(), 0b010);
        assert_eq!(AxisSet::new(true, false, true).bits(), 0b101);
        assert_eq!(AxisSet::XYZ.bits(), 0b111);
        for bits in 0..8 {
            assert_eq!(AxisSet::from_bits(bits).bits(), bits);
        }
    }

    #[test]
    fn test_activity_control_nibble() {
        let act = ActivityConfig {
            coupling: Coupling::Ac,
            axes: AxisSet::new(true, true, false),
            threshold_g: 0.5,
        };
        assert_eq!(act.control_bits(), 0xE0);
        assert_eq!(act.threshold_bits(), 8);

        let inact = InactivityConfig {
            coupling: Coupling::Dc,
            axes: AxisSet::XYZ,
            threshold_g: 0.0,
            time_s: 10,
        };
        assert_eq!(inact.control_bits(), 0x07);
        assert_eq!(inact.threshold_bits(), 1);
    }

    #[test]
    fn test_tap_encoding() {
        let tap = TapConfig {
            axes: AxisSet::new(false, false, true),
            threshold_g: 3.0,
            duration_ms: 30.0,
            latency_ms: 100.0,
        };
        assert_eq!(tap.threshold_bits(), 48);
        assert_eq!(tap.duration_bits(), 48);
        assert_eq!(tap.latency_bits(), 80);

        let zero = TapConfig {
            axes: AxisSet::NONE,
            threshold_g: 0.0,
            duration_ms: 0.0,
            latency_ms: 0.0,
        };
        assert_eq!(zero.threshold_bits(), 1);
        assert_eq!(zero.duration_bits(), 1);
        assert_eq!(zero.latency_bits(), 1);
    }

    #[test]
    fn test_double_tap_window_may_be_zero() {
        let config = DoubleTapConfig {
            suppress: true,
            window_ms: 0.0,
        };
        assert_eq!(config.window_bits(), 0);

        let config = DoubleTapConfig {
            suppress: false,
            window_ms: 250.0,
        };
        assert_eq!(config.window_bits(), 200);
    }

    #[test]
    fn test_free_fall_encoding() {
        let ff = FreeFallConfig {
            threshold_g: 0.4,
            time_ms: 100.0,
        };
        assert_eq!(ff.threshold_bits(), 6);
        assert_eq!(ff.time_bits(), 20);
    }

    #[test]
    fn test_status_label_order() {
        let status = ActTapStatus(0b0111_1111);
        assert_eq!(
            status.label().as_str(),
            "TAP-Z TAP-Y TAP-X ACT-Z ACT-Y ACT-X "
        );
        // Every flag set fills the label exactly
        assert_eq!(status.label().len(), STATUS_LABEL_LEN);
        assert!(status.asleep());
        assert_eq!(ActTapStatus(0).label().as_str(), "");
    }

    #[test]
    fn test_status_masked_by_enabled_axes() {
        let status = ActTapStatus(0b0111_0111);
        // Activity on x only, tap on z only
        let masked = status.masked(0b0100_0111, 0b0000_1001);
        assert_eq!(masked, ActTapStatus(0b0100_0001));
        assert_eq!(masked.label().as_str(), "TAP-Z ACT-X ");
        assert_eq!(masked.tap_axes(), AxisSet::new(false, false, true));
        assert_eq!(masked.activity_axes(), AxisSet::new(true, false, false));
    }
}

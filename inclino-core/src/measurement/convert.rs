//! Pure conversion stages

use super::{AngleOffsets, Angles, Axes, Calibration, GValues, RawSample};
use super::{DEGREES_PER_RADIAN, MILLI_G_PER_LSB};

/// Subtract the calibration offset, rescaled to the current range
pub fn corrected_raw(raw: RawSample, cal: &Calibration, range_factor: f32) -> Axes<f32> {
    raw.zip_with(cal.offset, |counts, offset| {
        counts as f32 - offset / range_factor
    })
}

/// Offset-corrected counts to g
///
/// `g = counts × 3.9 mg × range_factor × gain / 1000`
pub fn g_values(corrected: Axes<f32>, cal: &Calibration, range_factor: f32) -> GValues {
    corrected.zip_with(cal.factor, |counts, gain| {
        counts * MILLI_G_PER_LSB * range_factor * gain / 1000.0
    })
}

/// Tilt of each axis against the horizontal plane, in degrees
///
/// Noise or a slightly-off calibration can push a static reading past
/// ±1 g, so the input is clamped before `asin`.
pub fn angles(g: GValues) -> Angles {
    g.map(|v| libm::asinf(v.clamp(-1.0, 1.0)) * DEGREES_PER_RADIAN)
}

/// Angles relative to a captured baseline
pub fn relative_angles(angles: Angles, offsets: &AngleOffsets) -> Angles {
    angles.zip_with(*offsets, |angle, offset| angle - offset)
}

/// Pitch in degrees: `atan2(gx, sqrt(gx·gy + gz²))`
///
/// The radicand can dip below zero when gx and gy have opposite signs;
/// it is floored at zero, which yields ±90°. That value is saturated,
/// not a measured tilt: the formula has no real result for such a
/// reading.
pub fn pitch(g: GValues) -> f32 {
    let radicand = (g.x * g.y + g.z * g.z).max(0.0);
    libm::atan2f(g.x, libm::sqrtf(radicand)).to_degrees()
}

/// Roll in degrees: `atan2(gy, gz)`
pub fn roll(g: GValues) -> f32 {
    libm::atan2f(g.y, g.z).to_degrees()
}

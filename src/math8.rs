use core::f32::consts::TAU;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Sine wave sampled at `position` over a period of `period` units
///
/// Returns 0-255 with 128 at the zero crossing. A zero period yields the
/// midpoint.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn sine8(position: f32, period: f32) -> u8 {
    if period <= 0.0 {
        return 128;
    }
    let wave = libm::sinf(position * TAU / period);
    let level = (wave + 1.0) * 127.5;
    libm::roundf(level).clamp(0.0, 255.0) as u8
}

/// Advance a phase accumulator and wrap it into `[0, period)`
pub fn advance_phase(phase: f32, step: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    let next = phase + step;
    if next >= period { libm::fmodf(next, period) } else { next }
}

//! Numeric coercion helpers centralizing safe numeric casts.
//!
//! Scenario templates are data-driven and may carry gaps, so every effect
//! field passes through [`sane`] before arithmetic: non-finite values become
//! 0.0 instead of propagating through the state.

use num_traits::cast::cast;

/// Coerce a possibly-corrupt numeric effect to a finite value, defaulting to 0.0.
#[must_use]
pub fn sane(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Round a f64 and clamp it to the i32 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i32, f64>(i32::MIN).unwrap_or(f64::MIN);
    let max = cast::<i32, f64>(i32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).round();
    cast::<f64, i32>(clamped).unwrap_or(0)
}

/// Ceil a f64 and clamp it to the i32 range, returning 0 for non-finite values.
#[must_use]
pub fn ceil_f64_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i32, f64>(i32::MIN).unwrap_or(f64::MIN);
    let max = cast::<i32, f64>(i32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).ceil();
    cast::<f64, i32>(clamped).unwrap_or(0)
}

/// Convert i32 to f64 in a single location.
#[must_use]
pub fn i32_to_f64(value: i32) -> f64 {
    cast::<i32, f64>(value).unwrap_or(0.0)
}

/// Round a monetary amount to whole currency units, guarding non-finite input.
#[must_use]
pub fn round_money(value: f64) -> f64 {
    sane(value).round()
}

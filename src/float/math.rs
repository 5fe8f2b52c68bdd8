// src/float/math.rs

use core::f64::consts::PI;

/// Computes `sin(π·x)` with `x` measured in half-turns, rounded to `f32`.
#[inline]
pub(crate) fn sinpi(x: f32) -> f32 {
    sinpi_f64(f64::from(x)) as f32
}

/// Computes `sin(π·x)` with `x` measured in half-turns.
///
/// The argument is folded into `[-0.5, 0.5]` before the call so integers map
/// to exactly 0 and half-integers to exactly ±1. The result is odd in `x`.
pub(crate) fn sinpi_f64(x: f64) -> f64 {
    // x - 2k lands in [-1, 1]; sin(π(±1 - r)) == sin(πr) folds the rest.
    let r = x - 2.0 * round(0.5 * x);
    let r = if r > 0.5 {
        1.0 - r
    } else if r < -0.5 {
        -1.0 - r
    } else {
        r
    };

    if r < 0.0 { -sin(PI * -r) } else { sin(PI * r) }
}

#[inline]
pub(crate) fn sqrt(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrtf(x);
}

#[inline]
pub(crate) fn sqrt_f64(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// `a * b + c` with a single rounding.
#[inline]
pub(crate) fn mul_add(a: f64, b: f64, c: f64) -> f64 {
    #[cfg(feature = "std")]
    return a.mul_add(b, c);

    #[cfg(not(feature = "std"))]
    return libm::fma(a, b, c);
}

#[inline]
fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

#[inline]
fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;

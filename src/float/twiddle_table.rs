// src/float/twiddle_table.rs

use super::math::{mul_add, sinpi_f64, sqrt_f64};
use super::types::ComplexValue;
use crate::common::FftError;

/// Largest supported transform length. Every phase `j / (m/2)` stays exact in `f32`.
pub const MAX_FFT_SIZE: usize = 1 << 24;

/// Layered twiddle factors for radix-2 stages, written into a caller-provided buffer.
///
/// The stage with butterfly span `m` reads its `m/2` factors from slots
/// `m/2 .. m`, where slot `m/2 + j` holds `exp(∓2πi·j/m)` (minus for forward
/// tables, plus for inverse ones). Slot 0 is never read and holds NaN.
///
/// Factors use the same sine-plus-square-root scheme as
/// [`ComplexValue::twiddle_factor`], but carried out in `f64` and rounded once,
/// so every entry is the `f32` nearest the unit circle.
///
/// The layout depends only on `m`, so a table built for `n` also serves every
/// power-of-two length below `n`.
pub struct TwiddleTable<'a> {
    twiddles: &'a mut [ComplexValue],
    n: usize,
    inverse: bool,
}

impl<'a> TwiddleTable<'a> {
    /// Number of slots a table for an `n`-point transform occupies.
    #[inline]
    pub fn required_len(n: usize) -> usize {
        n
    }

    pub fn new(
        twiddles: &'a mut [ComplexValue],
        n: usize,
        inverse: bool,
    ) -> Result<Self, FftError> {
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo);
        }
        if n > MAX_FFT_SIZE {
            return Err(FftError::SizeTooLarge);
        }
        if twiddles.len() < Self::required_len(n) {
            return Err(FftError::BufferTooSmall);
        }

        let mut table = Self {
            twiddles: &mut twiddles[..n],
            n,
            inverse,
        };
        table.precompute();
        Ok(table)
    }

    fn precompute(&mut self) {
        let sign = if self.inverse { 1.0 } else { -1.0 };

        self.twiddles[0] = ComplexValue::new(f32::NAN, f32::NAN);

        let mut half = 1;
        while half < self.n {
            let step = sign / half as f64;
            for (j, slot) in self.twiddles[half..2 * half].iter_mut().enumerate() {
                let sin = sinpi_f64(j as f64 * step);
                let radicand = mul_add(sin, -sin, 1.0);
                let mut cos = sqrt_f64(if radicand < 0.0 { 0.0 } else { radicand });

                // Past a quarter turn the cosine is negative.
                if 2 * j > half {
                    cos = -cos;
                }

                *slot = ComplexValue::new(cos as f32, sin as f32);
            }
            half <<= 1;
        }
    }

    /// Transform length the table was built for.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// The `m/2` factors used by the stage that combines spans of `m` elements,
    /// or `None` unless `m` is a power of two in `2..=size()`.
    pub fn stage(&self, m: usize) -> Option<&[ComplexValue]> {
        if m >= 2 && m.is_power_of_two() && m <= self.n {
            Some(self.factors(m))
        } else {
            None
        }
    }

    /// Unchecked form of [`stage`](Self::stage) for the butterfly kernel.
    #[inline]
    pub(crate) fn factors(&self, m: usize) -> &[ComplexValue] {
        &self.twiddles[m / 2..m]
    }

    #[inline]
    pub fn as_slice(&self) -> &[ComplexValue] {
        self.twiddles
    }
}

#[cfg(test)]
#[path = "twiddle_table_tests.rs"]
mod tests;

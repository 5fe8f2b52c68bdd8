use super::super::math::{sinpi, sqrt};
use core::fmt;
use core::ops::{Add, Mul, Sub};
use num_complex::Complex32;

/// A complex number `real + imag·i` over single-precision floats.
///
/// Both parts live in one `[f32; 2]`, so a slice of values has the same
/// layout as an interleaved `re, im, re, im, ...` buffer (and as a slice of
/// `Complex32`). Values are never mutated in place: every operator returns a
/// new value.
///
/// There is deliberately no `Default`; every value starts from explicit parts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct ComplexValue {
    data: [f32; 2],
}

impl ComplexValue {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 0.0);

    #[inline]
    pub const fn new(real: f32, imag: f32) -> Self {
        Self { data: [real, imag] }
    }

    #[inline]
    pub const fn real(self) -> f32 {
        self.data[0]
    }

    #[inline]
    pub const fn imag(self) -> f32 {
        self.data[1]
    }

    /// Returns the complex conjugate (a - bi)
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.real(), -self.imag())
    }

    /// Multiplies both parts by `scalar`. Same as `scalar * self`.
    #[inline]
    pub fn scale(self, scalar: f32) -> Self {
        Self::new(scalar * self.real(), scalar * self.imag())
    }

    /// Returns `exp(iπ·phase_doubled)`, the point on the unit circle at
    /// `phase_doubled` half-turns.
    ///
    /// Only the sine is evaluated. The cosine magnitude is `sqrt(1 - sin²)`
    /// and its sign is restored for `|phase_doubled| > 0.5`, where cosine is
    /// negative. This is only correct for `|phase_doubled| < 1`; forward
    /// transforms pass non-positive phases and inverse transforms
    /// non-negative ones. Larger phases give a point in the wrong quadrant.
    pub fn twiddle_factor(phase_doubled: f32) -> Self {
        let sin = sinpi(phase_doubled);

        // Near ±0.5 rounding can leave 1 - sin² a hair below zero.
        let radicand = 1.0 - sin * sin;
        let mut cos = sqrt(if radicand < 0.0 { 0.0 } else { radicand });

        if phase_doubled > 0.5 || phase_doubled < -0.5 {
            cos = -cos;
        }

        Self::new(cos, sin)
    }
}

impl Add for ComplexValue {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real() + rhs.real(), self.imag() + rhs.imag())
    }
}

impl Sub for ComplexValue {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real() - rhs.real(), self.imag() - rhs.imag())
    }
}

impl Mul for ComplexValue {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        // Grouping is fixed: (ac - bd), (ad + bc). No fused multiply-add.
        let real = self.real() * rhs.real() - self.imag() * rhs.imag();
        let imag = self.real() * rhs.imag() + self.imag() * rhs.real();

        Self::new(real, imag)
    }
}

impl Mul<ComplexValue> for f32 {
    type Output = ComplexValue;

    #[inline]
    fn mul(self, rhs: ComplexValue) -> ComplexValue {
        rhs.scale(self)
    }
}

impl Mul<f32> for ComplexValue {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        rhs * self
    }
}

impl From<Complex32> for ComplexValue {
    #[inline]
    fn from(value: Complex32) -> Self {
        Self::new(value.re, value.im)
    }
}

impl From<ComplexValue> for Complex32 {
    #[inline]
    fn from(value: ComplexValue) -> Self {
        Complex32::new(value.real(), value.imag())
    }
}

impl fmt::Display for ComplexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:+}i", self.real(), self.imag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanorand::RNG;
    use std::format;

    const EPSILON: f32 = 1e-4;

    fn assert_cplx_eq(a: ComplexValue, b: ComplexValue, tolerance: f32) {
        let diff = (a.real() - b.real()).abs() + (a.imag() - b.imag()).abs();
        assert!(diff < tolerance, "Complex mismatch: {} vs {}", a, b);
    }

    /// Random value with both parts in [-4, 4].
    fn random_value(rng: &mut nanorand::WyRand) -> ComplexValue {
        let mut part = || rng.generate_range::<u32>(0, 8001) as f32 / 1000.0 - 4.0;
        let real = part();
        let imag = part();
        ComplexValue::new(real, imag)
    }

    #[test]
    fn test_new() {
        let c = ComplexValue::new(3.0, 4.0);

        assert_eq!(c.real(), 3.0);
        assert_eq!(c.imag(), 4.0);
    }

    #[test]
    fn test_addition() {
        // (1 + 2i) + (3 + 4i) = (4 + 6i)
        let result = ComplexValue::new(1.0, 2.0) + ComplexValue::new(3.0, 4.0);
        assert_eq!(result, ComplexValue::new(4.0, 6.0));
    }

    #[test]
    fn test_subtraction_resulting_negative() {
        // (1 + 2i) - (3 + 5i) = (-2 - 3i)
        let result = ComplexValue::new(1.0, 2.0) - ComplexValue::new(3.0, 5.0);
        assert_eq!(result, ComplexValue::new(-2.0, -3.0));
    }

    #[test]
    fn test_multiplication() {
        // (1 + 2i) * (3 + 4i) = (1*3 - 2*4) + (1*4 + 2*3)i = -5 + 10i
        let result = ComplexValue::new(1.0, 2.0) * ComplexValue::new(3.0, 4.0);
        assert_eq!(result, ComplexValue::new(-5.0, 10.0));
    }

    #[test]
    fn test_multiplication_by_i() {
        // (3 + 4i) * (0 + 1i) = -4 + 3i
        let result = ComplexValue::new(3.0, 4.0) * ComplexValue::new(0.0, 1.0);
        assert_eq!(result, ComplexValue::new(-4.0, 3.0));
    }

    #[test]
    fn test_multiplication_by_conjugate() {
        // (3 + 4i) * (3 - 4i) = 25
        let a = ComplexValue::new(3.0, 4.0);
        assert_eq!(a * a.conj(), ComplexValue::new(25.0, 0.0));
    }

    #[test]
    fn test_scale_both_orders() {
        let v = ComplexValue::new(1.5, -2.25);

        assert_eq!(2.0 * v, ComplexValue::new(3.0, -4.5));
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(v.scale(2.0), 2.0 * v);
    }

    #[test]
    fn test_nan_propagates() {
        let nan = ComplexValue::new(f32::NAN, 0.0);
        let result = nan * ComplexValue::ONE;
        assert!(result.real().is_nan());
    }

    #[test]
    fn test_addition_commutes() {
        let mut rng = nanorand::WyRand::new_seed(42);
        for _ in 0..1000 {
            let a = random_value(&mut rng);
            let b = random_value(&mut rng);

            assert_eq!(a + b, b + a);
            assert_cplx_eq((a + b) - b, a, 1e-5);
        }
    }

    #[test]
    fn test_multiplication_associates() {
        let mut rng = nanorand::WyRand::new_seed(7);
        for _ in 0..1000 {
            let a = random_value(&mut rng);
            let b = random_value(&mut rng);
            let c = random_value(&mut rng);

            assert_cplx_eq((a * b) * c, a * (b * c), 1e-3);
        }
    }

    #[test]
    fn test_multiplicative_identity() {
        let mut rng = nanorand::WyRand::new_seed(3);
        for _ in 0..1000 {
            let a = random_value(&mut rng);
            assert_eq!(a * ComplexValue::ONE, a);
        }
    }

    #[test]
    fn test_scale_commutes() {
        let mut rng = nanorand::WyRand::new_seed(11);
        for _ in 0..1000 {
            let v = random_value(&mut rng);
            let s = random_value(&mut rng).real();

            assert_eq!(s * v, v * s);
        }
    }

    #[test]
    fn test_twiddle_factor_zero_is_exact() {
        assert_eq!(ComplexValue::twiddle_factor(0.0), ComplexValue::ONE);
    }

    #[test]
    fn test_twiddle_factor_quarter_turns() {
        let up = ComplexValue::twiddle_factor(0.5);
        let down = ComplexValue::twiddle_factor(-0.5);

        assert_eq!(up, ComplexValue::new(0.0, 1.0));
        assert_eq!(down, ComplexValue::new(0.0, -1.0));
    }

    #[test]
    fn test_twiddle_factor_second_quadrant_is_negative() {
        for k in 1..500 {
            let p = 0.5 + k as f32 / 1000.0;

            assert!(ComplexValue::twiddle_factor(p).real() < 0.0, "phase {}", p);
            assert!(ComplexValue::twiddle_factor(-p).real() < 0.0, "phase {}", -p);
        }
    }

    #[test]
    fn test_twiddle_factor_on_unit_circle() {
        for k in -999..1000 {
            let p = k as f32 / 1000.0;
            let angle = core::f64::consts::PI * f64::from(p);
            let expected = ComplexValue::new(angle.cos() as f32, angle.sin() as f32);
            let got = ComplexValue::twiddle_factor(p);

            // Cosine comes from sqrt(1 - sin²) and loses bits near ±0.5.
            let tolerance = if (p.abs() - 0.5).abs() < 0.2 { 1e-3 } else { 1e-6 };
            assert_cplx_eq(got, expected, tolerance);
        }
    }

    #[test]
    fn test_twiddle_factor_mirrors_direction() {
        for k in 0..1000 {
            let p = k as f32 / 1000.0;
            assert_eq!(
                ComplexValue::twiddle_factor(p),
                ComplexValue::twiddle_factor(-p).conj()
            );
        }
    }

    #[test]
    fn test_twiddle_factors_compose() {
        let eighth = ComplexValue::twiddle_factor(-0.25);
        assert_cplx_eq(eighth * eighth, ComplexValue::twiddle_factor(-0.5), 1e-5);

        let third = ComplexValue::twiddle_factor(-1.0 / 3.0);
        let sixth = ComplexValue::twiddle_factor(-1.0 / 6.0);
        assert_cplx_eq(third * sixth, ComplexValue::twiddle_factor(-0.5), EPSILON);
    }

    #[test]
    fn test_complex32_conversion() {
        let c = Complex32::new(0.25, -8.5);
        let value = ComplexValue::from(c);

        assert_eq!(value, ComplexValue::new(0.25, -8.5));
        assert_eq!(Complex32::from(value), c);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ComplexValue::new(1.5, -2.0)), "1.5-2i");
        assert_eq!(format!("{}", ComplexValue::new(0.0, 3.0)), "0+3i");
    }
}

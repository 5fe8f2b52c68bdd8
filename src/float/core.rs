// src/float/core.rs

use super::twiddle_table::TwiddleTable;
use super::types::ComplexValue;

/// Where one transform sits inside a larger buffer: `len` elements starting
/// at `offset`, `stride` elements apart.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Lane {
    pub offset: usize,
    pub stride: usize,
    pub len: usize,
}

impl Lane {
    #[inline]
    pub fn contiguous(len: usize) -> Self {
        Self { offset: 0, stride: 1, len }
    }

    #[inline]
    fn at(self, i: usize) -> usize {
        self.offset + i * self.stride
    }
}

/// Fills the bit-reversal table.
pub(crate) fn precompute_bitrev(bitrev: &mut [usize], n: usize) {
    bitrev[0] = 0;
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        bitrev[i] = j;
    }
}

/// In-place radix-2 decimation-in-time transform of one lane.
///
/// `bitrev` is the table for the full table length; shorter lanes shift it down.
/// Every element is multiplied by `multiplier` while being permuted.
/// With `CONJUGATE` the table's factors are used in the opposite direction.
pub(crate) fn radix_2_dit_core<const CONJUGATE: bool>(
    buffer: &mut [ComplexValue],
    lane: Lane,
    twiddles: &TwiddleTable<'_>,
    bitrev: &[usize],
    multiplier: f32,
) {
    let n = lane.len;
    debug_assert!(n.is_power_of_two() && n <= bitrev.len());

    // 1. Scale and bit-reverse
    if multiplier != 1.0 {
        for i in 0..n {
            let index = lane.at(i);
            buffer[index] = buffer[index] * multiplier;
        }
    }

    let shift = bitrev.len().trailing_zeros() - n.trailing_zeros();
    for i in 1..n.saturating_sub(1) {
        let j = bitrev[i] >> shift;
        if i < j {
            buffer.swap(lane.at(i), lane.at(j));
        }
    }

    // 2. Butterfly
    let mut m = 2;
    while m <= n {
        let half = m / 2;
        let factors = twiddles.factors(m);

        for k in (0..n).step_by(m) {
            for (j, &factor) in factors.iter().enumerate() {
                let w = if CONJUGATE { factor.conj() } else { factor };

                let top = lane.at(k + j);
                let bottom = lane.at(k + j + half);
                let u = buffer[top];
                let t = w * buffer[bottom];

                buffer[top] = u + t;
                buffer[bottom] = u - t;
            }
        }
        m <<= 1;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;

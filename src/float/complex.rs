use super::core::{Lane, precompute_bitrev, radix_2_dit_core};
use super::twiddle_table::TwiddleTable;
use super::types::ComplexValue;
use crate::common::{FftError, FftProcess};
use core::slice;
use num_complex::Complex32;

/// CPU radix-2 transform over precomputed tables, used as the reference that
/// accelerated kernels are checked against.
///
/// Forward transforms are unnormalized; inverse transforms scale by `1/n` per
/// dimension. Both tables live in caller-provided buffers.
pub struct ReferenceFft<'a> {
    table: TwiddleTable<'a>,
    bitrev: &'a mut [usize],
    n: usize,
}

impl<'a> ReferenceFft<'a> {
    /// Builds the twiddle and bit-reversal tables for an `n`-point transform.
    /// `inverse` picks the direction the twiddle table is generated in.
    pub fn new(
        twiddles: &'a mut [ComplexValue],
        bitrev: &'a mut [usize],
        n: usize,
        inverse: bool,
    ) -> Result<Self, FftError> {
        let table = TwiddleTable::new(twiddles, n, inverse)?;
        if bitrev.len() < n {
            return Err(FftError::BufferTooSmall);
        }

        let bitrev = &mut bitrev[..n];
        precompute_bitrev(bitrev, n);

        Ok(Self { table, bitrev, n })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn twiddles(&self) -> &TwiddleTable<'a> {
        &self.table
    }

    /// Executes the FFT in-place. `buffer.len()` must equal the transform size.
    pub fn process(&self, buffer: &mut [ComplexValue], inverse: bool) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch);
        }

        self.run(buffer, Lane::contiguous(self.n), inverse);
        Ok(())
    }

    /// Transforms every consecutive row of `n` elements independently.
    pub fn process_batched(
        &self,
        buffer: &mut [ComplexValue],
        inverse: bool,
    ) -> Result<(), FftError> {
        if buffer.is_empty() || buffer.len() % self.n != 0 {
            return Err(FftError::SizeMismatch);
        }

        for row in buffer.chunks_exact_mut(self.n) {
            self.run(row, Lane::contiguous(self.n), inverse);
        }
        Ok(())
    }

    /// 2D transform of a row-major grid `width` elements wide.
    ///
    /// Width and height must be powers of two no larger than the table.
    pub fn process_2d(
        &self,
        buffer: &mut [ComplexValue],
        width: usize,
        inverse: bool,
    ) -> Result<(), FftError> {
        if !self.is_axis(width) {
            return Err(FftError::InvalidStride);
        }
        if buffer.is_empty() || buffer.len() % width != 0 {
            return Err(FftError::SizeMismatch);
        }
        let height = buffer.len() / width;
        if !self.is_axis(height) {
            return Err(FftError::SizeMismatch);
        }

        self.run_2d(buffer, width, height, inverse);
        Ok(())
    }

    /// Transforms every consecutive `height × width` grid independently.
    pub fn process_batched_2d(
        &self,
        buffer: &mut [ComplexValue],
        width: usize,
        height: usize,
        inverse: bool,
    ) -> Result<(), FftError> {
        if !self.is_axis(width) || !self.is_axis(height) {
            return Err(FftError::InvalidStride);
        }
        let plane = width * height;
        if buffer.is_empty() || buffer.len() % plane != 0 {
            return Err(FftError::SizeMismatch);
        }

        for grid in buffer.chunks_exact_mut(plane) {
            self.run_2d(grid, width, height, inverse);
        }
        Ok(())
    }

    /// 3D transform of `depth` consecutive `height × width` planes, where
    /// `depth = buffer.len() / (width · height)`.
    ///
    /// All three extents must be powers of two no larger than the table.
    pub fn process_3d(
        &self,
        buffer: &mut [ComplexValue],
        width: usize,
        height: usize,
        inverse: bool,
    ) -> Result<(), FftError> {
        if !self.is_axis(width) || !self.is_axis(height) {
            return Err(FftError::InvalidStride);
        }
        let plane = width * height;
        if buffer.is_empty() || buffer.len() % plane != 0 {
            return Err(FftError::SizeMismatch);
        }
        let depth = buffer.len() / plane;
        if !self.is_axis(depth) {
            return Err(FftError::SizeMismatch);
        }

        for grid in buffer.chunks_exact_mut(plane) {
            self.run_2d(grid, width, height, inverse);
        }
        for offset in 0..plane {
            let lane = Lane {
                offset,
                stride: plane,
                len: depth,
            };
            self.run(buffer, lane, inverse);
        }
        Ok(())
    }

    #[inline]
    fn is_axis(&self, len: usize) -> bool {
        len.is_power_of_two() && len <= self.n
    }

    /// Rows, then columns, of one `height × width` grid.
    fn run_2d(&self, grid: &mut [ComplexValue], width: usize, height: usize, inverse: bool) {
        for row in grid.chunks_exact_mut(width) {
            self.run(row, Lane::contiguous(width), inverse);
        }
        for column in 0..width {
            let lane = Lane {
                offset: column,
                stride: width,
                len: height,
            };
            self.run(grid, lane, inverse);
        }
    }

    fn run(&self, buffer: &mut [ComplexValue], lane: Lane, inverse: bool) {
        let multiplier = if inverse { 1.0 / lane.len as f32 } else { 1.0 };

        // The table only stores one direction; the other is its conjugate.
        if inverse == self.table.is_inverse() {
            radix_2_dit_core::<false>(buffer, lane, &self.table, self.bitrev, multiplier);
        } else {
            radix_2_dit_core::<true>(buffer, lane, &self.table, self.bitrev, multiplier);
        }
    }
}

impl<'a> FftProcess<ComplexValue> for ReferenceFft<'a> {
    fn process(&self, buffer: &mut [ComplexValue], inverse: bool) -> Result<(), FftError> {
        self.process(buffer, inverse)
    }
}

impl<'a> FftProcess<Complex32> for ReferenceFft<'a> {
    fn process(&self, buffer: &mut [Complex32], inverse: bool) -> Result<(), FftError> {
        // Safety: Complex32 and ComplexValue are both repr(C) pairs of f32,
        // so they share size and alignment.
        let values = unsafe {
            slice::from_raw_parts_mut(buffer.as_mut_ptr() as *mut ComplexValue, buffer.len())
        };
        self.process(values, inverse)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;

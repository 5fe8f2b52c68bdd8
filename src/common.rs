// src/common.rs

use core::fmt;

/// Reasons a table or transform refuses its buffers.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    /// The data buffer does not hold a whole transform (or grid of transforms).
    SizeMismatch,
    NotPowerOfTwo,
    /// A caller-provided table buffer is shorter than the transform needs.
    BufferTooSmall,
    /// A 2D row width that is not a supported transform length.
    InvalidStride,
    /// Longer than `MAX_FFT_SIZE`.
    SizeTooLarge,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            FftError::SizeMismatch => "data buffer length does not match the transform size",
            FftError::NotPowerOfTwo => "transform size must be a non-zero power of 2",
            FftError::BufferTooSmall => "twiddle or bit-reversal buffer is too small",
            FftError::InvalidStride => "grid width must be a power of 2 no larger than the transform",
            FftError::SizeTooLarge => "transform size exceeds the largest supported size",
        };
        f.write_str(message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// An in-place transform over buffers of `T`.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<(), FftError>;
}

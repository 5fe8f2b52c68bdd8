pub mod complex;
pub mod twiddle_table;
pub mod types;
mod core;
mod math;

pub use crate::common::{FftError, FftProcess};
pub use complex::ReferenceFft;
pub use twiddle_table::{TwiddleTable, MAX_FFT_SIZE};
pub use types::ComplexValue;

#![no_std]

// The standard library is linked for tests and for the "std" feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod float;

pub use common::{FftError, FftProcess};
pub use float::{ComplexValue, ReferenceFft, TwiddleTable};

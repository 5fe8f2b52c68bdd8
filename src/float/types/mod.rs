mod complex_value;

pub use complex_value::ComplexValue;

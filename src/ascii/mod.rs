pub mod number;
pub mod whitespace;

pub use number::{Number, binary, digit, f64, hexadecimal, i64, number, octal, u64};
pub use whitespace::whitespace;

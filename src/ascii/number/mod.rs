use crate::ByteCursor;
use crate::error::DescentError;
use crate::map::MapExt;
use crate::map_err::MapErrExt;
use crate::or::OrExt;
use crate::parser::Parser;

pub mod digit;
pub mod f64;
pub mod i64;
pub mod radix;
pub mod u64;

pub use digit::digit;
pub use f64::f64;
pub use i64::i64;
pub use radix::{binary, hexadecimal, octal};
pub use u64::u64;

/// A parsed numeric literal: integer or float.
#[derive(Debug, PartialEq)]
pub enum Number {
    I64(i64),
    F64(f64),
}

/// Parser that matches either a float or an integer and tags the result.
///
/// The float form is tried first since every float begins with a valid
/// integer.
pub fn number<'src>()
-> impl Parser<'src, Cursor = ByteCursor<'src>, Output = Number, Error = DescentError<'src>> {
    f64()
        .map(Number::F64)
        .or(i64().map(Number::I64))
        .map_err(|e| e.furthest())
}

use crate::ByteCursor;
use crate::byte::byte_range;
use crate::error::DescentError;
use crate::parser::Parser;

/// Parser that matches a single ASCII decimal digit and returns its byte.
pub fn digit<'src>()
-> impl Parser<'src, Cursor = ByteCursor<'src>, Output = u8, Error = DescentError<'src>> {
    byte_range(b'0', b'9')
}

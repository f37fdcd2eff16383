use crate::ByteCursor;
use crate::byte::{loc_at, show_byte};
use crate::cursor::Cursor;
use crate::error::DescentError;
use crate::parser::Parser;

/// Parser that matches a single ASCII whitespace byte (space, tab, line
/// feed, carriage return).
pub struct AsciiWhitespace;

impl<'src> Parser<'src> for AsciiWhitespace {
    type Cursor = ByteCursor<'src>;
    type Output = u8;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(u8, Self::Cursor), Self::Error> {
        match cursor.peek() {
            Ok(byte @ (b' ' | b'\t' | b'\n' | b'\r')) => Ok((byte, cursor.advance())),
            Ok(byte) => Err(DescentError::Unexpected {
                expected: "whitespace".into(),
                found: show_byte(byte).into(),
                loc: loc_at(cursor),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Convenience function to create an ASCII whitespace parser.
pub fn whitespace() -> AsciiWhitespace {
    AsciiWhitespace
}

use crate::ByteCursor;
use crate::byte::{loc_at, show_byte};
use crate::cursor::Cursor;
use crate::error::DescentError;
use crate::parser::Parser;

/// Parser that matches one or more ASCII decimal digits as a `u64`.
///
/// The value is accumulated digit by digit (`value * 10 + digit`, left to
/// right) with checked arithmetic, so overflow is a parse error rather
/// than a wrap.
pub fn u64<'src>()
-> impl Parser<'src, Cursor = ByteCursor<'src>, Output = u64, Error = DescentError<'src>> {
    DecimalParser
}

struct DecimalParser;

impl<'src> Parser<'src> for DecimalParser {
    type Cursor = ByteCursor<'src>;
    type Output = u64;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(u64, Self::Cursor), Self::Error> {
        match cursor.peek() {
            Ok(byte) if byte.is_ascii_digit() => {}
            Ok(byte) => {
                return Err(DescentError::Unexpected {
                    expected: "decimal digit".into(),
                    found: show_byte(byte).into(),
                    loc: loc_at(cursor),
                });
            }
            Err(e) => return Err(e),
        }

        let mut cursor = cursor;
        let mut value: u64 = 0;
        while let Ok(byte) = cursor.peek() {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(byte - b'0')))
                .ok_or_else(|| DescentError::Message {
                    message: "decimal number too large for u64".into(),
                    loc: loc_at(cursor),
                })?;
            cursor = cursor.advance();
        }
        Ok((value, cursor))
    }
}

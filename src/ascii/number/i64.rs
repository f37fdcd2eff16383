use super::u64::u64;
use crate::ByteCursor;
use crate::byte::loc_at;
use crate::cursor::Cursor;
use crate::error::DescentError;
use crate::parser::Parser;

/// Parser that matches an ASCII integer with an optional `+` or `-` sign
/// as an `i64`.
pub fn i64<'src>()
-> impl Parser<'src, Cursor = ByteCursor<'src>, Output = i64, Error = DescentError<'src>> {
    SignedParser
}

struct SignedParser;

impl<'src> Parser<'src> for SignedParser {
    type Cursor = ByteCursor<'src>;
    type Output = i64;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(i64, Self::Cursor), Self::Error> {
        let mut cursor = cursor;
        let mut negative = false;
        match cursor.peek() {
            Ok(b'-') => {
                negative = true;
                cursor = cursor.advance();
            }
            Ok(b'+') => {
                cursor = cursor.advance();
            }
            _ => {}
        }

        let (magnitude, after) = u64().parse(cursor)?;

        // i64::MIN has one more magnitude step than i64::MAX.
        let value = if negative {
            if magnitude > i64::MAX as u64 + 1 {
                return Err(DescentError::Message {
                    message: format!("number too small for i64: -{}", magnitude).into(),
                    loc: loc_at(cursor),
                });
            }
            (magnitude as i64).wrapping_neg()
        } else {
            if magnitude > i64::MAX as u64 {
                return Err(DescentError::Message {
                    message: format!("number too large for i64: {}", magnitude).into(),
                    loc: loc_at(cursor),
                });
            }
            magnitude as i64
        };

        Ok((value, after))
    }
}

use super::u64::u64;
use crate::ByteCursor;
use crate::byte::{is_byte, loc_at, show_byte};
use crate::cursor::Cursor;
use crate::error::DescentError;
use crate::parser::Parser;

const MAX_FRACTION_DIGITS: usize = 15;

/// Parser that matches ASCII floating point numbers in `int.frac` form
/// (e.g. `123.456`, `-0.5`) as an `f64`.
///
/// Both the integer part and the fraction accumulate digit by digit; the
/// fraction is limited to 15 digits, which keeps the accumulator exact in
/// an f64.
pub fn f64<'src>()
-> impl Parser<'src, Cursor = ByteCursor<'src>, Output = f64, Error = DescentError<'src>> {
    FloatParser
}

struct FloatParser;

impl<'src> Parser<'src> for FloatParser {
    type Cursor = ByteCursor<'src>;
    type Output = f64;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(f64, Self::Cursor), Self::Error> {
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

        let (int_part, cursor) = u64().parse(cursor)?;
        if int_part > 1 << 53 {
            return Err(DescentError::Message {
                message: format!("integer part too large for exact f64: {}", int_part).into(),
                loc: loc_at(cursor),
            });
        }

        let (_, mut cursor) = is_byte(b'.').parse(cursor)?;

        match cursor.peek() {
            Ok(byte) if byte.is_ascii_digit() => {}
            Ok(byte) => {
                return Err(DescentError::Unexpected {
                    expected: "fraction digit".into(),
                    found: show_byte(byte).into(),
                    loc: loc_at(cursor),
                });
            }
            Err(e) => return Err(e),
        }

        let mut numerator: u64 = 0;
        let mut digits = 0usize;
        while let Ok(byte) = cursor.peek() {
            if !byte.is_ascii_digit() {
                break;
            }
            if digits == MAX_FRACTION_DIGITS {
                return Err(DescentError::Message {
                    message: format!("more than {} fraction digits", MAX_FRACTION_DIGITS).into(),
                    loc: loc_at(cursor),
                });
            }
            numerator = numerator * 10 + u64::from(byte - b'0');
            digits += 1;
            cursor = cursor.advance();
        }

        let fraction = numerator as f64 / 10f64.powi(digits as i32);
        let value = int_part as f64 + fraction;
        Ok((if negative { -value } else { value }, cursor))
    }
}

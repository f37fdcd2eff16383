use crate::ByteCursor;
use crate::byte::{is_byte, loc_at, show_byte};
use crate::cursor::Cursor;
use crate::error::DescentError;
use crate::parser::Parser;

/// Parser for `0b`-prefixed binary numbers as a `u64`.
pub fn binary<'src>()
-> impl Parser<'src, Cursor = ByteCursor<'src>, Output = u64, Error = DescentError<'src>> {
    RadixParser {
        base: 2,
        marker: b'b',
        name: "binary",
    }
}

/// Parser for `0o`-prefixed octal numbers as a `u64`.
pub fn octal<'src>()
-> impl Parser<'src, Cursor = ByteCursor<'src>, Output = u64, Error = DescentError<'src>> {
    RadixParser {
        base: 8,
        marker: b'o',
        name: "octal",
    }
}

/// Parser for `0x`-prefixed hexadecimal numbers as a `u64`. Both digit
/// cases are accepted.
pub fn hexadecimal<'src>()
-> impl Parser<'src, Cursor = ByteCursor<'src>, Output = u64, Error = DescentError<'src>> {
    RadixParser {
        base: 16,
        marker: b'x',
        name: "hexadecimal",
    }
}

struct RadixParser {
    base: u64,
    marker: u8,
    name: &'static str,
}

fn digit_value(byte: u8, base: u64) -> Option<u64> {
    let value = match byte {
        b'0'..=b'9' => u64::from(byte - b'0'),
        b'a'..=b'f' => u64::from(byte - b'a') + 10,
        b'A'..=b'F' => u64::from(byte - b'A') + 10,
        _ => return None,
    };
    (value < base).then_some(value)
}

impl<'src> Parser<'src> for RadixParser {
    type Cursor = ByteCursor<'src>;
    type Output = u64;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(u64, Self::Cursor), Self::Error> {
        let (_, cursor) = is_byte(b'0').parse(cursor)?;
        let (_, mut cursor) = is_byte(self.marker).parse(cursor)?;

        match cursor.peek() {
            Ok(byte) if digit_value(byte, self.base).is_some() => {}
            Ok(byte) => {
                return Err(DescentError::Unexpected {
                    expected: format!("{} digit", self.name).into(),
                    found: show_byte(byte).into(),
                    loc: loc_at(cursor),
                });
            }
            Err(e) => return Err(e),
        }

        let mut value: u64 = 0;
        while let Ok(byte) = cursor.peek() {
            let Some(digit) = digit_value(byte, self.base) else {
                break;
            };
            value = value
                .checked_mul(self.base)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| DescentError::Message {
                    message: format!("{} number too large for u64", self.name).into(),
                    loc: loc_at(cursor),
                })?;
            cursor = cursor.advance();
        }
        Ok((value, cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexadecimal_stops_at_non_hex_digit() {
        let data = b"0xFFg";
        let (value, cursor) = hexadecimal().parse(ByteCursor::new(data)).unwrap();
        assert_eq!(value, 255);
        assert_eq!(cursor.peek().unwrap(), b'g');
    }

    #[test]
    fn hexadecimal_accepts_both_cases() {
        let (value, _) = hexadecimal().parse(ByteCursor::new(b"0xdeadBEEF")).unwrap();
        assert_eq!(value, 0xDEAD_BEEF);
    }

    #[test]
    fn binary_reads_bit_patterns() {
        let data = b"0b1010z";
        let (value, cursor) = binary().parse(ByteCursor::new(data)).unwrap();
        assert_eq!(value, 10);
        assert_eq!(cursor.peek().unwrap(), b'z');
    }

    #[test]
    fn binary_rejects_higher_digits() {
        // '2' is a digit but not a binary one; parsing stops before it.
        let data = b"0b102";
        let (value, cursor) = binary().parse(ByteCursor::new(data)).unwrap();
        assert_eq!(value, 2);
        assert_eq!(cursor.peek().unwrap(), b'2');
    }

    #[test]
    fn octal_reads_digits_up_to_seven() {
        let (value, cursor) = octal().parse(ByteCursor::new(b"0o7778")).unwrap();
        assert_eq!(value, 0o777);
        assert_eq!(cursor.peek().unwrap(), b'8');
    }

    #[test]
    fn prefix_is_mandatory() {
        assert!(hexadecimal().parse(ByteCursor::new(b"FF")).is_err());
        assert!(binary().parse(ByteCursor::new(b"1010")).is_err());
        assert!(octal().parse(ByteCursor::new(b"777")).is_err());
    }

    #[test]
    fn prefix_without_digits_fails() {
        let result = hexadecimal().parse(ByteCursor::new(b"0xg"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("hexadecimal digit")
        );
        assert!(hexadecimal().parse(ByteCursor::new(b"0x")).is_err());
    }

    #[test]
    fn overflow_is_an_error() {
        // 17 hex digits exceed 64 bits.
        let result = hexadecimal().parse(ByteCursor::new(b"0x10000000000000000"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn maximum_u64_roundtrips() {
        let (value, _) = hexadecimal()
            .parse(ByteCursor::new(b"0xFFFFFFFFFFFFFFFF"))
            .unwrap();
        assert_eq!(value, u64::MAX);
    }
}

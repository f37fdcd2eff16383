use crate::ByteCursor;
use crate::cursor::Cursor;
use crate::error::{DescentError, SourceLoc};
use crate::parser::Parser;

/// Render a byte for diagnostics: hex, plus the glyph when printable.
pub(crate) fn show_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("0x{:02X} ('{}')", byte, byte as char)
    } else {
        format!("0x{:02X}", byte)
    }
}

pub(crate) fn loc_at<'src>(cursor: ByteCursor<'src>) -> SourceLoc<'src> {
    let (data, position) = cursor.parts();
    SourceLoc::new(data, position)
}

/// Parser that consumes and returns any single byte.
pub struct AnyByte;

impl<'src> Parser<'src> for AnyByte {
    type Cursor = ByteCursor<'src>;
    type Output = u8;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(u8, Self::Cursor), Self::Error> {
        let byte = cursor.peek()?;
        Ok((byte, cursor.advance()))
    }
}

/// Convenience function to create a parser for any single byte.
pub fn byte() -> AnyByte {
    AnyByte
}

/// Parser that matches one specific byte.
pub struct IsByte {
    expected: u8,
}

impl<'src> Parser<'src> for IsByte {
    type Cursor = ByteCursor<'src>;
    type Output = u8;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(u8, Self::Cursor), Self::Error> {
        match cursor.peek() {
            Ok(byte) if byte == self.expected => Ok((byte, cursor.advance())),
            Ok(byte) => Err(DescentError::Unexpected {
                expected: show_byte(self.expected).into(),
                found: show_byte(byte).into(),
                loc: loc_at(cursor),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Convenience function to create a parser for a specific byte.
pub fn is_byte(expected: u8) -> IsByte {
    IsByte { expected }
}

/// Parser that matches a byte within an inclusive range.
pub struct ByteRange {
    lo: u8,
    hi: u8,
}

impl<'src> Parser<'src> for ByteRange {
    type Cursor = ByteCursor<'src>;
    type Output = u8;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(u8, Self::Cursor), Self::Error> {
        match cursor.peek() {
            Ok(byte) if (self.lo..=self.hi).contains(&byte) => Ok((byte, cursor.advance())),
            Ok(byte) => Err(DescentError::Unexpected {
                expected: format!("byte in {}..={}", show_byte(self.lo), show_byte(self.hi))
                    .into(),
                found: show_byte(byte).into(),
                loc: loc_at(cursor),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Convenience function to create a parser for a byte range (inclusive).
pub fn byte_range(lo: u8, hi: u8) -> ByteRange {
    ByteRange { lo, hi }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_byte_consumes_one() {
        let data = b"hello";
        let (value, cursor) = byte().parse(ByteCursor::new(data)).unwrap();
        assert_eq!(value, b'h');
        assert_eq!(cursor.peek().unwrap(), b'e');
    }

    #[test]
    fn any_byte_fails_at_end() {
        let data = b"x";
        let (_, cursor) = byte().parse(ByteCursor::new(data)).unwrap();
        assert!(byte().parse(cursor).is_err());
    }

    #[test]
    fn is_byte_matches() {
        let data = b"hi";
        let (value, cursor) = is_byte(b'h').parse(ByteCursor::new(data)).unwrap();
        assert_eq!(value, b'h');
        assert_eq!(cursor.peek().unwrap(), b'i');
    }

    #[test]
    fn is_byte_mismatch_names_both_bytes() {
        let data = b"world";
        let result = is_byte(b'h').parse(ByteCursor::new(data));
        let rendered = result.unwrap_err().to_string();
        assert!(rendered.contains("expected 0x68 ('h')"));
        assert!(rendered.contains("found 0x77 ('w')"));
    }

    #[test]
    fn is_byte_unprintable_renders_hex_only() {
        let data = &[0xFF, 0xFE];
        let result = is_byte(0xAA).parse(ByteCursor::new(data));
        let rendered = result.unwrap_err().to_string();
        assert!(rendered.contains("0xAA"));
        assert!(rendered.contains("0xFF"));
        assert!(!rendered.contains("('"));
    }

    #[test]
    fn byte_range_accepts_bounds() {
        for (input, expected) in [(&b"0"[..], b'0'), (&b"9"[..], b'9'), (&b"5"[..], b'5')] {
            let (value, _) = byte_range(b'0', b'9').parse(ByteCursor::new(input)).unwrap();
            assert_eq!(value, expected);
        }
    }

    #[test]
    fn byte_range_rejects_neighbours() {
        // '/' and ':' sit immediately outside '0'..='9'.
        for input in [&b"/"[..], &b":"[..]] {
            assert!(byte_range(b'0', b'9').parse(ByteCursor::new(input)).is_err());
        }
    }

    #[test]
    fn byte_range_empty_input() {
        let data = b"";
        assert!(byte_range(b'a', b'z').parse(ByteCursor::new(data)).is_err());
    }
}

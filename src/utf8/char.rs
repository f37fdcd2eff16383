use crate::ByteCursor;
use crate::byte::loc_at;
use crate::cursor::Cursor;
use crate::error::DescentError;
use crate::parser::Parser;
use std::borrow::Cow;

fn invalid<'src>(cursor: ByteCursor<'src>, message: impl Into<Cow<'static, str>>) -> DescentError<'src> {
    DescentError::Message {
        message: message.into(),
        loc: loc_at(cursor),
    }
}

/// Parser that decodes and consumes a single UTF-8 character.
///
/// The full validation rules apply: continuation bytes must carry the
/// `10` tag, overlong encodings and surrogate codepoints are rejected,
/// and a truncated sequence is an error rather than a partial read.
pub struct AnyChar;

impl<'src> Parser<'src> for AnyChar {
    type Cursor = ByteCursor<'src>;
    type Output = char;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(char, Self::Cursor), Self::Error> {
        let first = cursor.peek()?;
        if first < 0x80 {
            return Ok((first as char, cursor.advance()));
        }

        let (len, mut codepoint) = match first {
            0xC2..=0xDF => (2, u32::from(first & 0x1F)),
            0xE0..=0xEF => (3, u32::from(first & 0x0F)),
            0xF0..=0xF4 => (4, u32::from(first & 0x07)),
            _ => return Err(invalid(cursor, "invalid UTF-8 start byte")),
        };

        let mut walk = cursor.advance();
        for _ in 1..len {
            let byte = match walk.peek() {
                Ok(byte) => byte,
                Err(_) => return Err(invalid(cursor, "incomplete UTF-8 sequence")),
            };
            if byte & 0xC0 != 0x80 {
                return Err(invalid(walk, "invalid UTF-8 continuation byte"));
            }
            codepoint = (codepoint << 6) | u32::from(byte & 0x3F);
            walk = walk.advance();
        }

        let overlong = match len {
            3 => codepoint < 0x800,
            4 => codepoint < 0x10000,
            _ => false,
        };
        if overlong {
            return Err(invalid(cursor, "overlong UTF-8 encoding"));
        }

        match char::from_u32(codepoint) {
            Some(ch) => Ok((ch, walk)),
            None => Err(invalid(
                cursor,
                format!("invalid scalar value U+{:04X} (surrogate or out of range)", codepoint),
            )),
        }
    }
}

/// Convenience function to create a parser for any single character.
pub fn char() -> AnyChar {
    AnyChar
}

/// Parser that matches one specific character.
pub struct IsChar {
    expected: char,
}

impl<'src> Parser<'src> for IsChar {
    type Cursor = ByteCursor<'src>;
    type Output = char;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(char, Self::Cursor), Self::Error> {
        let (ch, rest) = AnyChar.parse(cursor)?;
        if ch == self.expected {
            Ok((ch, rest))
        } else {
            Err(DescentError::Unexpected {
                expected: format!("'{}'", self.expected).into(),
                found: format!("'{}'", ch).into(),
                loc: loc_at(cursor),
            })
        }
    }
}

/// Convenience function to create a parser for a specific character.
pub fn is_char(expected: char) -> IsChar {
    IsChar { expected }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_characters_decode() {
        let data = "hi".as_bytes();
        let (ch, cursor) = char().parse(ByteCursor::new(data)).unwrap();
        assert_eq!(ch, 'h');
        let (ch, cursor) = char().parse(cursor).unwrap();
        assert_eq!(ch, 'i');
        assert!(cursor.at_end());
    }

    #[test]
    fn multi_byte_widths_decode() {
        // 2, 3 and 4 byte encodings, cursor advancing by the right width.
        let data = "é€🦀".as_bytes();
        let cursor = ByteCursor::new(data);

        let (ch, cursor) = char().parse(cursor).unwrap();
        assert_eq!(ch, 'é');
        assert_eq!(cursor.position(), 2);

        let (ch, cursor) = char().parse(cursor).unwrap();
        assert_eq!(ch, '€');
        assert_eq!(cursor.position(), 5);

        let (ch, cursor) = char().parse(cursor).unwrap();
        assert_eq!(ch, '🦀');
        assert!(cursor.at_end());
    }

    #[test]
    fn boundary_codepoints_decode() {
        for (text, expected) in [
            ("\u{0080}", '\u{0080}'),
            ("\u{07FF}", '\u{07FF}'),
            ("\u{0800}", '\u{0800}'),
            ("\u{FFFF}", '\u{FFFF}'),
            ("\u{10000}", '\u{10000}'),
            ("\u{10FFFF}", '\u{10FFFF}'),
        ] {
            let (ch, _) = char().parse(ByteCursor::new(text.as_bytes())).unwrap();
            assert_eq!(ch, expected);
        }
    }

    #[test]
    fn bare_continuation_byte_is_rejected() {
        let data = &[0x80, 0x41];
        let result = char().parse(ByteCursor::new(data));
        assert!(result.unwrap_err().to_string().contains("start byte"));
    }

    #[test]
    fn truncated_sequences_are_rejected() {
        for data in [&[0xC3][..], &[0xE2, 0x82][..], &[0xF0, 0x9F, 0xA6][..]] {
            let result = char().parse(ByteCursor::new(data));
            assert!(result.unwrap_err().to_string().contains("incomplete"));
        }
    }

    #[test]
    fn bad_continuation_bytes_are_rejected() {
        for data in [&[0xC3, 0x41][..], &[0xE2, 0x82, 0xC0][..]] {
            let result = char().parse(ByteCursor::new(data));
            assert!(result.unwrap_err().to_string().contains("continuation"));
        }
    }

    #[test]
    fn overlong_encodings_are_rejected() {
        // 0xC0/0xC1 two-byte overlongs are invalid start bytes outright;
        // the three and four byte overlong ranges decode then fail.
        for data in [&[0xC0, 0x80][..], &[0xC1, 0xBF][..]] {
            let result = char().parse(ByteCursor::new(data));
            assert!(result.unwrap_err().to_string().contains("start byte"));
        }
        for data in [&[0xE0, 0x80, 0x80][..], &[0xF0, 0x80, 0x80, 0x80][..]] {
            let result = char().parse(ByteCursor::new(data));
            assert!(result.unwrap_err().to_string().contains("overlong"));
        }
    }

    #[test]
    fn surrogates_are_rejected() {
        // U+D800 encoded as three bytes.
        let data = &[0xED, 0xA0, 0x80];
        let result = char().parse(ByteCursor::new(data));
        assert!(result.unwrap_err().to_string().contains("surrogate"));
    }

    #[test]
    fn is_char_match_advances() {
        let data = "abc".as_bytes();
        let (ch, cursor) = is_char('a').parse(ByteCursor::new(data)).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.peek().unwrap(), b'b');
    }

    #[test]
    fn is_char_mismatch_names_both_characters() {
        let data = "xyz".as_bytes();
        let result = is_char('a').parse(ByteCursor::new(data));
        assert!(result.is_err());
        let rendered = result.unwrap_err().to_string();
        assert!(rendered.contains("expected 'a', found 'x'"));
    }

    #[test]
    fn is_char_works_outside_ascii() {
        let data = "🦀!".as_bytes();
        let (ch, cursor) = is_char('🦀').parse(ByteCursor::new(data)).unwrap();
        assert_eq!(ch, '🦀');
        assert_eq!(cursor.peek().unwrap(), b'!');
    }
}

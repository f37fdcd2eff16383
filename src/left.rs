use crate::and::AndError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and keeps only the first
/// result.
///
/// Same consumption and failure behaviour as [`crate::and::And`]; only the
/// second value is discarded.
pub struct Left<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Left<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Left { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for Left<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;
    type Error = AndError<P1::Error, P2::Error>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (kept, cursor) = self.first.parse(cursor).map_err(AndError::First)?;
        let (_, cursor) = self.second.parse(cursor).map_err(AndError::Second)?;
        Ok((kept, cursor))
    }
}

/// Convenience function to create a Left parser.
pub fn left<'src, P1, P2>(first: P1, second: P2) -> Left<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
{
    Left::new(first, second)
}

/// Extension trait to add `.left()` method support for parsers.
pub trait LeftExt<'src>: Parser<'src> + Sized {
    /// Parse `self` then `other`, keeping `self`'s value.
    fn left<P>(self, other: P) -> Left<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor>,
    {
        Left::new(self, other)
    }
}

impl<'src, P> LeftExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteCursor;
    use crate::byte::is_byte;
    use crate::cursor::Cursor;

    #[test]
    fn keeps_first_discards_second() {
        let data = b"a;x";
        let parser = is_byte(b'a').left(is_byte(b';'));

        let (value, cursor) = parser.parse(ByteCursor::new(data)).unwrap();
        assert_eq!(value, b'a');
        assert_eq!(cursor.peek().unwrap(), b'x');
    }

    #[test]
    fn discarded_side_must_still_match() {
        let data = b"a:x";
        let parser = is_byte(b'a').left(is_byte(b';'));
        assert!(parser.parse(ByteCursor::new(data)).is_err());
    }

    #[test]
    fn function_syntax() {
        let data = b"12";
        let parser = left(is_byte(b'1'), is_byte(b'2'));
        let (value, cursor) = parser.parse(ByteCursor::new(data)).unwrap();
        assert_eq!(value, b'1');
        assert!(cursor.at_end());
    }
}

use crate::error::{CompositeError, LocatedError};
use crate::parser::Parser;
use std::fmt;

/// Error for sequencing combinators, tagging which side failed.
#[derive(Debug)]
pub enum AndError<E1, E2> {
    First(E1),
    Second(E2),
}

impl<E1: fmt::Display, E2: fmt::Display> fmt::Display for AndError<E1, E2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AndError::First(e) => write!(f, "{}", e),
            AndError::Second(e) => write!(f, "{}", e),
        }
    }
}

impl<E1, E2> std::error::Error for AndError<E1, E2>
where
    E1: fmt::Display + fmt::Debug,
    E2: fmt::Display + fmt::Debug,
{
}

impl<'src, E1, E2> CompositeError<'src> for AndError<E1, E2>
where
    E1: CompositeError<'src>,
    E2: CompositeError<'src, Element = E1::Element>,
{
    type Element = E1::Element;

    fn deepest(&self) -> &dyn LocatedError<'src, Element = Self::Element> {
        match self {
            AndError::First(e) => e.deepest(),
            AndError::Second(e) => e.deepest(),
        }
    }
}

/// Parser combinator that runs two parsers in sequence and pairs their
/// results.
///
/// The second parser starts from the remainder left by the first. If
/// either side fails the whole sequence fails, and because failure carries
/// no cursor the caller observes no partial consumption.
///
/// Chained `.and()` calls nest: `a.and(b).and(c)` produces `((A, B), C)`.
/// For a flat tuple use [`crate::seq::seq`].
pub struct And<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        And { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for And<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);
    type Error = AndError<P1::Error, P2::Error>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (first, cursor) = self.first.parse(cursor).map_err(AndError::First)?;
        let (second, cursor) = self.second.parse(cursor).map_err(AndError::Second)?;
        Ok(((first, second), cursor))
    }
}

/// Convenience function to create an And parser.
pub fn and<'src, P1, P2>(first: P1, second: P2) -> And<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
{
    And::new(first, second)
}

/// Extension trait to add `.and()` method support for parsers.
pub trait AndExt<'src>: Parser<'src> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }
}

impl<'src, P> AndExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteCursor;
    use crate::byte::is_byte;
    use crate::cursor::Cursor;

    #[test]
    fn pairs_both_results() {
        let data = b"ab rest";
        let parser = is_byte(b'a').and(is_byte(b'b'));

        let ((a, b), cursor) = parser.parse(ByteCursor::new(data)).unwrap();
        assert_eq!(a, b'a');
        assert_eq!(b, b'b');
        assert_eq!(cursor.peek().unwrap(), b' ');
    }

    #[test]
    fn first_failure_aborts() {
        let data = b"xb";
        let parser = is_byte(b'a').and(is_byte(b'b'));
        assert!(matches!(
            parser.parse(ByteCursor::new(data)),
            Err(AndError::First(_))
        ));
    }

    #[test]
    fn second_failure_aborts() {
        let data = b"ax";
        let parser = is_byte(b'a').and(is_byte(b'b'));
        assert!(matches!(
            parser.parse(ByteCursor::new(data)),
            Err(AndError::Second(_))
        ));
    }

    #[test]
    fn caller_cursor_survives_partial_consumption() {
        let data = b"ax";
        let cursor = ByteCursor::new(data);
        let parser = is_byte(b'a').and(is_byte(b'b'));

        assert!(parser.parse(cursor).is_err());
        // The original cursor still points at the start.
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.peek().unwrap(), b'a');
    }

    #[test]
    fn chains_nest_pairs() {
        let data = b"xyz";
        let parser = is_byte(b'x').and(is_byte(b'y')).and(is_byte(b'z'));

        let (((x, y), z), cursor) = parser.parse(ByteCursor::new(data)).unwrap();
        assert_eq!((x, y, z), (b'x', b'y', b'z'));
        assert!(cursor.at_end());
    }

    #[test]
    fn deepest_failure_is_the_failing_side() {
        let data = b"ax";
        let parser = and(is_byte(b'a'), is_byte(b'b'));

        let error = parser.parse(ByteCursor::new(data)).unwrap_err();
        assert_eq!(error.deepest().loc().position(), 1);
    }
}

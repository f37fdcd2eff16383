use crate::and::AndError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and keeps only the second
/// result.
///
/// The mirror of [`crate::left::Left`], typically used to skip a leading
/// delimiter or keyword.
pub struct Right<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Right<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Right { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for Right<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;
    type Error = AndError<P1::Error, P2::Error>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (_, cursor) = self.first.parse(cursor).map_err(AndError::First)?;
        let (kept, cursor) = self.second.parse(cursor).map_err(AndError::Second)?;
        Ok((kept, cursor))
    }
}

/// Convenience function to create a Right parser.
pub fn right<'src, P1, P2>(first: P1, second: P2) -> Right<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
{
    Right::new(first, second)
}

/// Extension trait to add `.right()` method support for parsers.
pub trait RightExt<'src>: Parser<'src> + Sized {
    /// Parse `self` then `other`, keeping `other`'s value.
    fn right<P>(self, other: P) -> Right<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor>,
    {
        Right::new(self, other)
    }
}

impl<'src, P> RightExt<'src> for P where P: Parser<'src> {}

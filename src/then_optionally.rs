use crate::parser::Parser;

/// Parser combinator that sequences two parsers where the second is
/// optional.
///
/// Returns the first parser's value paired with `Some` of the second's
/// when it matched, `None` when it did not (in which case its consumption
/// is discarded). Only the first parser can fail the combination.
pub struct ThenOptionally<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> ThenOptionally<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        ThenOptionally { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for ThenOptionally<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, Option<P2::Output>);
    type Error = P1::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (first, cursor) = self.first.parse(cursor)?;
        match self.second.parse(cursor) {
            Ok((second, cursor)) => Ok(((first, Some(second)), cursor)),
            Err(_) => Ok(((first, None), cursor)),
        }
    }
}

/// Convenience function to create a ThenOptionally parser.
pub fn then_optionally<'src, P1, P2>(first: P1, second: P2) -> ThenOptionally<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
{
    ThenOptionally::new(first, second)
}

/// Extension trait to add `.then_optionally()` method support for parsers.
pub trait ThenOptionallyExt<'src>: Parser<'src> + Sized {
    fn then_optionally<P>(self, other: P) -> ThenOptionally<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor>,
    {
        ThenOptionally::new(self, other)
    }
}

impl<'src, P> ThenOptionallyExt<'src> for P where P: Parser<'src> {}

use crate::parser::Parser;

/// Parser combinator that applies a parser an exact number of times.
///
/// Fails with the first failing application's error; no partial list is
/// ever returned, and because failure carries no cursor the caller
/// observes no partial consumption either.
pub struct Exactly<P> {
    parser: P,
    count: usize,
}

impl<P> Exactly<P> {
    pub fn new(parser: P, count: usize) -> Self {
        Exactly { parser, count }
    }
}

impl<'src, P> Parser<'src> for Exactly<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(
        &self,
        mut cursor: Self::Cursor,
    ) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let mut results = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let (value, next) = self.parser.parse(cursor)?;
            results.push(value);
            cursor = next;
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create an Exactly parser.
pub fn exactly<'src, P>(parser: P, count: usize) -> Exactly<P>
where
    P: Parser<'src>,
{
    Exactly::new(parser, count)
}

/// Extension trait to add `.exactly()` method support for parsers.
pub trait ExactlyExt<'src>: Parser<'src> + Sized {
    fn exactly(self, count: usize) -> Exactly<Self> {
        Exactly::new(self, count)
    }
}

impl<'src, P> ExactlyExt<'src> for P where P: Parser<'src> {}

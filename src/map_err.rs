use crate::parser::Parser;

/// Parser combinator that transforms the error of a parser.
///
/// Mostly used to collapse a combinator error tree into a single concrete
/// error type at an API boundary.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<'src, P, F, E> Parser<'src> for MapErr<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Error) -> E,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = E;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), E> {
        self.parser.parse(cursor).map_err(&self.mapper)
    }
}

/// Convenience function to create a MapErr parser.
pub fn map_err<'src, P, F, E>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Error) -> E,
{
    MapErr::new(parser, mapper)
}

/// Extension trait to add `.map_err()` method support for parsers.
pub trait MapErrExt<'src>: Parser<'src> + Sized {
    fn map_err<F, E>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> E,
    {
        MapErr::new(self, mapper)
    }
}

impl<'src, P> MapErrExt<'src> for P where P: Parser<'src> {}

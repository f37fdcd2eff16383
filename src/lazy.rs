use crate::parser::Parser;
use std::marker::PhantomData;

/// A parser that defers construction of the real parser until parse time.
///
/// Recursive grammars need this: a parser for nested expressions cannot
/// contain itself by value, but it can contain a factory that builds the
/// inner parser on demand.
pub struct Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    factory: F,
    _marker: PhantomData<&'src ()>,
}

impl<'src, F, P> Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    pub fn new(factory: F) -> Self {
        Lazy {
            factory,
            _marker: PhantomData,
        }
    }
}

impl<'src, F, P> Parser<'src> for Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        (self.factory)().parse(cursor)
    }
}

/// Convenience function to create a lazy parser.
pub fn lazy<'src, F, P>(factory: F) -> Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    Lazy::new(factory)
}

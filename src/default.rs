use crate::cursor::Cursor;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds with `T::default()` without consuming
/// input.
///
/// Useful as the last alternative of an `or` chain to make a construct
/// optional with a fallback value.
pub struct DefaultParser<T, C> {
    _marker: PhantomData<fn(C) -> T>,
}

impl<T, C> DefaultParser<T, C> {
    pub fn new() -> Self {
        DefaultParser {
            _marker: PhantomData,
        }
    }
}

impl<T, C> Default for DefaultParser<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src, T, C> Parser<'src> for DefaultParser<T, C>
where
    T: Default,
    C: Cursor<'src>,
{
    type Cursor = C;
    type Output = T;
    type Error = C::Error;

    fn parse(&self, cursor: C) -> Result<(T, C), Self::Error> {
        Ok((T::default(), cursor))
    }
}

/// Convenience function to create a default parser.
pub fn default<T, C>() -> DefaultParser<T, C>
where
    T: Default,
{
    DefaultParser::new()
}

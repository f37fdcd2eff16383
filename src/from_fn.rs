use crate::cursor::Cursor;
use crate::parser::Parser;
use std::marker::PhantomData;

/// A parser built directly from a function.
///
/// This is the primitive creation path: every other parser in the crate
/// could be expressed through it. The function receives a cursor and
/// returns either the parsed value with the advanced cursor, or an error.
pub struct FromFn<F, C, O, E> {
    function: F,
    _marker: PhantomData<fn(C) -> (O, E)>,
}

impl<F, C, O, E> FromFn<F, C, O, E> {
    pub fn new(function: F) -> Self {
        FromFn {
            function,
            _marker: PhantomData,
        }
    }
}

impl<'src, F, C, O, E> Parser<'src> for FromFn<F, C, O, E>
where
    C: Cursor<'src>,
    F: Fn(C) -> Result<(O, C), E>,
{
    type Cursor = C;
    type Output = O;
    type Error = E;

    fn parse(&self, cursor: C) -> Result<(O, C), E> {
        (self.function)(cursor)
    }
}

/// Convenience function to build a parser from a raw parse function.
pub fn from_fn<'src, F, C, O, E>(function: F) -> FromFn<F, C, O, E>
where
    C: Cursor<'src>,
    F: Fn(C) -> Result<(O, C), E>,
{
    FromFn::new(function)
}

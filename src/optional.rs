use crate::parser::Parser;

/// Parser combinator that turns failure into `None`.
///
/// Succeeds with `Some(value)` and the advanced cursor when the inner
/// parser succeeds; succeeds with `None` and the *untouched* cursor when
/// it fails. It never fails itself.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'src, P> Parser<'src> for Optional<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;
    // Declared for composition; `parse` never produces one.
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser.
pub fn optional<'src, P>(parser: P) -> Optional<P>
where
    P: Parser<'src>,
{
    Optional::new(parser)
}

/// Extension trait to add `.optional()` method support for parsers.
pub trait OptionalExt<'src>: Parser<'src> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'src, P> OptionalExt<'src> for P where P: Parser<'src> {}

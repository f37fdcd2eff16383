use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser combinator that repeatedly applies a parser, collecting results
/// until a predicate matches one.
///
/// The item that satisfies the predicate is *not* consumed: the returned
/// cursor still points at it. Running out of input ends the collection
/// successfully; an inner parse failure before that is propagated.
pub struct TakeUntil<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> TakeUntil<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        TakeUntil { parser, predicate }
    }
}

impl<'src, P, F> Parser<'src> for TakeUntil<P, F>
where
    P: Parser<'src>,
    F: Fn(&P::Output) -> bool,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(
        &self,
        mut cursor: Self::Cursor,
    ) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let mut results = Vec::new();
        loop {
            if cursor.at_end() {
                return Ok((results, cursor));
            }
            let (item, next) = self.parser.parse(cursor)?;
            if (self.predicate)(&item) {
                return Ok((results, cursor));
            }
            let stalled = next.position() == cursor.position();
            results.push(item);
            cursor = next;
            if stalled {
                return Ok((results, cursor));
            }
        }
    }
}

/// Convenience function to create a TakeUntil parser.
pub fn take_until<'src, P, F>(parser: P, predicate: F) -> TakeUntil<P, F>
where
    P: Parser<'src>,
    F: Fn(&P::Output) -> bool,
{
    TakeUntil::new(parser, predicate)
}

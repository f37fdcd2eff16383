use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences.
///
/// The first application must succeed; its error is surfaced otherwise.
/// After that it behaves like [`crate::many::Many`]: the failure that ends
/// the repetition is swallowed, and a zero-width success ends the
/// repetition after being collected.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'src, P> Parser<'src> for Some<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (first, next) = self.parser.parse(cursor)?;
        let mut results = vec![first];
        if next.position() == cursor.position() {
            return Ok((results, next));
        }

        let mut cursor = next;
        loop {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    let stalled = next.position() == cursor.position();
                    results.push(value);
                    cursor = next;
                    if stalled {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser.
pub fn some<'src, P>(parser: P) -> Some<P>
where
    P: Parser<'src>,
{
    Some::new(parser)
}

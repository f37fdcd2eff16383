use crate::atom::Atom;
use crate::cursor::Cursor;
use crate::error::{DescentError, SourceLoc};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator for negative lookahead.
///
/// Succeeds with `()` when the inner parser fails at the current position
/// and fails when it succeeds. Never consumes input either way.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'src, P> Parser<'src> for Not<P>
where
    P: Parser<'src>,
    <P::Cursor as Cursor<'src>>::Element: Atom + 'src,
{
    type Cursor = P::Cursor;
    type Output = ();
    type Error = DescentError<'src, <P::Cursor as Cursor<'src>>::Element>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        match self.parser.parse(cursor) {
            Ok(_) => {
                let (data, position) = cursor.parts();
                Err(DescentError::Message {
                    message: Cow::Borrowed("negative lookahead matched"),
                    loc: SourceLoc::new(data, position),
                })
            }
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser.
pub fn not<'src, P>(parser: P) -> Not<P>
where
    P: Parser<'src>,
{
    Not::new(parser)
}

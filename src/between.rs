use crate::error::{CompositeError, LocatedError};
use crate::parser::Parser;
use std::fmt;

/// Error for the between combinator, tagging which of the three parts
/// failed.
#[derive(Debug)]
pub enum BetweenError<E1, E2, E3> {
    Open(E1),
    Content(E2),
    Close(E3),
}

impl<E1, E2, E3> fmt::Display for BetweenError<E1, E2, E3>
where
    E1: fmt::Display,
    E2: fmt::Display,
    E3: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetweenError::Open(e) => write!(f, "opening delimiter: {}", e),
            BetweenError::Content(e) => write!(f, "{}", e),
            BetweenError::Close(e) => write!(f, "closing delimiter: {}", e),
        }
    }
}

impl<E1, E2, E3> std::error::Error for BetweenError<E1, E2, E3>
where
    E1: fmt::Display + fmt::Debug,
    E2: fmt::Display + fmt::Debug,
    E3: fmt::Display + fmt::Debug,
{
}

impl<'src, E1, E2, E3> CompositeError<'src> for BetweenError<E1, E2, E3>
where
    E1: CompositeError<'src>,
    E2: CompositeError<'src, Element = E1::Element>,
    E3: CompositeError<'src, Element = E1::Element>,
{
    type Element = E1::Element;

    fn deepest(&self) -> &dyn LocatedError<'src, Element = Self::Element> {
        match self {
            BetweenError::Open(e) => e.deepest(),
            BetweenError::Content(e) => e.deepest(),
            BetweenError::Close(e) => e.deepest(),
        }
    }
}

/// Parser combinator for delimited content: `open content close`, keeping
/// only the content's value.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'src, P1, P2, P3> Parser<'src> for Between<P1, P2, P3>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
    P3: Parser<'src, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;
    type Error = BetweenError<P1::Error, P2::Error, P3::Error>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (_, cursor) = self.open.parse(cursor).map_err(BetweenError::Open)?;
        let (content, cursor) = self.content.parse(cursor).map_err(BetweenError::Content)?;
        let (_, cursor) = self.close.parse(cursor).map_err(BetweenError::Close)?;
        Ok((content, cursor))
    }
}

/// Convenience function to create a Between parser.
pub fn between<'src, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor>,
    P3: Parser<'src, Cursor = P1::Cursor>,
{
    Between::new(open, content, close)
}

use crate::atom::Atom;
use crate::error::{CompositeError, DescentError, LocatedError};
use crate::parser::Parser;
use std::fmt;

/// Error produced when both sides of an ordered choice fail.
///
/// Both failures are kept: `deepest()` reports whichever progressed
/// further into the input, with ties going to the second alternative since
/// it was tried last.
#[derive(Debug)]
pub struct OrError<E1, E2> {
    pub first: E1,
    pub second: E2,
}

impl<E1: fmt::Display, E2: fmt::Display> fmt::Display for OrError<E1, E2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "no alternative matched")?;
        writeln!(f, "first alternative: {}", self.first)?;
        write!(f, "second alternative: {}", self.second)
    }
}

impl<E1, E2> std::error::Error for OrError<E1, E2>
where
    E1: fmt::Display + fmt::Debug,
    E2: fmt::Display + fmt::Debug,
{
}

impl<'src, E1, E2> CompositeError<'src> for OrError<E1, E2>
where
    E1: CompositeError<'src>,
    E2: CompositeError<'src, Element = E1::Element>,
    E1::Element: 'src,
{
    type Element = E1::Element;

    fn deepest(&self) -> &dyn LocatedError<'src, Element = Self::Element> {
        let first = self.first.deepest();
        let second = self.second.deepest();
        if second.loc().position() >= first.loc().position() {
            second
        } else {
            first
        }
    }
}

impl<E1, E2> OrError<E1, E2> {
    /// Collapse to a [`DescentError`] carrying the alternative that
    /// progressed furthest (ties go to the second alternative).
    pub fn furthest<'src, T>(self) -> DescentError<'src, T>
    where
        T: Atom + 'src,
        E1: CompositeError<'src, Element = T> + 'src,
        E2: CompositeError<'src, Element = T> + 'src,
    {
        let first = self.first.deepest().loc().position();
        let second = self.second.deepest().loc().position();
        if second >= first {
            DescentError::wrap(self.second)
        } else {
            DescentError::wrap(self.first)
        }
    }
}

/// Parser combinator for ordered choice.
///
/// The first parser runs against the incoming cursor; if it fails, the
/// second runs against that *same* cursor, so anything the first consumed
/// before failing is invisible to the second. The first success wins and
/// is returned unmodified.
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'src, P1, P2> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;
    type Error = OrError<P1::Error, P2::Error>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        match self.first.parse(cursor) {
            Ok(hit) => Ok(hit),
            Err(first) => match self.second.parse(cursor) {
                Ok(hit) => Ok(hit),
                Err(second) => Err(OrError { first, second }),
            },
        }
    }
}

/// Convenience function to create an Or parser.
pub fn or<'src, P1, P2>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor, Output = P1::Output>,
{
    Or::new(first, second)
}

/// Extension trait to add `.or()` method support for parsers.
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}

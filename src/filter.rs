use crate::atom::Atom;
use crate::cursor::Cursor;
use crate::error::{CompositeError, DescentError, LocatedError, SourceLoc};
use crate::parser::Parser;
use std::borrow::Cow;
use std::fmt;

/// Error for the filter combinator: either the inner parser failed, or it
/// succeeded and the predicate rejected its value.
#[derive(Debug)]
pub enum FilterError<'src, E, T: Atom = u8> {
    Parser(E),
    Rejected(DescentError<'src, T>),
}

impl<'src, E: fmt::Display, T: Atom> fmt::Display for FilterError<'src, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::Parser(e) => write!(f, "{}", e),
            FilterError::Rejected(e) => write!(f, "{}", e),
        }
    }
}

impl<'src, E, T: Atom> std::error::Error for FilterError<'src, E, T> where
    E: fmt::Display + fmt::Debug
{
}

impl<'src, E, T> CompositeError<'src> for FilterError<'src, E, T>
where
    E: CompositeError<'src, Element = T>,
    T: Atom + 'src,
{
    type Element = T;

    fn deepest(&self) -> &dyn LocatedError<'src, Element = T> {
        match self {
            FilterError::Parser(e) => e.deepest(),
            FilterError::Rejected(e) => e,
        }
    }
}

/// Parser combinator that runs a predicate over a successful parse.
///
/// On rejection the reported location is the position *before* the inner
/// parser ran, and the advanced cursor is dropped: a rejected value must
/// look exactly like a parser that never consumed anything, or ordered
/// choice over filtered parsers would resume from the wrong place.
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    message: Cow<'static, str>,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F, message: Cow<'static, str>) -> Self {
        Filter {
            parser,
            predicate,
            message,
        }
    }
}

impl<'src, P, F> Parser<'src> for Filter<P, F>
where
    P: Parser<'src>,
    <P::Cursor as Cursor<'src>>::Element: Atom + 'src,
    F: Fn(&P::Output) -> bool,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = FilterError<'src, P::Error, <P::Cursor as Cursor<'src>>::Element>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (value, advanced) = self.parser.parse(cursor).map_err(FilterError::Parser)?;
        if (self.predicate)(&value) {
            Ok((value, advanced))
        } else {
            let (data, position) = cursor.parts();
            Err(FilterError::Rejected(DescentError::Message {
                message: self.message.clone(),
                loc: SourceLoc::new(data, position),
            }))
        }
    }
}

/// Convenience function to create a filtered parser.
pub fn filter<'src, P, F>(
    parser: P,
    predicate: F,
    message: impl Into<Cow<'static, str>>,
) -> Filter<P, F>
where
    P: Parser<'src>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(parser, predicate, message.into())
}

/// Extension trait to add `.filter()` method support for parsers.
pub trait FilterExt<'src>: Parser<'src> + Sized {
    fn filter<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate, message.into())
    }
}

impl<'src, P> FilterExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteCursor;
    use crate::byte::byte;
    use crate::or::OrExt;

    #[test]
    fn passes_accepted_values_through() {
        let data = b"q7";
        let parser = byte().filter(|b| b.is_ascii_alphabetic(), "expected a letter");

        let (value, cursor) = parser.parse(ByteCursor::new(data)).unwrap();
        assert_eq!(value, b'q');
        assert_eq!(cursor.peek().unwrap(), b'7');
    }

    #[test]
    fn rejection_uses_the_given_message() {
        let data = b"7";
        let parser = byte().filter(|b| b.is_ascii_alphabetic(), "expected a letter");

        let error = parser.parse(ByteCursor::new(data)).unwrap_err();
        assert!(error.to_string().contains("expected a letter"));
    }

    #[test]
    fn rejection_reports_the_original_position() {
        let data = b"ab7";
        let cursor = ByteCursor::new(data).advance().advance();
        let parser = byte().filter(|b| b.is_ascii_alphabetic(), "expected a letter");

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.deepest().loc().position(), 2);
    }

    #[test]
    fn rejected_consumption_is_invisible_to_alternatives() {
        // The filtered parser consumes the byte before rejecting it; the
        // alternative must still see that byte.
        let data = b"7x";
        let letter = byte().filter(|b: &u8| b.is_ascii_alphabetic(), "expected a letter");
        let digit = byte().filter(|b: &u8| b.is_ascii_digit(), "expected a digit");
        let parser = letter.or(digit);

        let (value, cursor) = parser.parse(ByteCursor::new(data)).unwrap();
        assert_eq!(value, b'7');
        assert_eq!(cursor.peek().unwrap(), b'x');
    }

    #[test]
    fn chained_filters_must_all_accept() {
        let data = b"A";
        let parser = byte()
            .filter(|b| b.is_ascii_alphabetic(), "expected a letter")
            .filter(|b| b.is_ascii_uppercase(), "expected uppercase");

        let (value, _) = parser.parse(ByteCursor::new(data)).unwrap();
        assert_eq!(value, b'A');

        let data = b"a";
        let error = parser.parse(ByteCursor::new(data)).unwrap_err();
        assert!(error.to_string().contains("expected uppercase"));
    }

    #[test]
    fn inner_parser_failure_passes_through() {
        let data = b"";
        let parser = byte().filter(|_| true, "unused");
        assert!(matches!(
            parser.parse(ByteCursor::new(data)),
            Err(FilterError::Parser(_))
        ));
    }
}

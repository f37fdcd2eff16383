use crate::atom::Atom;
use crate::cursor::Cursor;
use crate::parser::Parser;

/// A half-open region of the source covered by a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'src, T: Atom = u8> {
    pub source: &'src [T],
    /// Start position (inclusive).
    pub start: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'src, T: Atom> Span<'src, T> {
    pub fn new(source: &'src [T], start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The covered slice of the source.
    pub fn slice(&self) -> &'src [T] {
        &self.source[self.start..self.end]
    }

    /// Render the covered slice for display.
    pub fn as_string(&self) -> String {
        T::format_slice(self.slice())
    }
}

/// Parser combinator that records the span a successful parse covered.
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'src, P> Parser<'src> for Spanned<P>
where
    P: Parser<'src>,
    <P::Cursor as Cursor<'src>>::Element: Atom + 'src,
{
    type Cursor = P::Cursor;
    type Output = (P::Output, Span<'src, <P::Cursor as Cursor<'src>>::Element>);
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let start = cursor.position();
        let source = cursor.source();
        let (value, cursor) = self.parser.parse(cursor)?;
        let span = Span::new(source, start, cursor.position());
        Ok(((value, span), cursor))
    }
}

/// Convenience function to create a Spanned parser.
pub fn spanned<P>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}

/// Extension trait to add `.with_span()` method support for parsers.
pub trait SpannedExt<'src>: Parser<'src> + Sized {
    /// Pair this parser's value with the span it consumed.
    fn with_span(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<'src, P> SpannedExt<'src> for P where P: Parser<'src> {}

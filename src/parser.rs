use crate::cursor::Cursor;

/// Core trait for parser combinators.
///
/// A parser is an immutable value: applying it never changes it, and the
/// same parser with the same cursor always produces the same result. On
/// success it returns the parsed value and the cursor past the consumed
/// prefix; on failure it returns only an error, so the caller's cursor is
/// untouched and alternatives can retry from the same position.
pub trait Parser<'src> {
    /// The input-position type this parser reads from.
    type Cursor: Cursor<'src>;
    /// The value produced on success.
    type Output;
    /// The error produced on failure.
    type Error;

    fn parse(
        &self,
        cursor: Self::Cursor,
    ) -> Result<(Self::Output, Self::Cursor), Self::Error>;
}

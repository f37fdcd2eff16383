use std::error::Error;

/// Generic input position for parsers.
///
/// A cursor is an immutable, copyable view into a sequence of elements.
/// Advancing never mutates: it returns a new cursor, so a saved copy always
/// points where it pointed before. That property is what makes backtracking
/// in the combinators structural rather than something each parser has to
/// undo by hand.
pub trait Cursor<'src>: Copy + Clone + Sized {
    /// The type of elements this cursor iterates over.
    type Element;

    /// Error produced when a cursor operation runs out of input.
    type Error: Error;

    /// The element at the current position, or an error at end of input.
    fn peek(&self) -> Result<Self::Element, Self::Error>;

    /// Drop the first element. Saturates: advancing an end-of-input cursor
    /// yields an end-of-input cursor.
    fn advance(self) -> Self;

    /// Drop the first element, erring if the result would be past the end.
    fn try_advance(self) -> Result<Self, Self::Error>;

    /// Absolute offset into the source. End-of-input cursors report the
    /// source length.
    fn position(&self) -> usize;

    /// Whether there is nothing left to read.
    fn at_end(&self) -> bool {
        self.peek().is_err()
    }

    /// The full underlying source.
    fn source(&self) -> &'src [Self::Element];

    /// Decompose into the source slice and the current offset.
    fn parts(self) -> (&'src [Self::Element], usize);
}

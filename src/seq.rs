use crate::atom::Atom;
use crate::cursor::Cursor;
use crate::error::{CompositeError, LocatedError};
use crate::parser::Parser;
use std::fmt;

/// Error for N-ary sequencing: the zero-based index of the step that
/// failed, plus its error.
///
/// The step errors of a tuple of parsers have distinct types, so the
/// failing one is boxed behind [`CompositeError`]; furthest-failure
/// selection still works through `deepest()`.
#[derive(Debug)]
pub struct SeqError<'src, T: Atom> {
    step: usize,
    inner: Box<dyn CompositeError<'src, Element = T> + 'src>,
}

impl<'src, T: Atom> SeqError<'src, T> {
    fn at(step: usize, error: impl CompositeError<'src, Element = T> + 'src) -> Self {
        SeqError {
            step,
            inner: Box::new(error),
        }
    }

    /// Zero-based index of the parser that failed.
    pub fn step(&self) -> usize {
        self.step
    }
}

impl<'src, T: Atom> fmt::Display for SeqError<'src, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sequence step {} failed: {}", self.step + 1, self.inner)
    }
}

impl<'src, T: Atom> std::error::Error for SeqError<'src, T> {}

impl<'src, T: Atom> CompositeError<'src> for SeqError<'src, T> {
    type Element = T;

    fn deepest(&self) -> &dyn LocatedError<'src, Element = T> {
        self.inner.deepest()
    }
}

/// Parser combinator that runs a tuple of parsers in order and returns the
/// flat tuple of their results.
///
/// Binary [`crate::and::And`] nests into pairs of pairs; `seq` exists
/// purely for the flat-tuple ergonomics. One impl per arity is generated
/// below because the type system cannot abstract over tuple length; the
/// semantics are exactly nested `and` plus flattening.
pub struct Seq<T> {
    parsers: T,
}

/// Combine a tuple of 2 to 10 parsers into one parser producing the tuple
/// of their results.
pub fn seq<T>(parsers: T) -> Seq<T> {
    Seq { parsers }
}

macro_rules! impl_seq {
    ($P0:ident $p0:ident $idx0:tt, $( $P:ident $p:ident $idx:tt ),+) => {
        impl<'src, $P0, $($P),+> Parser<'src> for Seq<($P0, $($P),+)>
        where
            $P0: Parser<'src>,
            <$P0::Cursor as Cursor<'src>>::Element: Atom + 'src,
            $P0::Error:
                CompositeError<'src, Element = <$P0::Cursor as Cursor<'src>>::Element> + 'src,
            $(
                $P: Parser<'src, Cursor = $P0::Cursor>,
                $P::Error:
                    CompositeError<'src, Element = <$P0::Cursor as Cursor<'src>>::Element> + 'src,
            )+
        {
            type Cursor = $P0::Cursor;
            type Output = ($P0::Output, $($P::Output),+);
            type Error = SeqError<'src, <$P0::Cursor as Cursor<'src>>::Element>;

            fn parse(
                &self,
                cursor: Self::Cursor,
            ) -> Result<(Self::Output, Self::Cursor), Self::Error> {
                let ($p0, cursor) = self
                    .parsers
                    .$idx0
                    .parse(cursor)
                    .map_err(|e| SeqError::at($idx0, e))?;
                $(
                    let ($p, cursor) = self
                        .parsers
                        .$idx
                        .parse(cursor)
                        .map_err(|e| SeqError::at($idx, e))?;
                )+
                Ok((($p0, $($p),+), cursor))
            }
        }
    };
}

impl_seq!(P0 p0 0, P1 p1 1);
impl_seq!(P0 p0 0, P1 p1 1, P2 p2 2);
impl_seq!(P0 p0 0, P1 p1 1, P2 p2 2, P3 p3 3);
impl_seq!(P0 p0 0, P1 p1 1, P2 p2 2, P3 p3 3, P4 p4 4);
impl_seq!(P0 p0 0, P1 p1 1, P2 p2 2, P3 p3 3, P4 p4 4, P5 p5 5);
impl_seq!(P0 p0 0, P1 p1 1, P2 p2 2, P3 p3 3, P4 p4 4, P5 p5 5, P6 p6 6);
impl_seq!(P0 p0 0, P1 p1 1, P2 p2 2, P3 p3 3, P4 p4 4, P5 p5 5, P6 p6 6, P7 p7 7);
impl_seq!(P0 p0 0, P1 p1 1, P2 p2 2, P3 p3 3, P4 p4 4, P5 p5 5, P6 p6 6, P7 p7 7, P8 p8 8);
impl_seq!(
    P0 p0 0, P1 p1 1, P2 p2 2, P3 p3 3, P4 p4 4, P5 p5 5, P6 p6 6, P7 p7 7, P8 p8 8, P9 p9 9
);

use crate::atom::Atom;
use crate::cursor::Cursor;
use crate::error::{DescentError, SourceLoc};

/// A cursor over a slice of atoms.
///
/// The end state keeps the source so exhausted cursors can still report
/// positions and render diagnostics.
#[derive(Debug, Copy, Clone)]
pub enum SliceCursor<'src, T: Atom> {
    Valid { data: &'src [T], position: usize },
    End { data: &'src [T] },
}

impl<'src, T: Atom> SliceCursor<'src, T> {
    pub fn new(data: &'src [T]) -> Self {
        if data.is_empty() {
            SliceCursor::End { data }
        } else {
            SliceCursor::Valid { data, position: 0 }
        }
    }
}

impl<'src, T: Atom> Cursor<'src> for SliceCursor<'src, T> {
    type Element = T;
    type Error = DescentError<'src, T>;

    fn peek(&self) -> Result<T, Self::Error> {
        match self {
            SliceCursor::Valid { data, position } => Ok(data[*position]),
            SliceCursor::End { data } => {
                Err(DescentError::Eof(SourceLoc::new(data, data.len())))
            }
        }
    }

    fn advance(self) -> Self {
        match self {
            SliceCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    SliceCursor::End { data }
                } else {
                    SliceCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            SliceCursor::End { data } => SliceCursor::End { data },
        }
    }

    fn try_advance(self) -> Result<Self, Self::Error> {
        match self {
            SliceCursor::Valid { data, .. } => match self.advance() {
                SliceCursor::End { .. } => {
                    Err(DescentError::Eof(SourceLoc::new(data, data.len())))
                }
                next => Ok(next),
            },
            SliceCursor::End { data } => {
                Err(DescentError::Eof(SourceLoc::new(data, data.len())))
            }
        }
    }

    fn position(&self) -> usize {
        match self {
            SliceCursor::Valid { position, .. } => *position,
            SliceCursor::End { data } => data.len(),
        }
    }

    fn source(&self) -> &'src [T] {
        match self {
            SliceCursor::Valid { data, .. } => data,
            SliceCursor::End { data } => data,
        }
    }

    fn parts(self) -> (&'src [T], usize) {
        match self {
            SliceCursor::Valid { data, position } => (data, position),
            SliceCursor::End { data } => (data, data.len()),
        }
    }
}

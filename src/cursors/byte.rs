use crate::cursors::SliceCursor;

/// Cursor over byte input, the common case for textual grammars.
pub type ByteCursor<'src> = SliceCursor<'src, u8>;

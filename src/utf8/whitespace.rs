use crate::ByteCursor;
use crate::error::DescentError;
use crate::filter::{FilterError, FilterExt};
use crate::parser::Parser;
use crate::utf8::char::char;

/// Parser that matches any Unicode whitespace character, including the
/// non-ASCII spaces (non-breaking space, en quad, ...).
pub fn unicode_whitespace<'src>() -> impl Parser<
    'src,
    Cursor = ByteCursor<'src>,
    Output = char,
    Error = FilterError<'src, DescentError<'src>>,
> {
    char().filter(|c| c.is_whitespace(), "expected Unicode whitespace")
}

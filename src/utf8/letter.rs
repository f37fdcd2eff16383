use crate::ByteCursor;
use crate::error::DescentError;
use crate::filter::{FilterError, FilterExt};
use crate::parser::Parser;
use crate::utf8::char::char;

/// Parser that matches any Unicode letter.
pub fn unicode_letter<'src>() -> impl Parser<
    'src,
    Cursor = ByteCursor<'src>,
    Output = char,
    Error = FilterError<'src, DescentError<'src>>,
> {
    char().filter(|c| c.is_alphabetic(), "expected Unicode letter")
}

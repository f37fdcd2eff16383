use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences.
///
/// Never fails: the first failure of the inner parser ends the repetition
/// and is swallowed. A success that does not advance the cursor also ends
/// the repetition (after being collected), so a zero-width sub-parser
/// cannot loop forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(
        &self,
        mut cursor: Self::Cursor,
    ) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let mut results = Vec::new();
        loop {
            match self.parser.parse(cursor) {
                Ok((value, next)) => {
                    let stalled = next.position() == cursor.position();
                    results.push(value);
                    cursor = next;
                    if stalled {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser.
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteCursor;
    use crate::byte::{byte, is_byte};
    use crate::not::not;

    #[test]
    fn zero_matches_is_a_success() {
        let data = b"xyz";
        let (results, cursor) = many(is_byte(b'a')).parse(ByteCursor::new(data)).unwrap();
        assert!(results.is_empty());
        assert_eq!(cursor.peek().unwrap(), b'x');
    }

    #[test]
    fn collects_the_matching_prefix() {
        let data = b"aaab";
        let (results, cursor) = many(is_byte(b'a')).parse(ByteCursor::new(data)).unwrap();
        assert_eq!(results, vec![b'a', b'a', b'a']);
        assert_eq!(cursor.peek().unwrap(), b'b');
    }

    #[test]
    fn consumes_the_whole_input_when_everything_matches() {
        let data = b"dddd";
        let (results, cursor) = many(is_byte(b'd')).parse(ByteCursor::new(data)).unwrap();
        assert_eq!(results.len(), 4);
        assert!(cursor.at_end());
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let data = b"";
        let (results, cursor) = many(byte()).parse(ByteCursor::new(data)).unwrap();
        assert!(results.is_empty());
        assert!(cursor.at_end());
    }

    #[test]
    fn zero_width_success_terminates() {
        // `not` succeeds without consuming; the repetition must not spin.
        let data = b"xyz";
        let (results, cursor) = many(not(is_byte(b'a'))).parse(ByteCursor::new(data)).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(cursor.position(), 0);
    }
}

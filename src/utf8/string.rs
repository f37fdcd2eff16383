use crate::ByteCursor;
use crate::byte::loc_at;
use crate::error::DescentError;
use crate::parser::Parser;
use crate::utf8::char::char;
use std::borrow::Cow;

/// Parser that matches an exact string, character by character.
///
/// This is the "has prefix" operation over text: the input must begin
/// with the expected string, and the remainder starts right after it.
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Literal {
            expected: expected.into(),
        }
    }
}

impl<'src> Parser<'src> for Literal {
    type Cursor = ByteCursor<'src>;
    type Output = Cow<'static, str>;
    type Error = DescentError<'src>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let mut walk = cursor;
        for expected in self.expected.chars() {
            match char().parse(walk) {
                Ok((found, next)) if found == expected => walk = next,
                Ok((found, _)) => {
                    return Err(DescentError::Unexpected {
                        expected: format!("'{}' while matching \"{}\"", expected, self.expected)
                            .into(),
                        found: format!("'{}'", found).into(),
                        loc: loc_at(walk),
                    });
                }
                Err(_) => {
                    return Err(DescentError::Unexpected {
                        expected: format!("'{}' while matching \"{}\"", expected, self.expected)
                            .into(),
                        found: "end of input".into(),
                        loc: loc_at(walk),
                    });
                }
            }
        }
        // For a borrowed Cow this clone only copies the reference.
        Ok((self.expected.clone(), walk))
    }
}

/// Convenience function to create a Literal parser.
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}

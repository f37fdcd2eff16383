use crate::atom::Atom;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Trait for errors that know where in the input they occurred.
///
/// This is the leaf capability of the error model: anything that can point
/// at a source location. The combinators use it to compare how far
/// competing failures progressed.
pub trait LocatedError<'src>: Error {
    /// The element type of the source the error points into.
    type Element: Atom;

    /// The location where this error occurred.
    fn loc(&self) -> SourceLoc<'src, Self::Element>;
}

/// Trait for (possibly nested) combinator errors.
///
/// Combinators that can fail in more than one way return their own error
/// enum; implementing this trait lets callers flatten any such tree and
/// recover the single failure that made it furthest into the input, which
/// is the error worth reporting.
pub trait CompositeError<'src>: fmt::Display + fmt::Debug {
    /// The element type of the source the error points into.
    type Element: Atom;

    /// The contained failure that progressed furthest.
    fn deepest(&self) -> &dyn LocatedError<'src, Element = Self::Element>;
}

/// A line number and the element offset within that line.
///
/// The offset is an element offset rather than a column: columns depend on
/// encoding, tab width, and rendering, while the element offset is exact.
#[derive(Debug)]
pub struct LinePosition {
    pub line: usize,
    pub offset: usize,
}

/// A position inside a source slice, kept together with the slice so the
/// error can render its own context.
#[derive(Debug, Copy, Clone)]
pub struct SourceLoc<'src, T: Atom = u8> {
    src: &'src [T],
    at: usize,
}

impl<'src, T: Atom> SourceLoc<'src, T> {
    pub fn new(src: &'src [T], at: usize) -> Self {
        Self { src, at }
    }

    /// Absolute offset into the source.
    pub fn position(&self) -> usize {
        self.at
    }

    pub fn line_position(&self) -> LinePosition {
        let mut line = 1;
        let mut line_start = 0;
        for (i, element) in self.src.iter().enumerate() {
            if i >= self.at {
                break;
            }
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }
        LinePosition {
            line,
            offset: self.at - line_start,
        }
    }

    /// The error line with one line of context on each side, plus a marker
    /// under the failing offset.
    fn context_lines(&self) -> Vec<String> {
        let pos = self.line_position();
        let text = T::format_slice(self.src);
        let mut lines = Vec::new();
        for (i, content) in text.split('\n').enumerate() {
            let number = i + 1;
            if number + 1 < pos.line || number > pos.line + 1 {
                continue;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            let prefix_len = prefix.len();
            lines.push(format!("{}{}", prefix, content));
            if number == pos.line {
                lines.push(format!("{}^---", " ".repeat(prefix_len + pos.offset)));
            }
        }
        lines
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>, headline: &dyn fmt::Display) -> fmt::Result {
        let pos = self.line_position();
        writeln!(
            f,
            "{} at line {}, offset {} (position {})",
            headline, pos.line, pos.offset, self.at
        )?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// The core parse error.
///
/// The taxonomy is deliberately small: running out of input, meeting
/// something other than what was expected, and a free-form located
/// message. `Wrapped` is the escape hatch that collapses a combinator
/// error tree back into this type while keeping furthest-failure
/// selection intact.
#[derive(Debug)]
pub enum DescentError<'src, T: Atom = u8> {
    /// The cursor ran out of input.
    Eof(SourceLoc<'src, T>),
    /// The input diverged from what the parser was looking for.
    Unexpected {
        expected: Cow<'static, str>,
        found: Cow<'static, str>,
        loc: SourceLoc<'src, T>,
    },
    /// A located free-form failure.
    Message {
        message: Cow<'static, str>,
        loc: SourceLoc<'src, T>,
    },
    /// A boxed combinator error, reported through its deepest failure.
    Wrapped {
        inner: Box<dyn CompositeError<'src, Element = T> + 'src>,
    },
}

impl<'src, T: Atom> DescentError<'src, T> {
    /// Collapse any combinator error into a `DescentError`.
    pub fn wrap(error: impl CompositeError<'src, Element = T> + 'src) -> Self {
        DescentError::Wrapped {
            inner: Box::new(error),
        }
    }

    /// The absolute position where this error occurred.
    pub fn position(&self) -> usize {
        self.loc().position()
    }
}

impl<'src, T: Atom> fmt::Display for DescentError<'src, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescentError::Eof(loc) => loc.describe(f, &"unexpected end of input"),
            DescentError::Unexpected {
                expected,
                found,
                loc,
            } => loc.describe(f, &format_args!("expected {}, found {}", expected, found)),
            DescentError::Message { message, loc } => loc.describe(f, message),
            DescentError::Wrapped { inner } => write!(f, "{}", inner.deepest()),
        }
    }
}

impl<'src, T: Atom> Error for DescentError<'src, T> {}

impl<'src, T: Atom> LocatedError<'src> for DescentError<'src, T> {
    type Element = T;

    fn loc(&self) -> SourceLoc<'src, T> {
        match self {
            DescentError::Eof(loc) => *loc,
            DescentError::Unexpected { loc, .. } => *loc,
            DescentError::Message { loc, .. } => *loc,
            DescentError::Wrapped { inner } => inner.deepest().loc(),
        }
    }
}

impl<'src, T: Atom + 'src> CompositeError<'src> for DescentError<'src, T> {
    type Element = T;

    fn deepest(&self) -> &dyn LocatedError<'src, Element = T> {
        match self {
            DescentError::Wrapped { inner } => inner.deepest(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_position_counts_newlines() {
        let src = b"one\ntwo\nthree";
        let loc = SourceLoc::new(src, 9);
        let pos = loc.line_position();
        assert_eq!(pos.line, 3);
        assert_eq!(pos.offset, 1);
    }

    #[test]
    fn line_position_at_end_of_input() {
        let src = b"ab\ncd";
        let loc = SourceLoc::new(src, 5);
        let pos = loc.line_position();
        assert_eq!(pos.line, 2);
        assert_eq!(pos.offset, 2);
    }

    #[test]
    fn unexpected_display_names_both_sides() {
        let src = b"xyz";
        let error: DescentError<'_> = DescentError::Unexpected {
            expected: "'a'".into(),
            found: "'x'".into(),
            loc: SourceLoc::new(src, 0),
        };
        let rendered = error.to_string();
        assert!(rendered.contains("expected 'a', found 'x'"));
        assert!(rendered.contains("line 1, offset 0"));
    }

    #[test]
    fn display_includes_context_and_marker() {
        let src = b"first\nsecond\nthird";
        let error: DescentError<'_> = DescentError::Message {
            message: "bad token".into(),
            loc: SourceLoc::new(src, 8),
        };
        let rendered = error.to_string();
        assert!(rendered.contains("  > 2 | second"));
        assert!(rendered.contains("    1 | first"));
        assert!(rendered.contains("    3 | third"));
        assert!(rendered.contains("^---"));
    }

    #[test]
    fn eof_display_on_empty_input() {
        let src = b"";
        let error: DescentError<'_> = DescentError::Eof(SourceLoc::new(src, 0));
        assert!(error.to_string().contains("unexpected end of input"));
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn wrapped_reports_inner_location() {
        let src = b"abc";
        let inner: DescentError<'_> = DescentError::Message {
            message: "inner failure".into(),
            loc: SourceLoc::new(src, 2),
        };
        let outer = DescentError::wrap(inner);
        assert_eq!(outer.position(), 2);
        assert!(outer.to_string().contains("inner failure"));
    }

    #[test]
    fn token_stream_locations_render() {
        let src: [u32; 4] = [10, 20, 30, 40];
        let error: DescentError<'_, u32> = DescentError::Message {
            message: "unexpected token".into(),
            loc: SourceLoc::new(&src, 2),
        };
        let rendered = error.to_string();
        assert!(rendered.contains("unexpected token"));
        assert!(rendered.contains("10 20 30 40"));
    }
}

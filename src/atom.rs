/// Trait for the elements a cursor walks over.
///
/// Implementing this for an element type is what makes error locations and
/// spans renderable for it, so the same diagnostics work for byte input,
/// char input, and token-id input alike.
pub trait Atom: Copy + PartialEq + std::fmt::Debug {
    /// Whether this element terminates a line, for line/offset reporting.
    fn is_newline(&self) -> bool;

    /// Render a slice of elements for display in diagnostics.
    fn format_slice(slice: &[Self]) -> String;
}

impl Atom for u8 {
    fn is_newline(&self) -> bool {
        *self == b'\n'
    }

    fn format_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}

impl Atom for char {
    fn is_newline(&self) -> bool {
        *self == '\n'
    }

    fn format_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

// Token streams are commonly arrays of numeric ids; a token has no notion
// of a line break.
impl Atom for u32 {
    fn is_newline(&self) -> bool {
        false
    }

    fn format_slice(slice: &[Self]) -> String {
        slice
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

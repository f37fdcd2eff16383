//! # descent - parser combinators for recursive-descent grammars
//!
//! A small algebra of composable parsers: primitives consume a prefix of
//! the input and combinators (sequence, ordered choice, repetition,
//! mapping, filtering) assemble them into parsers for full grammars.
//! The engine is generic over the input representation, so the same
//! combinators drive text, token-array, and byte-buffer grammars.
//!
//! Design points:
//!
//! - **Failure is a value**: every parse returns a `Result`; no panics,
//!   no exceptions, and combinators inspect and selectively discard
//!   failures to implement backtracking.
//! - **Cursors are copies**: input positions are `Copy` views, so a
//!   failed attempt simply never surfaces its cursor and alternatives
//!   retry from the caller's copy.
//! - **Errors keep their place**: failures carry source locations, and
//!   composite failures report the one that progressed furthest.
//! - **Parsers are immutable**: build a grammar once, run it from any
//!   number of threads over independent inputs.

pub mod and;
pub mod ascii;
pub mod atom;
pub mod between;
pub mod byte;
pub mod cursor;
pub mod cursors;
pub mod default;
pub mod error;
pub mod exactly;
pub mod filter;
pub mod from_fn;
pub mod lazy;
pub mod left;
pub mod many;
pub mod map;
pub mod map_err;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod right;
pub mod seq;
pub mod some;
pub mod span;
pub mod take_until;
pub mod then_optionally;
pub mod utf8;

pub use atom::Atom;
pub use cursor::Cursor;
pub use cursors::{ByteCursor, SliceCursor};
pub use error::{CompositeError, DescentError, LocatedError, SourceLoc};
pub use from_fn::from_fn;
pub use parser::Parser;
pub use seq::seq;
pub use span::{Span, SpannedExt};

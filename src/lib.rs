//! # statecomb - Parser Combinators over an Immutable Parse State
//!
//! Parsers in this crate are transitions from one [`ParseState`] to the next.
//! Small primitives (literal strings, runs of letters or digits) are composed
//! with combinators (sequence, ordered choice, repetition, mapping) into a
//! recursive-descent parser, which is then [`run`] over an input string.
//!
//! - **Errors are data**: a failed parse is a state carrying a [`ParseError`],
//!   never a panic
//! - **Immutable states**: every transition returns a new state, so earlier
//!   states stay valid for backtracking in [`Choice`] and [`Many`]
//! - **Typed results**: results are [`Value`]s, and [`Map`] can turn them into
//!   caller-defined types
//!
//! ```
//! use statecomb::{ParseState, Parser, Value, choice, digits, letters, many1};
//!
//! let parser = many1(choice([letters().boxed(), digits().boxed()]));
//! let state: ParseState = parser.run("2d8");
//!
//! assert_eq!(state.index(), 3);
//! assert_eq!(
//!     state.result(),
//!     Some(&Value::Sequence(vec![
//!         Value::Text("2"),
//!         Value::Text("d"),
//!         Value::Text("8"),
//!     ]))
//! );
//! ```

pub mod between;
pub mod choice;
pub mod class;
pub mod error;
pub mod lazy;
pub mod many;
pub mod many1;
pub mod map;
pub mod map_err;
pub mod matcher;
pub mod parser;
pub mod sequence_of;
pub mod state;
pub mod string;

pub use between::{Between, between};
pub use choice::{Choice, OrExt, choice};
pub use class::{Class, digits, letters, pattern};
pub use error::{ErrorKind, ParseError};
pub use lazy::{Lazy, lazy};
pub use many::{Many, many};
pub use many1::{Many1, many1};
pub use map::{Map, MapExt, map};
pub use map_err::{MapErr, MapErrExt, map_err};
pub use matcher::PatternMatcher;
pub use parser::{BoxedParser, Parser, run};
pub use sequence_of::{SequenceOf, sequence_of};
pub use state::{ParseState, Value};
pub use string::{Str, str};

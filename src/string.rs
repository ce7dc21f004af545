use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::state::{ParseState, Value};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Parser that matches an exact literal at the current index
///
/// The result is the matched slice of the target, which equals the literal.
pub struct Str<T = ()> {
    expected: Cow<'static, str>,
    _custom: PhantomData<fn() -> T>,
}

impl<T> Str<T> {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
            _custom: PhantomData,
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl<T> fmt::Debug for Str<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Str")
            .field("expected", &self.expected)
            .finish()
    }
}

impl<'code, T> Parser<'code> for Str<T>
where
    T: Clone,
{
    type Custom = T;

    fn apply(&self, state: &ParseState<'code, T>) -> ParseState<'code, T> {
        if state.is_error() {
            return state.clone();
        }

        let remaining = state.remaining();
        if remaining.len() < self.expected.len() {
            return state.with_error(ParseError::unexpected_end("str", state.index()));
        }

        match remaining.strip_prefix(self.expected()) {
            Some(_) => {
                let len = self.expected.len();
                state.advance(len, Value::Text(&remaining[..len]))
            }
            None => state.with_error(ParseError::new(
                ErrorKind::NoMatch,
                state.index(),
                format!(
                    "str: could not match '{}' at index {}",
                    self.expected,
                    state.index()
                ),
            )),
        }
    }
}

/// Convenience function to create a [`Str`] parser
pub fn str<T>(expected: impl Into<Cow<'static, str>>) -> Str<T> {
    Str::new(expected)
}

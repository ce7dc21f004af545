use crate::error::ParseError;

/// The payload of a successful match
///
/// Primitives produce `Text` slices of the target, repetition and sequencing
/// produce `Sequence`, and [`crate::Map`] can wrap caller values in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'code, T = ()> {
    Text(&'code str),
    Sequence(Vec<Value<'code, T>>),
    Custom(T),
}

impl<'code, T> Value<'code, T> {
    pub fn as_text(&self) -> Option<&'code str> {
        match self {
            Value::Text(text) => Some(*text),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value<'code, T>]> {
        match self {
            Value::Sequence(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn as_custom(&self) -> Option<&T> {
        match self {
            Value::Custom(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_sequence(self) -> Option<Vec<Value<'code, T>>> {
        match self {
            Value::Sequence(values) => Some(values),
            _ => None,
        }
    }

    pub fn into_custom(self) -> Option<T> {
        match self {
            Value::Custom(value) => Some(value),
            _ => None,
        }
    }
}

impl<'code, T> From<&'code str> for Value<'code, T> {
    fn from(text: &'code str) -> Self {
        Value::Text(text)
    }
}

/// An immutable snapshot of parsing progress
///
/// A state is either a success, optionally carrying the latest result, or a
/// failure carrying a [`ParseError`] and no result. States are never updated
/// in place: every constructor below returns a fresh value and leaves the
/// original untouched, so combinators can hold on to earlier states freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState<'code, T = ()> {
    target: &'code str,
    index: usize,
    result: Option<Value<'code, T>>,
    error: Option<ParseError>,
}

impl<'code, T> ParseState<'code, T> {
    /// Initial state of a run: index 0, no result, no error
    pub fn new(target: &'code str) -> Self {
        ParseState {
            target,
            index: 0,
            result: None,
            error: None,
        }
    }

    pub fn target(&self) -> &'code str {
        self.target
    }

    /// Current byte offset into the target
    pub fn index(&self) -> usize {
        self.index
    }

    /// The part of the target not consumed yet
    pub fn remaining(&self) -> &'code str {
        self.target.get(self.index..).unwrap_or("")
    }

    pub fn result(&self) -> Option<&Value<'code, T>> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<Value<'code, T>> {
        self.result
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(ParseError::message)
    }

    /// Success `consumed` bytes further along, carrying `result`
    ///
    /// The new index is clamped to the end of the target.
    pub fn advance(&self, consumed: usize, result: Value<'code, T>) -> Self {
        ParseState {
            target: self.target,
            index: (self.index + consumed).min(self.target.len()),
            result: Some(result),
            error: None,
        }
    }

    /// Success at the same index with a new result
    pub fn with_result(&self, result: Value<'code, T>) -> Self {
        self.advance(0, result)
    }

    /// Failure at the same index; the failed state carries no result
    pub fn with_error(&self, error: ParseError) -> ParseState<'code, T> {
        ParseState {
            target: self.target,
            index: self.index,
            result: None,
            error: Some(error),
        }
    }

    /// Same position and error under another result type, with the result dropped
    pub fn retype<U>(&self) -> ParseState<'code, U> {
        ParseState {
            target: self.target,
            index: self.index,
            result: None,
            error: self.error.clone(),
        }
    }

    /// Convert a finished state into a `Result`
    ///
    /// A success without any result (only possible for a state no parser has
    /// touched yet) yields an empty sequence.
    pub fn into_outcome(self) -> Result<Value<'code, T>, ParseError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result.unwrap_or(Value::Sequence(Vec::new()))),
        }
    }
}

use crate::error::ParseError;
use crate::matcher::{DIGITS, LETTERS, PatternMatcher, anchored};
use crate::parser::Parser;
use crate::state::{ParseState, Value};
use regex::Regex;
use std::fmt;
use std::marker::PhantomData;

/// Parser that matches a run of a character class at the current index
///
/// The run is anchored: a class parser never skips input to find a match.
pub struct Class<M, T = ()> {
    name: &'static str,
    matcher: M,
    _custom: PhantomData<fn() -> T>,
}

impl<M, T> Class<M, T>
where
    M: PatternMatcher,
{
    /// `name` prefixes the diagnostics this parser produces
    pub fn new(name: &'static str, matcher: M) -> Self {
        Class {
            name,
            matcher,
            _custom: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<M, T> fmt::Debug for Class<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("matcher", &"<pattern>")
            .finish()
    }
}

impl<'code, M, T> Parser<'code> for Class<M, T>
where
    M: PatternMatcher,
    T: Clone,
{
    type Custom = T;

    fn apply(&self, state: &ParseState<'code, T>) -> ParseState<'code, T> {
        if state.is_error() {
            return state.clone();
        }

        let remaining = state.remaining();
        if remaining.is_empty() {
            return state.with_error(ParseError::unexpected_end(self.name, state.index()));
        }

        let matched = self.matcher.matched_prefix(remaining);
        if matched.is_empty() {
            return state.with_error(ParseError::no_match(self.name, state.index()));
        }

        state.advance(matched.len(), Value::Text(matched))
    }
}

/// Parser for a run of ASCII letters (`[A-Za-z]+`)
pub fn letters<T>() -> Class<&'static Regex, T> {
    Class::new("letters", &*LETTERS)
}

/// Parser for a run of ASCII digits (`[0-9]+`)
pub fn digits<T>() -> Class<&'static Regex, T> {
    Class::new("digits", &*DIGITS)
}

/// Parser for a run of a caller-defined class, given as a regular expression
///
/// The expression is compiled once here and anchored at the current index.
/// Matching uses the regex crate's leftmost-first semantics, so with
/// alternation the first matching branch wins over a longer one:
/// `"let|letter"` matches only `let` in `"letter"`.
///
/// ```
/// use statecomb::{ParseState, Parser, pattern};
///
/// let hex = pattern("hex", "[0-9a-fA-F]+").unwrap();
/// let state: ParseState = hex.run("c0ffee;");
/// assert_eq!(state.index(), 6);
/// ```
pub fn pattern<T>(name: &'static str, class: &str) -> Result<Class<Regex, T>, regex::Error> {
    Ok(Class::new(name, anchored(class)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind_of(state: &ParseState<'_>) -> Option<ErrorKind> {
        state.error().map(ParseError::kind)
    }

    #[test]
    fn test_letters_maximal_run() {
        let state: ParseState = letters().run("hello123");
        assert_eq!(state.index(), 5);
        assert_eq!(state.result(), Some(&Value::Text("hello")));
    }

    #[test]
    fn test_letters_mixed_case() {
        let state: ParseState = letters().run("HeLLo world");
        assert_eq!(state.result(), Some(&Value::Text("HeLLo")));
        assert_eq!(state.remaining(), " world");
    }

    #[test]
    fn test_letters_no_match() {
        let state: ParseState = letters().run("42abc");
        assert_eq!(kind_of(&state), Some(ErrorKind::NoMatch));
        assert_eq!(state.index(), 0);
        assert_eq!(state.error_message(), Some("letters: could not match at index 0"));
    }

    #[test]
    fn test_digits_maximal_run() {
        let state: ParseState = digits().run("2024abc");
        assert_eq!(state.index(), 4);
        assert_eq!(state.result(), Some(&Value::Text("2024")));
    }

    #[test]
    fn test_digits_empty_input() {
        let state: ParseState = digits().run("");
        assert_eq!(kind_of(&state), Some(ErrorKind::UnexpectedEnd));
        assert_eq!(
            state.error_message(),
            Some("digits: unexpected end of input at index 0")
        );
    }

    #[test]
    fn test_digits_at_end_after_progress() {
        let start: ParseState = ParseState::new("ab").advance(2, Value::Text("ab"));
        let state = digits().apply(&start);
        assert_eq!(kind_of(&state), Some(ErrorKind::UnexpectedEnd));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_anchored_at_index() {
        // Digits later in the input must not be found by scanning forward
        let state: ParseState = digits().run("abc123");
        assert_eq!(kind_of(&state), Some(ErrorKind::NoMatch));
    }

    #[test]
    fn test_non_ascii_letters_are_not_letters() {
        let state: ParseState = letters().run("été");
        assert_eq!(kind_of(&state), Some(ErrorKind::NoMatch));
    }

    #[test]
    fn test_error_input_is_returned_unchanged() {
        let failed: ParseState = ParseState::new("abc").with_error(ParseError::no_match("str", 0));
        assert_eq!(letters().apply(&failed), failed);
    }

    #[test]
    fn test_custom_pattern() {
        let ident = pattern("ident", "[A-Za-z_][A-Za-z0-9_]*").unwrap();
        let state: ParseState = ident.run("snake_case9 = 1");
        assert_eq!(state.result(), Some(&Value::Text("snake_case9")));

        let state: ParseState = ident.run("9lives");
        assert_eq!(state.error_message(), Some("ident: could not match at index 0"));
    }

    #[test]
    fn test_pattern_alternation_is_leftmost_first() {
        let keyword = pattern("keyword", "let|letter").unwrap();
        let state: ParseState = keyword.run("letter");
        assert_eq!(state.index(), 3);
        assert_eq!(state.result(), Some(&Value::Text("let")));

        let keyword = pattern("keyword", "letter|let").unwrap();
        let state: ParseState = keyword.run("letter");
        assert_eq!(state.result(), Some(&Value::Text("letter")));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let result = pattern::<()>("broken", "(");
        assert!(result.is_err());
    }

    #[test]
    fn test_class_name() {
        assert_eq!(letters::<()>().name(), "letters");
        assert_eq!(digits::<()>().name(), "digits");
    }
}

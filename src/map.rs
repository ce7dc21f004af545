use crate::parser::Parser;
use crate::state::{ParseState, Value};
use std::fmt;
use std::marker::PhantomData;

/// Parser combinator that transforms the result of a successful parse
///
/// The mapper may change the custom payload type, so `Map` converts the
/// incoming state to the inner parser's type before applying it.
pub struct Map<P, F, U> {
    parser: P,
    mapper: F,
    _custom: PhantomData<fn() -> U>,
}

impl<P, F, U> Map<P, F, U> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map {
            parser,
            mapper,
            _custom: PhantomData,
        }
    }
}

impl<P, F, U> fmt::Debug for Map<P, F, U>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F, U>
where
    P: Parser<'code>,
    F: Fn(Value<'code, P::Custom>) -> Value<'code, U>,
    U: Clone,
{
    type Custom = U;

    fn apply(&self, state: &ParseState<'code, U>) -> ParseState<'code, U> {
        if state.is_error() {
            return state.clone();
        }

        let next = self.parser.apply(&state.retype());
        let mapped: ParseState<'code, U> = next.retype();
        if next.is_error() {
            return mapped;
        }

        match next.into_result() {
            Some(value) => mapped.with_result((self.mapper)(value)),
            None => mapped,
        }
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F, U>
where
    P: Parser<'code>,
    F: Fn(Value<'code, P::Custom>) -> Value<'code, U>,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F, U>
    where
        F: Fn(Value<'code, Self::Custom>) -> Value<'code, U>,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{digits, letters};
    use crate::error::{ErrorKind, ParseError};
    use crate::many::many;
    use crate::string::str;

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Word(String),
        Number(u64),
    }

    fn number<'code>(value: Value<'code>) -> Value<'code, Token> {
        match value {
            Value::Text(text) => Value::Custom(Token::Number(text.parse().unwrap_or(0))),
            _ => Value::Sequence(Vec::new()),
        }
    }

    #[test]
    fn test_map_to_custom() {
        let parser = digits().map(number);
        let state = parser.run("123abc");

        assert_eq!(state.index(), 3);
        assert_eq!(state.result(), Some(&Value::Custom(Token::Number(123))));
    }

    #[test]
    fn test_map_keeps_index() {
        let parser = letters().map(|value: Value<'_>| match value {
            Value::Text(text) => Value::Custom(Token::Word(text.to_uppercase())),
            _ => Value::Sequence(Vec::new()),
        });
        let state = parser.run("abc def");

        assert_eq!(state.index(), 3);
        assert_eq!(
            state.result(),
            Some(&Value::Custom(Token::Word("ABC".to_string())))
        );
    }

    #[test]
    fn test_map_preserves_errors() {
        let parser = digits().map(number);
        let state = parser.run("xyz");

        assert!(state.is_error());
        assert_eq!(state.index(), 0);
        assert_eq!(state.error().map(ParseError::kind), Some(ErrorKind::NoMatch));
    }

    fn never_called(_: Value<'_>) -> Value<'_> {
        panic!("mapper must not run on failure")
    }

    #[test]
    fn test_map_not_called_on_error() {
        let parser = str("a").map(never_called);
        let state = parser.run("b");
        assert!(state.is_error());
    }

    #[test]
    fn test_custom_payload_states_pass_through_combinators() {
        let parser = many(digits().map(number));

        let failed: ParseState<'_, Token> =
            ParseState::new("12").with_error(ParseError::no_match("str", 0));
        assert_eq!(parser.apply(&failed), failed);

        let state = parser.run("12");
        assert_eq!(
            state.result(),
            Some(&Value::Sequence(vec![Value::Custom(Token::Number(12))]))
        );
    }

    #[test]
    fn test_map_chaining() {
        let parser = digits()
            .map(number)
            .map(|value| match value {
                Value::Custom(Token::Number(n)) => Value::Custom(n * 2),
                _ => Value::Custom(0),
            });
        let state = parser.run("21");
        assert_eq!(state.result(), Some(&Value::Custom(42u64)));
    }

    #[test]
    fn test_map_from_current_index() {
        let start: ParseState<'_, Token> = ParseState::new("ab12").advance(2, Value::Text("ab"));
        let state = map(digits(), number).apply(&start);
        assert_eq!(state.index(), 4);
        assert_eq!(state.result(), Some(&Value::Custom(Token::Number(12))));
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(str("x"), |_: Value<'_>| Value::Custom('x'));
        let state = parser.run("x");
        assert_eq!(state.result(), Some(&Value::Custom('x')));
    }
}

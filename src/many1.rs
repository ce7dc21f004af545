use crate::error::ParseError;
use crate::many::repeat;
use crate::parser::Parser;
use crate::state::{ParseState, Value};
use tracing::trace;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Behaves like [`crate::Many`] once the first repetition has matched. With
/// zero matches it fails with `RepetitionEmpty` at the starting index.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Custom = P::Custom;

    fn apply(&self, state: &ParseState<'code, P::Custom>) -> ParseState<'code, P::Custom> {
        if state.is_error() {
            return state.clone();
        }

        // one result per success, so an empty list means the first attempt failed
        let (last, results) = repeat(&self.parser, state);
        if results.is_empty() {
            trace!(index = state.index(), "many1 matched nothing");
            return state.with_error(ParseError::repetition_empty(state.index()));
        }

        last.with_result(Value::Sequence(results))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

use crate::parser::Parser;
use crate::state::{ParseState, Value};
use tracing::trace;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Repetition stops at the first failure, and the last successful state is
/// returned with the collected results. `Many` itself never fails.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

/// Apply `parser` until it fails, starting from `state`
///
/// Returns the last successful state (without a result) and the results of
/// every successful application, one per success. A success without a result
/// is recorded as an empty `Value::Sequence`. A success that does not move the
/// index is recorded once and ends the loop.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    state: &ParseState<'code, P::Custom>,
) -> (ParseState<'code, P::Custom>, Vec<Value<'code, P::Custom>>)
where
    P: Parser<'code> + ?Sized,
{
    let mut results = Vec::new();
    let mut current: ParseState<'code, P::Custom> = state.retype();

    loop {
        let next = parser.apply(&current);
        if next.is_error() {
            break;
        }
        let advanced = next.index() > current.index();
        current = next.retype();
        results.push(next.into_result().unwrap_or(Value::Sequence(Vec::new())));
        if !advanced {
            break;
        }
    }

    trace!(
        matches = results.len(),
        index = current.index(),
        "repetition finished"
    );
    (current, results)
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Custom = P::Custom;

    fn apply(&self, state: &ParseState<'code, P::Custom>) -> ParseState<'code, P::Custom> {
        if state.is_error() {
            return state.clone();
        }

        let (last, results) = repeat(&self.parser, state);
        last.with_result(Value::Sequence(results))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

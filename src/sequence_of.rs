use crate::parser::Parser;
use crate::state::{ParseState, Value};
use tracing::trace;

/// Parser combinator that applies parsers one after another
///
/// Each parser starts where the previous one stopped, and their results are
/// collected in order into a `Value::Sequence`. The first failure ends the
/// sequence: that failed state is returned and the remaining parsers are
/// never invoked.
///
/// ```
/// use statecomb::{ParseState, Parser, Value, digits, letters, sequence_of};
///
/// let parser = sequence_of([letters().boxed(), digits().boxed()]);
/// let state: ParseState = parser.run("abc123");
/// assert_eq!(
///     state.result(),
///     Some(&Value::Sequence(vec![Value::Text("abc"), Value::Text("123")]))
/// );
/// ```
pub struct SequenceOf<P> {
    parsers: Vec<P>,
}

impl<P> SequenceOf<P> {
    pub fn new(parsers: impl IntoIterator<Item = P>) -> Self {
        SequenceOf {
            parsers: parsers.into_iter().collect(),
        }
    }
}

impl<'code, P> Parser<'code> for SequenceOf<P>
where
    P: Parser<'code>,
{
    type Custom = P::Custom;

    fn apply(&self, state: &ParseState<'code, P::Custom>) -> ParseState<'code, P::Custom> {
        if state.is_error() {
            return state.clone();
        }

        let mut results = Vec::with_capacity(self.parsers.len());
        let mut current = state.clone();

        for (step, parser) in self.parsers.iter().enumerate() {
            let next = parser.apply(&current);
            if next.is_error() {
                trace!(step, index = next.index(), "sequence stopped at failing step");
                return next;
            }
            current = next.retype();
            results.push(next.into_result().unwrap_or(Value::Sequence(Vec::new())));
        }

        current.with_result(Value::Sequence(results))
    }
}

/// Convenience function to create a SequenceOf parser
pub fn sequence_of<'code, P>(parsers: impl IntoIterator<Item = P>) -> SequenceOf<P>
where
    P: Parser<'code>,
{
    SequenceOf::new(parsers)
}

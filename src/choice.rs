use crate::error::ParseError;
use crate::parser::{BoxedParser, Parser};
use crate::state::ParseState;
use tracing::trace;

/// Parser combinator that tries each parser in order from the same state
///
/// The first success wins. Failed attempts are discarded, and if no
/// alternative succeeds the result is a `ChoiceExhausted` failure anchored at
/// the index the choice started from.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: impl IntoIterator<Item = P>) -> Self {
        Choice {
            parsers: parsers.into_iter().collect(),
        }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Custom = P::Custom;

    fn apply(&self, state: &ParseState<'code, P::Custom>) -> ParseState<'code, P::Custom> {
        if state.is_error() {
            return state.clone();
        }

        for parser in &self.parsers {
            let next = parser.apply(state);
            if !next.is_error() {
                return next;
            }
        }

        trace!(
            index = state.index(),
            alternatives = self.parsers.len(),
            "choice exhausted"
        );
        state.with_error(ParseError::choice_exhausted(state.index()))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(parsers: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(parsers)
}

/// Extension trait to add .or() method support for parsers
///
/// `a.or(b)` is a two-way choice over boxed parsers, so alternatives of
/// different types can be chained.
pub trait OrExt<'code>: Parser<'code> + Sized + 'code {
    fn or<P>(self, other: P) -> Choice<BoxedParser<'code, Self::Custom>>
    where
        P: Parser<'code, Custom = Self::Custom> + 'code,
    {
        Choice::new([self.boxed(), other.boxed()])
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> + 'code {}

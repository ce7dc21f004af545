use crate::state::ParseState;
use tracing::debug;

/// Core parser trait for parser combinators
///
/// A parser is a transition from one [`ParseState`] to the next. `apply`
/// borrows its input state and returns a new one; failures are reported as
/// error states, never as panics, and a success never moves the index
/// backwards. Parsers receiving an error state hand it back unchanged.
pub trait Parser<'code> {
    /// Type carried by `Value::Custom` results of this parser
    type Custom: Clone;

    fn apply(&self, state: &ParseState<'code, Self::Custom>) -> ParseState<'code, Self::Custom>;

    /// Apply the parser to `target`, starting from index 0
    fn run(&self, target: &'code str) -> ParseState<'code, Self::Custom>
    where
        Self: Sized,
    {
        run(self, target)
    }

    /// Erase the parser's concrete type
    ///
    /// Needed to put different parser types in one `choice` or `sequence_of`
    /// list, and to name the type of a recursive grammar.
    fn boxed(self) -> BoxedParser<'code, Self::Custom>
    where
        Self: Sized + 'code,
    {
        Box::new(self)
    }
}

/// A type-erased parser
pub type BoxedParser<'code, T = ()> = Box<dyn Parser<'code, Custom = T> + 'code>;

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Custom = P::Custom;

    fn apply(&self, state: &ParseState<'code, Self::Custom>) -> ParseState<'code, Self::Custom> {
        (**self).apply(state)
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Custom = P::Custom;

    fn apply(&self, state: &ParseState<'code, Self::Custom>) -> ParseState<'code, Self::Custom> {
        (**self).apply(state)
    }
}

/// Run `parser` over `target` from a fresh state and return the final state
pub fn run<'code, P>(parser: &P, target: &'code str) -> ParseState<'code, P::Custom>
where
    P: Parser<'code> + ?Sized,
{
    debug!(len = target.len(), "running parser");
    let state = parser.apply(&ParseState::new(target));
    debug!(
        index = state.index(),
        is_error = state.is_error(),
        "parser finished"
    );
    state
}

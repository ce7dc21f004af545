use crate::parser::Parser;
use crate::state::ParseState;
use std::fmt;

/// Parser combinator that rewrites the error message of a failed parse
///
/// Only the message changes; the error kind and index are those of the
/// original failure. Successful states pass through untouched.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F> Parser<'code> for MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(String) -> String,
{
    type Custom = P::Custom;

    fn apply(&self, state: &ParseState<'code, P::Custom>) -> ParseState<'code, P::Custom> {
        let next = self.parser.apply(state);
        match next.error() {
            Some(error) => {
                let message = (self.mapper)(error.message().to_string());
                next.with_error(error.clone().with_message(message))
            }
            None => next,
        }
    }
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'code>: Parser<'code> + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(String) -> String,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'code, P> MapErrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a MapErr parser
pub fn map_err<'code, P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(String) -> String,
{
    MapErr::new(parser, mapper)
}

use crate::parser::Parser;
use crate::state::ParseState;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` in sequence and keeps only the content's
/// result. The first failing part ends the parse, as in
/// [`crate::SequenceOf`].
pub struct Between<O, P, C> {
    open: O,
    content: P,
    close: C,
}

impl<O, P, C> Between<O, P, C> {
    pub fn new(open: O, content: P, close: C) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, O, P, C> Parser<'code> for Between<O, P, C>
where
    O: Parser<'code, Custom = P::Custom>,
    P: Parser<'code>,
    C: Parser<'code, Custom = P::Custom>,
{
    type Custom = P::Custom;

    fn apply(&self, state: &ParseState<'code, P::Custom>) -> ParseState<'code, P::Custom> {
        let opened = self.open.apply(state);
        if opened.is_error() {
            return opened;
        }

        let content = self.content.apply(&opened);
        if content.is_error() {
            return content;
        }

        let closed = self.close.apply(&content);
        if closed.is_error() {
            return closed;
        }

        match content.into_result() {
            Some(value) => closed.with_result(value),
            None => closed.retype(),
        }
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, O, P, C>(open: O, content: P, close: C) -> Between<O, P, C>
where
    O: Parser<'code, Custom = P::Custom>,
    P: Parser<'code>,
    C: Parser<'code, Custom = P::Custom>,
{
    Between::new(open, content, close)
}

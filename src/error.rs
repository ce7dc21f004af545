use std::fmt;
use thiserror::Error;

/// The kinds of failure a parse state can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A primitive was asked to match at or past the end of input
    UnexpectedEnd,
    /// A primitive's pattern did not match at the current index
    NoMatch,
    /// No alternative of a choice succeeded
    ChoiceExhausted,
    /// A one-or-more repetition matched zero times
    RepetitionEmpty,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedEnd => "unexpected end",
            ErrorKind::NoMatch => "no match",
            ErrorKind::ChoiceExhausted => "choice exhausted",
            ErrorKind::RepetitionEmpty => "repetition empty",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse failure: what went wrong, where, and a human-readable message.
///
/// The message is what `Display` prints. [`crate::MapErr`] may rewrite it,
/// but the kind and index always describe the original failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    kind: ErrorKind,
    index: usize,
    message: String,
}

impl ParseError {
    pub fn new(kind: ErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }

    pub fn unexpected_end(parser: &str, index: usize) -> Self {
        Self::new(
            ErrorKind::UnexpectedEnd,
            index,
            format!("{}: unexpected end of input at index {}", parser, index),
        )
    }

    pub fn no_match(parser: &str, index: usize) -> Self {
        Self::new(
            ErrorKind::NoMatch,
            index,
            format!("{}: could not match at index {}", parser, index),
        )
    }

    pub fn choice_exhausted(index: usize) -> Self {
        Self::new(
            ErrorKind::ChoiceExhausted,
            index,
            format!("choice: no alternative matched at index {}", index),
        )
    }

    pub fn repetition_empty(index: usize) -> Self {
        Self::new(
            ErrorKind::RepetitionEmpty,
            index,
            format!("many1: could not match at index {}", index),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the target where the failure is anchored
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Same kind and index, different message
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    /// Render this error against its source text with a pointer at the failing offset
    #[cfg(feature = "pretty-errors")]
    pub fn report(&self, source: &str, filename: &str) -> String {
        use ariadne::{Color, Config, Label, Report, ReportKind, Source};

        // ariadne counts characters, the index counts bytes
        let len = source.chars().count();
        let offset = match source.get(..self.index) {
            Some(prefix) => prefix.chars().count(),
            None => len,
        };
        // At the end of input, point at the last character
        let span = if offset < len {
            offset..offset + 1
        } else {
            offset.saturating_sub(1)..offset
        };

        let mut output = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_config(Config::default().with_color(false))
            .with_message(&self.message)
            .with_label(
                Label::new((filename, span))
                    .with_color(Color::Red)
                    .with_message(self.kind.as_str()),
            )
            .finish()
            .write((filename, Source::from(source)), &mut output);

        match written {
            Ok(()) => String::from_utf8_lossy(&output).into_owned(),
            Err(_) => self.message.clone(),
        }
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

/// Recognizes a run of a character class at the start of a string
///
/// This is the seam between the class primitives and the regular-expression
/// engine. Implementations return the matched prefix of `haystack`, or an
/// empty string when the first character is outside the class. For a regex
/// the prefix follows its leftmost-first semantics: greedy repetition such as
/// `[0-9]+` takes the longest run, alternation takes the first branch that
/// matches.
pub trait PatternMatcher {
    fn matched_prefix<'a>(&self, haystack: &'a str) -> &'a str;
}

impl PatternMatcher for Regex {
    fn matched_prefix<'a>(&self, haystack: &'a str) -> &'a str {
        match self.find(haystack) {
            Some(found) if found.start() == 0 => found.as_str(),
            _ => "",
        }
    }
}

impl<M> PatternMatcher for &M
where
    M: PatternMatcher + ?Sized,
{
    fn matched_prefix<'a>(&self, haystack: &'a str) -> &'a str {
        (**self).matched_prefix(haystack)
    }
}

pub(crate) static LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+").expect("letters pattern is valid"));

pub(crate) static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+").expect("digits pattern is valid"));

/// Compile `class` so that it only ever matches at the start of the haystack
pub fn anchored(class: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", class))
}

use std::fmt;
use std::ops::Range;

/// The character test carried by one compiled item.
///
/// `Set` does not own its members. `start..end` is a byte range into the
/// pattern source, between the brackets (and after a leading `^`), and is
/// read again every time the set is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Literal(char),
    Any,
    LineBreak,
    Letter,
    Digit,
    Whitespace,
    Lowercase,
    Uppercase,
    AlphaNumericOrUnderscore,
    Set { start: usize, end: usize },
}

/// Repetition policy attached to a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    ExactlyOne,
    /// `*`, greedy.
    ZeroOrMore,
    /// `+`, greedy.
    OneOrMore,
    /// `-`, stops as soon as the next item would match.
    Some,
    /// `?`
    ZeroOrOne,
}

impl Quantifier {
    pub fn from_suffix(c: char) -> Option<Self> {
        match c {
            '*' => Some(Quantifier::ZeroOrMore),
            '+' => Some(Quantifier::OneOrMore),
            '-' => Some(Quantifier::Some),
            '?' => Some(Quantifier::ZeroOrOne),
            _ => None,
        }
    }

    pub fn suffix(self) -> Option<char> {
        match self {
            Quantifier::ExactlyOne => None,
            Quantifier::ZeroOrMore => Some('*'),
            Quantifier::OneOrMore => Some('+'),
            Quantifier::Some => Some('-'),
            Quantifier::ZeroOrOne => Some('?'),
        }
    }
}

/// One compiled instruction: a class, its negation flag and a quantifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub class: CharClass,
    pub negated: bool,
    pub quantifier: Quantifier,
}

impl Item {
    pub fn new(class: CharClass) -> Self {
        Self {
            class,
            negated: false,
            quantifier: Quantifier::ExactlyOne,
        }
    }

    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }
}

/// Compact form used by `--dump`, e.g. `Digit+`, `!Set(2..5)*`, `Literal('x')`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        match self.class {
            CharClass::Set { start, end } => write!(f, "Set({start}..{end})")?,
            class => write!(f, "{class:?}")?,
        }
        match self.quantifier.suffix() {
            Some(suffix) => write!(f, "{suffix}"),
            None => Ok(()),
        }
    }
}

/// Outcome of a single match attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Success { start: usize, len: usize },
    Failure,
}

impl MatchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, MatchResult::Success { .. })
    }

    pub fn matched_len(&self) -> Option<usize> {
        match *self {
            MatchResult::Success { len, .. } => Some(len),
            MatchResult::Failure => None,
        }
    }

    /// Byte range of the subject covered by a successful match.
    pub fn range(&self) -> Option<Range<usize>> {
        match *self {
            MatchResult::Success { start, len } => Some(start..start + len),
            MatchResult::Failure => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantifier_suffixes_round_trip() {
        for c in ['*', '+', '-', '?'] {
            let q = Quantifier::from_suffix(c).unwrap();
            assert_eq!(q.suffix(), Some(c));
        }
        assert_eq!(Quantifier::from_suffix('a'), None);
        assert_eq!(Quantifier::ExactlyOne.suffix(), None);
    }

    #[test]
    fn item_display_shows_negation_and_suffix() {
        let mut item = Item::new(CharClass::Digit);
        item.quantifier = Quantifier::OneOrMore;
        assert_eq!(item.to_string(), "Digit+");

        let mut set = Item::new(CharClass::Set { start: 2, end: 5 }).negate();
        set.quantifier = Quantifier::ZeroOrMore;
        assert_eq!(set.to_string(), "!Set(2..5)*");

        assert_eq!(Item::new(CharClass::Literal('é')).to_string(), "Literal('é')");
    }

    #[test]
    fn failure_has_no_range() {
        assert_eq!(MatchResult::Failure.range(), None);
        assert_eq!(MatchResult::Failure.matched_len(), None);
        assert!(!MatchResult::Failure.is_success());
    }

    #[test]
    fn success_range_is_relative_to_subject() {
        let res = MatchResult::Success { start: 3, len: 2 };
        assert_eq!(res.range(), Some(3..5));
        assert_eq!(res.matched_len(), Some(2));
    }
}

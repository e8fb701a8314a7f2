use crate::ast::{CharClass, Item, MatchResult, Quantifier};
use crate::pattern::Pattern;

/// The part of `subject` the matcher may look at: everything before the
/// first NUL.
fn visible(subject: &str) -> &str {
    subject.find('\0').map_or(subject, |nul| &subject[..nul])
}

/// Character of the subject at byte `pos`, or `None` at the end.
fn char_at(subject: &str, pos: usize) -> Option<char> {
    subject.get(pos..)?.chars().next()
}

/// Test `c` against the members of a set stored at `source[start..end]`.
///
/// Members are `%x` (the character `x`), `a-z` ranges and plain characters;
/// the first member that accepts `c` wins. Negation is left to the caller.
pub fn match_set(source: &[u8], c: char, start: usize, end: usize) -> bool {
    let set = source
        .get(start..end)
        .and_then(|members| std::str::from_utf8(members).ok())
        .unwrap_or_default();

    let mut rest = set.chars();
    while let Some(first) = rest.next() {
        let hit = if first == '%' {
            // a trailing '%' stands for itself
            rest.next().unwrap_or('%') == c
        } else {
            let mut ahead = rest.clone();
            match (ahead.next(), ahead.next()) {
                (Some('-'), Some(last)) => {
                    rest = ahead;
                    (first..=last).contains(&c)
                }
                _ => first == c,
            }
        };
        if hit {
            return true;
        }
    }
    false
}

/// Test one subject character against an item's class, applying its negation.
///
/// The end of the subject (`None`) fails every class, negated ones included.
pub fn match_class(item: &Item, c: Option<char>, source: &[u8]) -> bool {
    let Some(c) = c else {
        return false;
    };
    let matched = match item.class {
        CharClass::Literal(lit) => c == lit,
        CharClass::Any => true,
        CharClass::LineBreak => c == '\n' || c == '\r',
        CharClass::Letter => c.is_ascii_alphabetic(),
        CharClass::Digit => c.is_ascii_digit(),
        CharClass::Whitespace => matches!(c, ' ' | '\t' | '\n' | '\r'),
        CharClass::Lowercase => c.is_ascii_lowercase(),
        CharClass::Uppercase => c.is_ascii_uppercase(),
        CharClass::AlphaNumericOrUnderscore => c.is_ascii_alphanumeric() || c == '_',
        CharClass::Set { start, end } => match_set(source, c, start, end),
    };
    matched != item.negated
}

/// Run `items[index]` against the subject at byte `cursor`.
///
/// Returns the number of bytes the item consumes, or `None` when it cannot
/// match. Variable-length items look at `items[index + 1]` to decide where
/// to stop; nothing further ahead is ever considered.
pub fn match_item(
    items: &[Item],
    index: usize,
    subject: &str,
    cursor: usize,
    source: &[u8],
) -> Option<usize> {
    let item = &items[index];
    let next = items.get(index + 1);
    let at = |size: usize| char_at(subject, cursor + size);
    let next_matches = |size: usize| next.is_some_and(|n| match_class(n, at(size), source));

    match item.quantifier {
        Quantifier::ExactlyOne => at(0)
            .filter(|&c| match_class(item, Some(c), source))
            .map(char::len_utf8),
        Quantifier::ZeroOrOne => Some(
            at(0)
                .filter(|&c| match_class(item, Some(c), source))
                .map_or(0, char::len_utf8),
        ),
        Quantifier::ZeroOrMore | Quantifier::OneOrMore => {
            // Consume every character the class accepts, but only report
            // the longest run after which the next item could start.
            let mut size = 0;
            let mut last_size = 0;
            while let Some(c) = at(size).filter(|&c| match_class(item, Some(c), source)) {
                size += c.len_utf8();
                if next.is_none() || next_matches(size) {
                    last_size = size;
                }
            }
            if item.quantifier == Quantifier::OneOrMore && size == 0 {
                return None;
            }
            Some(last_size)
        }
        Quantifier::Some => {
            let mut size = 0;
            while let Some(c) = at(size).filter(|&c| match_class(item, Some(c), source)) {
                size += c.len_utf8();
                if next_matches(size) {
                    break;
                }
            }
            Some(size)
        }
    }
}

/// Match a compiled pattern against `subject`, anchored at byte `start`.
///
/// Items are applied in order and each one commits to what it consumed;
/// there is no backtracking and no scanning for a later start. A `start`
/// inside a character, at the end, or at or past a NUL fails.
pub fn match_at(pattern: &Pattern, subject: &str, start: usize) -> MatchResult {
    let subject = visible(subject);
    if char_at(subject, start).is_none() {
        return MatchResult::Failure;
    }

    let items = pattern.items();
    let source = pattern.source();
    let mut cursor = start;

    for index in 0..items.len() {
        match match_item(items, index, subject, cursor, source) {
            Some(consumed) => cursor += consumed,
            None => return MatchResult::Failure,
        }
    }

    MatchResult::Success {
        start,
        len: cursor - start,
    }
}

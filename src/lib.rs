pub mod ast;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod pattern;

pub use ast::{CharClass, Item, MatchResult, Quantifier};
pub use error::CompileError;
pub use pattern::Pattern;

/// Compile `pattern` leniently. See [`Pattern::compile`].
pub fn compile(pattern: &str) -> Pattern {
    Pattern::compile(pattern)
}

/// Match `pattern` against `subject` anchored at byte `start`.
pub fn match_at(pattern: &Pattern, subject: &str, start: usize) -> MatchResult {
    pattern.match_at(subject, start)
}

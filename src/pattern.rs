use std::fmt;
use std::str::FromStr;

use bytes::Bytes;

use crate::ast::{Item, MatchResult};
use crate::error::{CompileError, Result};
use crate::matcher;
use crate::parser::Parser;

/// A compiled pattern.
///
/// The pattern keeps its own copy of the source text. Set items refer back
/// into it by byte offset, so the text is never exposed mutably and travels
/// with the items when the pattern is cloned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    start_anchored: bool,
    end_anchored: bool,
    source: Bytes,
    items: Vec<Item>,
}

impl Pattern {
    /// Compile `pattern`, accepting malformed sets and a trailing `%`.
    pub fn compile(pattern: &str) -> Self {
        let items = Parser::new(pattern).parse();
        let source = Bytes::copy_from_slice(pattern.as_bytes());
        Self::from_parts(source, items)
    }

    /// Compile `pattern`, rejecting input that `compile` would only guess at.
    pub fn compile_strict(pattern: &str) -> Result<Self> {
        let items = Parser::new(pattern).parse_strict()?;
        let source = Bytes::copy_from_slice(pattern.as_bytes());
        Ok(Self::from_parts(source, items))
    }

    fn from_parts(source: Bytes, items: Vec<Item>) -> Self {
        // `^` and `$` are compiled as literals for now
        Self {
            start_anchored: false,
            end_anchored: false,
            source,
            items,
        }
    }

    /// Match against `subject` starting exactly at byte `start`.
    pub fn match_at(&self, subject: &str, start: usize) -> MatchResult {
        matcher::match_at(self, subject, start)
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_start_anchored(&self) -> bool {
        self.start_anchored
    }

    pub fn is_end_anchored(&self) -> bool {
        self.end_anchored
    }
}

impl FromStr for Pattern {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::compile_strict(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.source))
    }
}

use crate::ast::{CharClass, Item, Quantifier};
use crate::error::{CompileError, Result};

/// Compiler from pattern text to a flat list of items.
///
/// The parser walks the pattern one character at a time and emits one `Item`
/// per class, folding a following quantifier suffix into it. `pos` is a byte
/// offset, so set bounds can point back into the text. It never fails on
/// malformed input; the first problem it tolerates is remembered so that
/// `parse_strict` can report it instead.
pub struct Parser<'a> {
    pub pattern: &'a str,
    pub pos: usize,
    problem: Option<CompileError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            pos: 0,
            problem: None,
        }
    }

    /// Peek at the next character in the pattern without advancing.
    fn peek(&self) -> Option<char> {
        self.pattern[self.pos..].chars().next()
    }

    /// Advance the parser by one character and return it.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn tolerate(&mut self, problem: CompileError) {
        if self.problem.is_none() {
            self.problem = Some(problem);
        }
    }

    /// Compile the whole pattern, accepting malformed sets and escapes.
    ///
    /// Example:
    /// - Pattern: `%d+x` → [Digit OneOrMore, Literal('x') ExactlyOne]
    pub fn parse(&mut self) -> Vec<Item> {
        let mut items = Vec::new();
        while let Some(c) = self.peek() {
            items.push(self.parse_item(c));
        }
        items
    }

    /// Compile the whole pattern, rejecting an unterminated set or a
    /// trailing `%`.
    pub fn parse_strict(&mut self) -> Result<Vec<Item>> {
        let items = self.parse();
        match self.problem.take() {
            Some(problem) => Err(problem),
            None => Ok(items),
        }
    }

    /// Parse a class followed by an optional quantifier suffix.
    ///
    /// Examples:
    /// - Pattern: `a*`  → Literal('a') ZeroOrMore
    /// - Pattern: `%a-` → Letter Some
    /// - Pattern: `.`   → Any ExactlyOne
    fn parse_item(&mut self, c: char) -> Item {
        let mut item = self.parse_class(c);
        if let Some(quantifier) = self.peek().and_then(Quantifier::from_suffix) {
            self.advance();
            item.quantifier = quantifier;
        }
        item
    }

    /// Parse a single class: `.`, a `[set]`, a `%x` escape or a literal.
    fn parse_class(&mut self, c: char) -> Item {
        match c {
            '.' => {
                self.advance();
                Item::new(CharClass::Any)
            }
            '[' => self.parse_set(),
            '%' => self.parse_escape(),
            _ => {
                self.advance();
                Item::new(CharClass::Literal(c))
            }
        }
    }

    /// Parse a `%x` escape.
    ///
    /// Lowercase letters name a class, their uppercase forms negate it.
    /// `%l` and `%u` have no negated form; `%L` and `%U` are literals like any
    /// other unknown escape.
    fn parse_escape(&mut self) -> Item {
        let open = self.pos;
        self.advance();
        let Some(c) = self.advance() else {
            self.tolerate(CompileError::TrailingEscape { offset: open });
            return Item::new(CharClass::Literal('%'));
        };
        match c {
            'n' => Item::new(CharClass::LineBreak),
            'N' => Item::new(CharClass::LineBreak).negate(),
            'a' => Item::new(CharClass::Letter),
            'A' => Item::new(CharClass::Letter).negate(),
            'd' => Item::new(CharClass::Digit),
            'D' => Item::new(CharClass::Digit).negate(),
            's' => Item::new(CharClass::Whitespace),
            'S' => Item::new(CharClass::Whitespace).negate(),
            'l' => Item::new(CharClass::Lowercase),
            'u' => Item::new(CharClass::Uppercase),
            'w' => Item::new(CharClass::AlphaNumericOrUnderscore),
            'W' => Item::new(CharClass::AlphaNumericOrUnderscore).negate(),
            other => Item::new(CharClass::Literal(other)),
        }
    }

    /// Parse a bracket set, e.g. `[abc]`, `[^a-z]` or `[%]x]`.
    ///
    /// Only the byte bounds are recorded. A `%` hides the character after it,
    /// so `%]` does not close the set. Without a closing `]` the set runs to
    /// the end of the pattern.
    fn parse_set(&mut self) -> Item {
        let open = self.pos;
        self.advance(); // consume '['
        let negated = self.peek() == Some('^');
        if negated {
            self.advance();
        }

        let start = self.pos;
        let end = loop {
            match self.peek() {
                Some(']') => {
                    let end = self.pos;
                    self.advance();
                    break end;
                }
                Some('%') => {
                    self.advance();
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    self.tolerate(CompileError::UnterminatedSet { offset: open });
                    break self.pos;
                }
            }
        };

        let item = Item::new(CharClass::Set { start, end });
        if negated {
            item.negate()
        } else {
            item
        }
    }
}

use thiserror::Error;

/// Problems rejected by strict compilation.
///
/// Lenient compilation accepts the same input and degrades gracefully, so
/// these are only ever produced by `Pattern::compile_strict`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("unterminated set starting at byte {offset}")]
    UnterminatedSet { offset: usize },

    #[error("pattern ends with a bare '%' at byte {offset}")]
    TrailingEscape { offset: usize },
}

pub type Result<T> = std::result::Result<T, CompileError>;

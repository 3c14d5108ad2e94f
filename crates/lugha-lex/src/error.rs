use lugha_util::Span;
use thiserror::Error;

/// Lexical errors: the first of the five-stage error taxonomy.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LexError {
    #[error("unexpected character '{ch}' at line {line}, column {column}")]
    UnexpectedChar {
        ch: char,
        line: u32,
        column: u32,
        span: Span,
    },

    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32, span: Span },

    #[error("unterminated block comment starting at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. } => *span,
            LexError::UnterminatedString { span, .. } => *span,
            LexError::UnterminatedComment { span, .. } => *span,
        }
    }
}

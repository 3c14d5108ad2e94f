use lugha_util::Span;
use thiserror::Error;

/// Syntactic errors: the second of the five-stage error taxonomy.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected {expected} but found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } => *span,
            ParseError::UnexpectedEof { span, .. } => *span,
        }
    }
}

use lugha_util::Span;
use thiserror::Error;

/// Semantic errors: the third of the five-stage error taxonomy.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SemanticError {
    #[error("variable '{name}' already declared in this scope")]
    AlreadyDeclared { name: String, span: Span },

    #[error("variable '{name}' not declared")]
    NotDeclared { name: String, span: Span },
}

impl SemanticError {
    pub fn span(&self) -> Span {
        match self {
            SemanticError::AlreadyDeclared { span, .. } => *span,
            SemanticError::NotDeclared { span, .. } => *span,
        }
    }
}

//! Shared error-formatting helpers.
//!
//! Every pipeline stage defines its own `thiserror` error enum, but the
//! final, user-facing shape is always the same: a short kind tag plus a
//! detail string, e.g. `"Syntactic: expected ';' but found '}'"`. This
//! module centralizes that formatting so stage crates don't re-invent it.

use std::fmt;

/// The broad category a compile error falls into, per the five-stage
/// error taxonomy: lexical, syntactic, semantic, IR/lowering and
/// runtime failures are never confused with one another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntactic,
    Semantic,
    Lowering,
    Runtime,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Lexical => "Lexical",
            ErrorKind::Syntactic => "Syntactic",
            ErrorKind::Semantic => "Semantic",
            ErrorKind::Lowering => "Lowering",
            ErrorKind::Runtime => "Runtime",
        };
        f.write_str(s)
    }
}

/// A fully-formed, user-facing compile or runtime error.
///
/// Implements [`Display`](fmt::Display) as `"<kind>: <detail>"`, matching
/// the `{ error: "<kind>: <detail>" }` shape surfaced at the top level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageError {
    pub kind: ErrorKind,
    pub detail: String,
}

impl StageError {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.detail)
    }
}

impl std::error::Error for StageError {}

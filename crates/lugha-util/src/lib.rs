//! Shared plumbing for the lugha compiler and virtual machine: source
//! spans, interned identifiers and the common error-formatting types
//! every pipeline stage builds on.

mod error;
mod span;
mod symbol;

pub use error::{ErrorKind, StageError};
pub use span::Span;
pub use symbol::{Interner, Symbol};

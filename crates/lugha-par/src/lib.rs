//! Recursive-descent parser producing the AST consumed by semantic
//! analysis and IR lowering.

pub mod ast;
mod error;
mod parser;

pub use ast::{BinaryOp, Expr, LiteralValue, LogicalOp, Program, Stmt};
pub use error::ParseError;
pub use parser::Parser;

use lugha_lir::Label;
use lugha_util::Symbol;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RuntimeError {
    #[error("undefined identifier: {0}")]
    UndefinedIdentifier(Symbol),

    #[error("stack underflow during {0}")]
    StackUnderflow(&'static str),

    #[error("division by zero")]
    DivisionByZero,

    #[error("operand to {0} is not a number")]
    NotANumber(&'static str),

    #[error("unknown jump label: {0:?}")]
    UnknownLabel(Label),

    #[error("call into undefined function: {0}")]
    UnknownFunction(Symbol),

    #[error("function {0} has no matching FUNC_END")]
    MissingFuncEnd(Symbol),
}

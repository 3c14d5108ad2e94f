//! The stack-machine instruction set. Every instruction here is
//! exactly the opcode the virtual machine dispatches on - there is no
//! textual re-encoding to parse back out, so there is nothing for a
//! substring match to misfire against.

use lugha_util::Symbol;

/// A label target, carried over unchanged from the mid-level IR.
pub use lugha_mir::Label;

/// The argument to a `PUSH`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum PushOperand {
    Number(f64),
    /// Quotes are still attached; the virtual machine strips them.
    Str(Symbol),
    Name(Symbol),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Instr {
    Push(PushOperand),
    Store(Symbol),
    Add,
    Sub,
    Mul,
    Div,
    CompareGt,
    CompareLt,
    CompareEq,
    CompareNe,
    CompareGte,
    CompareLte,
    LogicalAnd,
    LogicalOr,
    Print,
    Jump(Label),
    JumpIfTrue(Label),
    JumpIfFalse(Label),
    Label(Label),
    FuncDefine(Symbol),
    Param(Symbol),
    FuncStart,
    FuncEnd,
    Call(Symbol),
    Return,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TargetProgram {
    pub instructions: Vec<Instr>,
}

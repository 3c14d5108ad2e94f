//! The intermediate representation: a flat list of structured
//! instructions rather than the textual three-address quads a naive
//! implementation would re-parse. Dispatching on an enum tag avoids the
//! substring-matching hazards a line-oriented IR invites - a variable
//! named `مطبوع` must never be mistaken for a `print` instruction just
//! because its text happens to contain the keyword.

use lugha_util::Symbol;

/// An operand to an instruction: either a named slot (a declared
/// variable, a function parameter, or a compiler-generated temporary)
/// or a literal constant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Operand {
    Name(Symbol),
    Const(ConstValue),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ConstValue {
    Number(f64),
    /// Retains the surrounding quotes, matching the source literal.
    Str(Symbol),
}

/// A binary operator as it appears in a single IR instruction. Spans
/// arithmetic, comparison and logical operators uniformly since they
/// all lower to the same `dst = left op right` instruction shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum IrBinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    LtEq,
    Gt,
    GtEq,
    StrictEq,
    StrictNe,
    And,
    Or,
}

/// A compiler-generated label, unique within one function's linear
/// instruction stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Label(pub u32);

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Instr {
    /// `dst = src`
    Copy { dst: Symbol, src: Operand },
    /// `dst = left op right`
    Binary {
        dst: Symbol,
        op: IrBinOp,
        left: Operand,
        right: Operand,
    },
    /// `dst = call callee(args...)`
    Call {
        dst: Symbol,
        callee: Symbol,
        args: Vec<Operand>,
    },
    Label(Label),
    Goto(Label),
    /// `if cond goto label`
    IfGoto { cond: Operand, label: Label },
    /// `if not cond goto label`
    IfNotGoto { cond: Operand, label: Label },
    Print(Operand),
    /// `return value`; absent in a bare `اعد؟` with no expression.
    Return(Option<Operand>),
    FunctionBegin { name: Symbol, params: Vec<Symbol> },
    FunctionEnd,
}

/// A lowered compilation unit: one flat instruction stream. Function
/// bodies are inlined between their `FunctionBegin`/`FunctionEnd`
/// markers rather than split into separate units, mirroring how the
/// target generator and virtual machine consume a single program.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct IrProgram {
    pub instructions: Vec<Instr>,
}

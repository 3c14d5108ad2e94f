//! Target generation: IR to stack-machine instructions.
//!
//! The source pipeline this is modeled on re-parses textual IR lines
//! and dispatches on whatever substring happens to appear first in
//! each line (`"print" in line`, `"function " in line`, ...). Here the
//! mid-level IR already arrives as a tagged enum, so generation is a
//! direct match on that tag - the substring hazard (a variable named
//! `مطبوع` looking like a `print` line) cannot occur in the first
//! place.

use lugha_mir::{ConstValue, Instr as IrInstr, IrBinOp, IrProgram, Operand};

use crate::instr::{Instr, PushOperand, TargetProgram};

pub fn lower_target(program: &IrProgram) -> TargetProgram {
    tracing::debug!(
        instructions = program.instructions.len(),
        "generating target code"
    );
    let mut out = Vec::new();
    for instr in &program.instructions {
        lower_instr(instr, &mut out);
    }
    tracing::debug!(instructions = out.len(), "target generation complete");
    TargetProgram { instructions: out }
}

fn lower_instr(instr: &IrInstr, out: &mut Vec<Instr>) {
    match instr {
        IrInstr::Copy { dst, src } => {
            out.push(Instr::Push(push_operand(src)));
            out.push(Instr::Store(*dst));
        }
        IrInstr::Binary {
            dst,
            op,
            left,
            right,
        } => {
            out.push(Instr::Push(push_operand(left)));
            out.push(Instr::Push(push_operand(right)));
            out.push(binop_instr(*op));
            out.push(Instr::Store(*dst));
        }
        IrInstr::Call { dst, callee, args } => {
            for arg in args {
                out.push(Instr::Push(push_operand(arg)));
            }
            out.push(Instr::Call(*callee));
            out.push(Instr::Store(*dst));
        }
        IrInstr::Label(label) => out.push(Instr::Label(*label)),
        IrInstr::Goto(label) => out.push(Instr::Jump(*label)),
        IrInstr::IfGoto { cond, label } => {
            out.push(Instr::Push(push_operand(cond)));
            out.push(Instr::JumpIfTrue(*label));
        }
        IrInstr::IfNotGoto { cond, label } => {
            out.push(Instr::Push(push_operand(cond)));
            out.push(Instr::JumpIfFalse(*label));
        }
        IrInstr::Print(value) => {
            out.push(Instr::Push(push_operand(value)));
            out.push(Instr::Print);
        }
        IrInstr::Return(value) => {
            if let Some(value) = value {
                out.push(Instr::Push(push_operand(value)));
            }
            out.push(Instr::Return);
        }
        IrInstr::FunctionBegin { name, params } => {
            out.push(Instr::FuncDefine(*name));
            for param in params {
                out.push(Instr::Param(*param));
            }
            out.push(Instr::FuncStart);
        }
        IrInstr::FunctionEnd => out.push(Instr::FuncEnd),
    }
}

fn push_operand(operand: &Operand) -> PushOperand {
    match operand {
        Operand::Name(name) => PushOperand::Name(*name),
        Operand::Const(ConstValue::Number(n)) => PushOperand::Number(*n),
        Operand::Const(ConstValue::Str(s)) => PushOperand::Str(*s),
    }
}

fn binop_instr(op: IrBinOp) -> Instr {
    match op {
        IrBinOp::Add => Instr::Add,
        IrBinOp::Sub => Instr::Sub,
        IrBinOp::Mul => Instr::Mul,
        IrBinOp::Div => Instr::Div,
        IrBinOp::Gt => Instr::CompareGt,
        IrBinOp::Lt => Instr::CompareLt,
        // No separate strict-equality opcode exists at the stack
        // machine level; `===`/`!==` compare the same way `==`/`!=`
        // do once operands reach the VM's single value
        // representation.
        IrBinOp::Eq | IrBinOp::StrictEq => Instr::CompareEq,
        IrBinOp::Ne | IrBinOp::StrictNe => Instr::CompareNe,
        IrBinOp::GtEq => Instr::CompareGte,
        IrBinOp::LtEq => Instr::CompareLte,
        IrBinOp::And => Instr::LogicalAnd,
        IrBinOp::Or => Instr::LogicalOr,
    }
}

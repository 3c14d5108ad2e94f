//! Optimizer.
//!
//! A single, narrow pass: fold arithmetic between two constant numeric
//! operands at compile time. Nothing else is touched. In particular,
//! `print`, `return`, `call`, the control-flow instructions and labels
//! are never rewritten or removed - they anchor observable behavior,
//! and a pass that drops or reorders them would change what the
//! program prints.
//!
//! This stage is optional: feeding its input straight to the target
//! generator unchanged is always valid, since the pass only ever
//! replaces an instruction with one that has identical runtime effect.

use crate::ir::{ConstValue, Instr, IrBinOp, IrProgram, Operand};

pub fn optimize(mut program: IrProgram) -> IrProgram {
    let mut folded = 0;
    for instr in &mut program.instructions {
        if let Instr::Binary {
            dst,
            op,
            left: Operand::Const(ConstValue::Number(l)),
            right: Operand::Const(ConstValue::Number(r)),
        } = instr
        {
            if let Some(value) = fold_numeric(*op, *l, *r) {
                *instr = Instr::Copy {
                    dst: *dst,
                    src: Operand::Const(ConstValue::Number(value)),
                };
                folded += 1;
            }
        }
    }
    tracing::debug!(folded, "constant folding complete");
    program
}

fn fold_numeric(op: IrBinOp, l: f64, r: f64) -> Option<f64> {
    match op {
        IrBinOp::Add => Some(l + r),
        IrBinOp::Sub => Some(l - r),
        IrBinOp::Mul => Some(l * r),
        // Division by zero is left unfolded so the virtual machine
        // raises the same runtime error it would for a non-constant
        // expression.
        IrBinOp::Div if r != 0.0 => Some(l / r),
        IrBinOp::Eq => Some(bool_to_num(l == r)),
        IrBinOp::Ne => Some(bool_to_num(l != r)),
        IrBinOp::Lt => Some(bool_to_num(l < r)),
        IrBinOp::LtEq => Some(bool_to_num(l <= r)),
        IrBinOp::Gt => Some(bool_to_num(l > r)),
        IrBinOp::GtEq => Some(bool_to_num(l >= r)),
        IrBinOp::StrictEq => Some(bool_to_num(l == r)),
        IrBinOp::StrictNe => Some(bool_to_num(l != r)),
        IrBinOp::And => Some(bool_to_num(l != 0.0 && r != 0.0)),
        IrBinOp::Or => Some(bool_to_num(l != 0.0 || r != 0.0)),
        IrBinOp::Div => None,
    }
}

fn bool_to_num(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lugha_util::Symbol;

    #[test]
    fn folds_constant_addition() {
        let dst = Symbol::intern("t1");
        let program = IrProgram {
            instructions: vec![Instr::Binary {
                dst,
                op: IrBinOp::Add,
                left: Operand::Const(ConstValue::Number(2.0)),
                right: Operand::Const(ConstValue::Number(3.0)),
            }],
        };
        let optimized = optimize(program);
        assert_eq!(
            optimized.instructions[0],
            Instr::Copy {
                dst,
                src: Operand::Const(ConstValue::Number(5.0)),
            }
        );
    }

    #[test]
    fn leaves_division_by_zero_unfolded() {
        let dst = Symbol::intern("t2");
        let program = IrProgram {
            instructions: vec![Instr::Binary {
                dst,
                op: IrBinOp::Div,
                left: Operand::Const(ConstValue::Number(1.0)),
                right: Operand::Const(ConstValue::Number(0.0)),
            }],
        };
        let optimized = optimize(program.clone());
        assert_eq!(optimized, program);
    }

    #[test]
    fn does_not_touch_non_constant_binary() {
        let dst = Symbol::intern("t3");
        let name = Symbol::intern("س");
        let program = IrProgram {
            instructions: vec![Instr::Binary {
                dst,
                op: IrBinOp::Add,
                left: Operand::Name(name),
                right: Operand::Const(ConstValue::Number(1.0)),
            }],
        };
        let optimized = optimize(program.clone());
        assert_eq!(optimized, program);
    }
}

//! AST to IR lowering.
//!
//! Rust's exhaustive `match` over [`lugha_par::Stmt`] and
//! [`lugha_par::Expr`] means there is no "unknown AST variant" branch
//! to fail on here - the compiler already proves every shape is
//! handled, so lowering cannot fail.

use lugha_par::{BinaryOp, Expr, LiteralValue, LogicalOp, Program, Stmt};

use crate::builder::Builder;
use crate::ir::{ConstValue, Instr, IrBinOp, IrProgram, Operand};

pub fn lower_program(program: &Program) -> IrProgram {
    tracing::debug!(statements = program.body.len(), "lowering AST to IR");
    let mut builder = Builder::new();
    for stmt in &program.body {
        lower_stmt(&mut builder, stmt);
    }
    let ir = builder.build();
    tracing::debug!(instructions = ir.instructions.len(), "lowering complete");
    ir
}

fn lower_stmt(b: &mut Builder, stmt: &Stmt) {
    match stmt {
        Stmt::VariableDecl { id, init, .. } => {
            let src = match init {
                Some(expr) => lower_expr(b, expr),
                None => Operand::Const(ConstValue::Number(0.0)),
            };
            b.push(Instr::Copy { dst: *id, src });
        }
        Stmt::Assignment { id, value, .. } => {
            let src = lower_expr(b, value);
            b.push(Instr::Copy { dst: *id, src });
        }
        Stmt::If {
            test, consequent, ..
        } => {
            let condition = lower_expr(b, test);
            let temp_condition = b.new_temp();
            b.push(Instr::Copy {
                dst: temp_condition,
                src: condition,
            });
            let true_label = b.new_label();
            let end_label = b.new_label();
            b.push(Instr::IfGoto {
                cond: Operand::Name(temp_condition),
                label: true_label,
            });
            b.push(Instr::Goto(end_label));
            b.push(Instr::Label(true_label));
            for stmt in consequent {
                lower_stmt(b, stmt);
            }
            b.push(Instr::Label(end_label));
        }
        Stmt::While { test, body, .. } => {
            let condition_label = b.new_label();
            let end_label = b.new_label();
            b.push(Instr::Label(condition_label));
            let condition = lower_expr(b, test);
            let temp_condition = b.new_temp();
            b.push(Instr::Copy {
                dst: temp_condition,
                src: condition,
            });
            b.push(Instr::IfNotGoto {
                cond: Operand::Name(temp_condition),
                label: end_label,
            });
            for stmt in body {
                lower_stmt(b, stmt);
            }
            b.push(Instr::Goto(condition_label));
            b.push(Instr::Label(end_label));
        }
        Stmt::FunctionDecl {
            name, params, body, ..
        } => {
            b.push(Instr::FunctionBegin {
                name: *name,
                params: params.clone(),
            });
            for stmt in body {
                lower_stmt(b, stmt);
            }
            b.push(Instr::FunctionEnd);
        }
        Stmt::Return { value, .. } => {
            let operand = value.as_ref().map(|expr| lower_expr(b, expr));
            b.push(Instr::Return(operand));
        }
        Stmt::Print { expr, .. } => {
            let value = lower_expr(b, expr);
            b.push(Instr::Print(value));
        }
        Stmt::ExprStmt { expr, .. } => {
            // Result discarded: a bare call statement is evaluated for
            // its side effects only.
            lower_expr(b, expr);
        }
    }
}

fn lower_expr(b: &mut Builder, expr: &Expr) -> Operand {
    match expr {
        Expr::Literal { value, .. } => Operand::Const(match value {
            LiteralValue::Number(n) => ConstValue::Number(*n),
            LiteralValue::Str(s) => ConstValue::Str(*s),
        }),
        Expr::Identifier { name, .. } => Operand::Name(*name),
        Expr::Binary {
            operator,
            left,
            right,
            ..
        } => {
            let left = lower_expr(b, left);
            let right = lower_expr(b, right);
            let dst = b.new_temp();
            b.push(Instr::Binary {
                dst,
                op: lower_binop(*operator),
                left,
                right,
            });
            Operand::Name(dst)
        }
        Expr::Logical {
            operator,
            left,
            right,
            ..
        } => {
            // Strict (non-short-circuit): both operands are always
            // evaluated before the operator runs.
            let left = lower_expr(b, left);
            let right = lower_expr(b, right);
            let dst = b.new_temp();
            let op = match operator {
                LogicalOp::And => IrBinOp::And,
                LogicalOp::Or => IrBinOp::Or,
            };
            b.push(Instr::Binary {
                dst,
                op,
                left,
                right,
            });
            Operand::Name(dst)
        }
        Expr::Call {
            callee, arguments, ..
        } => {
            let args = arguments.iter().map(|arg| lower_expr(b, arg)).collect();
            let dst = b.new_temp();
            b.push(Instr::Call {
                dst,
                callee: *callee,
                args,
            });
            Operand::Name(dst)
        }
    }
}

fn lower_binop(op: BinaryOp) -> IrBinOp {
    match op {
        BinaryOp::Add => IrBinOp::Add,
        BinaryOp::Sub => IrBinOp::Sub,
        BinaryOp::Mul => IrBinOp::Mul,
        BinaryOp::Div => IrBinOp::Div,
        BinaryOp::Eq => IrBinOp::Eq,
        BinaryOp::Ne => IrBinOp::Ne,
        BinaryOp::Lt => IrBinOp::Lt,
        BinaryOp::LtEq => IrBinOp::LtEq,
        BinaryOp::Gt => IrBinOp::Gt,
        BinaryOp::GtEq => IrBinOp::GtEq,
        BinaryOp::StrictEq => IrBinOp::StrictEq,
        BinaryOp::StrictNe => IrBinOp::StrictNe,
    }
}

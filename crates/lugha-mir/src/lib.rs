//! Mid-level intermediate representation: lowers the checked AST to a
//! flat instruction stream and optionally folds constant arithmetic
//! before handing off to the target generator.

mod builder;
mod ir;
mod lower;
mod optimize;

pub use ir::{ConstValue, Instr, IrBinOp, IrProgram, Label, Operand};
pub use lower::lower_program;
pub use optimize::optimize;

#[cfg(test)]
mod tests {
    use super::*;
    use lugha_lex::Lexer;
    use lugha_par::Parser;
    use lugha_sem::Analyzer;

    fn lower_source(source: &str) -> IrProgram {
        let tokens = Lexer::tokenize(source).expect("lex");
        let program = Parser::parse(tokens).expect("parse");
        Analyzer::analyze(&program).expect("analyze");
        lower_program(&program)
    }

    #[test]
    fn lowers_variable_declaration_without_initializer() {
        let ir = lower_source("عرف س؟");
        assert_eq!(
            ir.instructions,
            vec![Instr::Copy {
                dst: lugha_util::Symbol::intern("س"),
                src: Operand::Const(ConstValue::Number(0.0)),
            }]
        );
    }

    #[test]
    fn lowers_if_with_true_and_end_labels() {
        let ir = lower_source("عرف س = 1؟ لو (س == 1) { عرض (س)؟ }");
        let has_if_goto = ir
            .instructions
            .iter()
            .any(|i| matches!(i, Instr::IfGoto { .. }));
        let has_print = ir.instructions.iter().any(|i| matches!(i, Instr::Print(_)));
        assert!(has_if_goto);
        assert!(has_print);
    }

    #[test]
    fn lowers_while_with_condition_label_before_test() {
        let ir = lower_source("عرف س = 0؟ بينما (س < 1) { س = 1؟ }");
        let first_label = ir
            .instructions
            .iter()
            .position(|i| matches!(i, Instr::Label(_)));
        assert_eq!(first_label, Some(1));
    }

    #[test]
    fn constant_folding_collapses_literal_arithmetic() {
        let ir = lower_source("عرض (1 + 2)؟");
        let optimized = optimize(ir);
        let has_binary = optimized
            .instructions
            .iter()
            .any(|i| matches!(i, Instr::Binary { .. }));
        assert!(!has_binary);
    }

    #[test]
    fn function_body_is_bracketed_by_begin_and_end() {
        let ir = lower_source("دالة س() { اعد؟ }");
        assert!(matches!(ir.instructions[0], Instr::FunctionBegin { .. }));
        assert!(matches!(
            ir.instructions[ir.instructions.len() - 1],
            Instr::FunctionEnd
        ));
    }
}

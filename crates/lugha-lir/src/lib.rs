//! Target generation: lowers the mid-level IR to the flat instruction
//! stream the virtual machine executes.

mod instr;
mod lower;

pub use instr::{Instr, Label, PushOperand, TargetProgram};
pub use lower::lower_target;

#[cfg(test)]
mod tests {
    use super::*;
    use lugha_lex::Lexer;
    use lugha_mir::lower_program;
    use lugha_par::Parser;
    use lugha_sem::Analyzer;

    fn target_for(source: &str) -> TargetProgram {
        let tokens = Lexer::tokenize(source).expect("lex");
        let program = Parser::parse(tokens).expect("parse");
        Analyzer::analyze(&program).expect("analyze");
        let ir = lower_program(&program);
        lower_target(&ir)
    }

    #[test]
    fn print_lowers_to_push_then_print() {
        let target = target_for("عرض (1)؟");
        assert_eq!(
            target.instructions,
            vec![Instr::Push(PushOperand::Number(1.0)), Instr::Print]
        );
    }

    #[test]
    fn comparison_assignment_pushes_both_then_compares() {
        let target = target_for("عرف س = 1 < 2؟");
        assert!(target
            .instructions
            .iter()
            .any(|i| matches!(i, Instr::CompareLt)));
    }

    #[test]
    fn function_body_emits_define_params_start_and_end() {
        let target = target_for("دالة س(أ, ب) { اعد أ؟ }");
        assert!(matches!(target.instructions[0], Instr::FuncDefine(_)));
        assert!(matches!(target.instructions[1], Instr::Param(_)));
        assert!(matches!(target.instructions[2], Instr::Param(_)));
        assert!(matches!(target.instructions[3], Instr::FuncStart));
        assert!(matches!(
            target.instructions[target.instructions.len() - 1],
            Instr::FuncEnd
        ));
    }

    #[test]
    fn while_condition_uses_jump_if_false() {
        let target = target_for("عرف ن = 0؟ بينما (ن < 3) { ن = ن + 1؟ }");
        assert!(target
            .instructions
            .iter()
            .any(|i| matches!(i, Instr::JumpIfFalse(_))));
    }

    #[test]
    fn call_pushes_args_then_call_then_store() {
        let target = target_for("دالة س(أ) { اعد أ؟ } عرف ن = س(5)؟");
        let call_pos = target
            .instructions
            .iter()
            .position(|i| matches!(i, Instr::Call(_)))
            .expect("a call instruction");
        assert!(matches!(
            target.instructions[call_pos + 1],
            Instr::Store(_)
        ));
    }
}

//! Compiler driver: wires the five pipeline stages together behind a
//! single `compile_and_run` entry point and gives the result a shape
//! that can cross a process boundary as JSON.

use lugha_lex::{Lexer, Token};
use lugha_lir::{lower_target, TargetProgram};
use lugha_mir::{lower_program, optimize, IrProgram};
use lugha_par::{Parser, Program};
use lugha_sem::Analyzer;
use lugha_util::{ErrorKind, StageError};
use lugha_vm::{Value, VirtualMachine};

/// The five artifacts the pipeline produces for one source string,
/// plus the values the virtual machine printed.
#[derive(Debug, serde::Serialize)]
pub struct ExecutionResult {
    pub tokens: Vec<Token>,
    pub ast: Program,
    pub ir: IrProgram,
    pub target: TargetProgram,
    pub output: Vec<Value>,
}

/// Runs the full pipeline - lex, parse, analyze, lower, optimize,
/// generate target code, execute - on `source`.
///
/// Fails fast: the first stage to error short-circuits the rest, and
/// its error is tagged with that stage's place in the taxonomy.
pub fn compile_and_run(source: &str) -> Result<ExecutionResult, StageError> {
    let tokens =
        Lexer::tokenize(source).map_err(|e| StageError::new(ErrorKind::Lexical, e.to_string()))?;

    let ast = Parser::parse(tokens.clone())
        .map_err(|e| StageError::new(ErrorKind::Syntactic, e.to_string()))?;

    Analyzer::analyze(&ast).map_err(|e| StageError::new(ErrorKind::Semantic, e.to_string()))?;

    let ir = optimize(lower_program(&ast));
    let target = lower_target(&ir);

    let output = VirtualMachine::new(&target)
        .run()
        .map_err(|e| StageError::new(ErrorKind::Runtime, e.to_string()))?;

    Ok(ExecutionResult {
        tokens,
        ast,
        ir,
        target,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_scenario_one_prints_when_condition_holds() {
        let result =
            compile_and_run(r#"عرف س = 10 ؟ لو (س > 5) { عرض ("س اكبر من 5") ؟ }"#).unwrap();
        assert_eq!(result.output, vec![Value::Str("س اكبر من 5".into())]);
    }

    #[test]
    fn end_to_end_scenario_two_prints_nothing_when_condition_fails() {
        let result = compile_and_run(r#"عرف س = 3 ؟ لو (س > 5) { عرض ("big") ؟ }"#).unwrap();
        assert!(result.output.is_empty());
    }

    #[test]
    fn end_to_end_scenario_three_adds_two_declared_numbers() {
        let result = compile_and_run("عرف أ = 2 ؟ عرف ب = 3 ؟ عرض (أ + ب) ؟").unwrap();
        assert_eq!(result.output, vec![Value::Number(5.0)]);
    }

    #[test]
    fn end_to_end_scenario_four_while_loop_prints_counter_each_iteration() {
        let result =
            compile_and_run("عرف ن = 0 ؟ بينما (ن < 3) { عرض (ن) ؟ ن = ن + 1 ؟ }").unwrap();
        assert_eq!(
            result.output,
            vec![Value::Number(0.0), Value::Number(1.0), Value::Number(2.0)]
        );
    }

    #[test]
    fn end_to_end_scenario_five_second_if_is_independent_of_the_first() {
        let result = compile_and_run(
            r#"عرف أ = 10 ؟ عرف ب = 20 ؟ لو (أ < ب) { عرض ("l") ؟ } لو (أ > ب) { عرض ("g") ؟ }"#,
        )
        .unwrap();
        assert_eq!(result.output, vec![Value::Str("l".into())]);
    }

    #[test]
    fn end_to_end_scenario_six_is_a_runtime_division_error() {
        let err = compile_and_run("عرف ص = 10 ؟ عرف ع = ص / 0 ؟").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Runtime);
    }

    #[test]
    fn undeclared_identifier_is_a_semantic_error() {
        let err = compile_and_run("عرض (س)؟").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Semantic);
    }

    #[test]
    fn missing_terminator_is_a_syntactic_error() {
        let err = compile_and_run("عرف س = 1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntactic);
    }

    #[test]
    fn stray_character_is_a_lexical_error() {
        let err = compile_and_run("@").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
    }

    #[test]
    fn empty_program_produces_no_output_and_all_five_artifacts() {
        let result = compile_and_run("").unwrap();
        assert!(result.tokens.len() >= 1); // at least Eof
        assert!(result.ast.body.is_empty());
        assert!(result.ir.instructions.is_empty());
        assert!(result.target.instructions.is_empty());
        assert!(result.output.is_empty());
    }
}

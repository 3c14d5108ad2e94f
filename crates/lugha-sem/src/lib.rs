//! Scope checking over the parsed AST: redeclaration and undeclared-use
//! errors, nothing more (no type system - the language is untyped).

mod analysis;
mod error;
mod scope;

pub use analysis::Analyzer;
pub use error::SemanticError;

#[cfg(test)]
mod tests {
    use super::*;
    use lugha_lex::Lexer;
    use lugha_par::Parser;

    fn analyze(source: &str) -> Result<(), SemanticError> {
        let tokens = Lexer::tokenize(source).unwrap();
        let program = Parser::parse(tokens).unwrap();
        Analyzer::analyze(&program)
    }

    #[test]
    fn rejects_redeclaration_in_same_scope() {
        assert!(analyze("عرف س؟ عرف س؟").is_err());
    }

    #[test]
    fn rejects_use_of_undeclared_identifier() {
        assert!(analyze("عرف س = ص؟").is_err());
    }

    #[test]
    fn allows_shadowing_across_nested_scopes() {
        assert!(analyze("عرف س؟ لو (1) { عرف س؟ }").is_ok());
    }

    #[test]
    fn allows_params_to_shadow_outer_declarations() {
        assert!(analyze("عرف س؟ دالة ف(س) { عرض (س)؟ }").is_ok());
    }

    #[test]
    fn assignment_to_undeclared_name_is_not_a_semantic_error() {
        assert!(analyze("س = 5؟").is_ok());
    }

    #[test]
    fn self_referencing_initializer_is_accepted_at_semantic_stage() {
        // `س` is declared before its own initializer is visited, matching
        // the ground truth's declare-then-visit order - the runtime is
        // where a read of an uninitialized slot actually gets caught.
        assert!(analyze("عرف س = س؟").is_ok());
    }
}

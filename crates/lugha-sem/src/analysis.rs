//! Scope checking.
//!
//! Walks the AST maintaining a stack of lexical scopes, exactly as a
//! textbook symbol table would: declaring a name that already exists in
//! the innermost scope is an error, and so is referencing a name that
//! isn't visible from the current scope outward.
//!
//! Assignment targets are deliberately *not* checked against the scope
//! stack - the runtime stores all variables in one flat map regardless
//! of where they were declared, so rejecting an assignment to an
//! as-yet-undeclared name here would reject programs the virtual
//! machine runs just fine.

use lugha_par::{Expr, LiteralValue, Program, Stmt};
use lugha_util::Symbol;

use crate::error::SemanticError;
use crate::scope::ScopeStack;

pub struct Analyzer {
    scopes: ScopeStack,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            scopes: ScopeStack::new(),
        }
    }

    pub fn analyze(program: &Program) -> Result<(), SemanticError> {
        tracing::debug!(statements = program.body.len(), "analyzing program");
        let mut analyzer = Analyzer::new();
        for stmt in &program.body {
            analyzer.visit_stmt(stmt)?;
        }
        tracing::debug!("analysis complete");
        Ok(())
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::VariableDecl { id, init, span } => {
                if !self.scopes.declare(*id) {
                    return Err(SemanticError::AlreadyDeclared {
                        name: id.as_str(),
                        span: *span,
                    });
                }
                if let Some(init) = init {
                    self.visit_expr(init)?;
                }
                Ok(())
            }
            Stmt::Assignment { value, .. } => self.visit_expr(value),
            Stmt::If {
                test, consequent, ..
            } => {
                self.visit_expr(test)?;
                self.scopes.enter_scope();
                let result = consequent.iter().try_for_each(|s| self.visit_stmt(s));
                self.scopes.exit_scope();
                result
            }
            Stmt::While { test, body, .. } => {
                self.visit_expr(test)?;
                self.scopes.enter_scope();
                let result = body.iter().try_for_each(|s| self.visit_stmt(s));
                self.scopes.exit_scope();
                result
            }
            Stmt::FunctionDecl {
                name,
                params,
                body,
                span,
            } => {
                if !self.scopes.declare(*name) {
                    return Err(SemanticError::AlreadyDeclared {
                        name: name.as_str(),
                        span: *span,
                    });
                }
                self.scopes.enter_scope();
                for param in params {
                    self.scopes.declare(*param);
                }
                let result = body.iter().try_for_each(|s| self.visit_stmt(s));
                self.scopes.exit_scope();
                result
            }
            Stmt::Return { value, .. } => match value {
                Some(value) => self.visit_expr(value),
                None => Ok(()),
            },
            Stmt::Print { expr, .. } => self.visit_expr(expr),
            Stmt::ExprStmt { expr, .. } => self.visit_expr(expr),
        }
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), SemanticError> {
        match expr {
            Expr::Literal { value, .. } => match value {
                LiteralValue::Number(_) | LiteralValue::Str(_) => Ok(()),
            },
            Expr::Identifier { name, span } => self.check_declared(*name, *span),
            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                self.visit_expr(left)?;
                self.visit_expr(right)
            }
            Expr::Call { arguments, .. } => {
                arguments.iter().try_for_each(|arg| self.visit_expr(arg))
            }
        }
    }

    fn check_declared(&self, name: Symbol, span: lugha_util::Span) -> Result<(), SemanticError> {
        if self.scopes.is_declared(name) {
            Ok(())
        } else {
            Err(SemanticError::NotDeclared {
                name: name.as_str(),
                span,
            })
        }
    }
}

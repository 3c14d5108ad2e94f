//! Recursive-descent parser.
//!
//! Each grammar rule below is one precedence level, lowest to highest:
//! logical (`&&`, `||`) -> comparison -> additive -> multiplicative ->
//! factor. All operators are left-associative.

use lugha_lex::{Token, TokenKind};
use lugha_util::Symbol;

use crate::ast::{BinaryOp, Expr, LiteralValue, LogicalOp, Program, Stmt};
use crate::error::ParseError;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn parse(source_tokens: Vec<Token>) -> Result<Program, ParseError> {
        tracing::debug!(tokens = source_tokens.len(), "parsing token stream");
        let mut parser = Parser::new(source_tokens);
        let mut body = Vec::new();
        while !parser.at_eof() {
            body.push(parser.parse_statement()?);
        }
        tracing::debug!(statements = body.len(), "parsing complete");
        Ok(Program { body })
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn at_eof(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, expected: &TokenKind, label: &str) -> Result<Token, ParseError> {
        if std::mem::discriminant(&self.current().kind) == std::mem::discriminant(expected) {
            Ok(self.advance())
        } else if matches!(self.current().kind, TokenKind::Eof) {
            Err(ParseError::UnexpectedEof {
                expected: label.to_string(),
                span: self.current().span,
            })
        } else {
            Err(ParseError::UnexpectedToken {
                expected: label.to_string(),
                found: format!("{:?}", self.current().kind),
                span: self.current().span,
            })
        }
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match &self.current().kind {
            TokenKind::Declare => self.parse_variable_decl(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Function => self.parse_function_decl(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Identifier(_) => self.parse_identifier_led_statement(),
            other => Err(ParseError::UnexpectedToken {
                expected: "a statement".to_string(),
                found: format!("{other:?}"),
                span: self.current().span,
            }),
        }
    }

    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(&TokenKind::LBrace, "'{'")?;
        let mut stmts = Vec::new();
        while !matches!(self.current().kind, TokenKind::RBrace) {
            if self.at_eof() {
                return Err(ParseError::UnexpectedEof {
                    expected: "'}'".to_string(),
                    span: self.current().span,
                });
            }
            stmts.push(self.parse_statement()?);
        }
        self.expect(&TokenKind::RBrace, "'}'")?;
        Ok(stmts)
    }

    fn parse_variable_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span; // عرف
        let id = self.expect_identifier()?;
        let init = if matches!(self.current().kind, TokenKind::Assign) {
            self.advance();
            Some(self.parse_expression()?)
        } else {
            None
        };
        let end = self.expect(&TokenKind::Terminator, "'؟'")?.span;
        Ok(Stmt::VariableDecl {
            id,
            init,
            span: start.to(end),
        })
    }

    fn parse_identifier_led_statement(&mut self) -> Result<Stmt, ParseError> {
        let name_tok = self.advance();
        let name = match name_tok.kind {
            TokenKind::Identifier(sym) => sym,
            _ => unreachable!("guarded by caller"),
        };

        if matches!(self.current().kind, TokenKind::Assign) {
            self.advance();
            let value = self.parse_expression()?;
            let end = self.expect(&TokenKind::Terminator, "'؟'")?.span;
            return Ok(Stmt::Assignment {
                id: name,
                value,
                span: name_tok.span.to(end),
            });
        }

        if matches!(self.current().kind, TokenKind::LParen) {
            let call_span_start = name_tok.span;
            let arguments = self.parse_call_arguments()?;
            let call_end = self.tokens[self.pos - 1].span;
            let call = Expr::Call {
                callee: name,
                arguments,
                span: call_span_start.to(call_end),
            };
            let end = self.expect(&TokenKind::Terminator, "'؟'")?.span;
            return Ok(Stmt::ExprStmt {
                expr: call,
                span: call_span_start.to(end),
            });
        }

        Err(ParseError::UnexpectedToken {
            expected: "'=' or '('".to_string(),
            found: format!("{:?}", self.current().kind),
            span: self.current().span,
        })
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span; // لو
        self.expect(&TokenKind::LParen, "'('")?;
        let test = self.parse_expression()?;
        self.expect(&TokenKind::RParen, "')'")?;
        let consequent = self.parse_block()?;
        let end = self.tokens[self.pos - 1].span;
        Ok(Stmt::If {
            test,
            consequent,
            span: start.to(end),
        })
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span; // بينما
        self.expect(&TokenKind::LParen, "'('")?;
        let test = self.parse_expression()?;
        self.expect(&TokenKind::RParen, "')'")?;
        let body = self.parse_block()?;
        let end = self.tokens[self.pos - 1].span;
        Ok(Stmt::While {
            test,
            body,
            span: start.to(end),
        })
    }

    fn parse_function_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span; // دالة
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LParen, "'('")?;
        let mut params = Vec::new();
        if matches!(self.current().kind, TokenKind::Identifier(_)) {
            params.push(self.expect_identifier()?);
            while matches!(self.current().kind, TokenKind::Comma) {
                self.advance();
                params.push(self.expect_identifier()?);
            }
        }
        self.expect(&TokenKind::RParen, "')'")?;
        let body = self.parse_block()?;
        let end = self.tokens[self.pos - 1].span;
        Ok(Stmt::FunctionDecl {
            name,
            params,
            body,
            span: start.to(end),
        })
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span; // عرض
        self.expect(&TokenKind::LParen, "'('")?;
        let expr = self.parse_expression()?;
        self.expect(&TokenKind::RParen, "')'")?;
        let end = self.expect(&TokenKind::Terminator, "'؟'")?.span;
        Ok(Stmt::Print {
            expr,
            span: start.to(end),
        })
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span; // اعد
        let value = if matches!(self.current().kind, TokenKind::Terminator) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        let end = self.expect(&TokenKind::Terminator, "'؟'")?.span;
        Ok(Stmt::Return {
            value,
            span: start.to(end),
        })
    }

    fn parse_call_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect(&TokenKind::LParen, "'('")?;
        let mut args = Vec::new();
        if !matches!(self.current().kind, TokenKind::RParen) {
            args.push(self.parse_expression()?);
            while matches!(self.current().kind, TokenKind::Comma) {
                self.advance();
                args.push(self.parse_expression()?);
            }
        }
        self.expect(&TokenKind::RParen, "')'")?;
        Ok(args)
    }

    fn expect_identifier(&mut self) -> Result<Symbol, ParseError> {
        match &self.current().kind {
            TokenKind::Identifier(sym) => {
                let sym = *sym;
                self.advance();
                Ok(sym)
            }
            other => Err(ParseError::UnexpectedToken {
                expected: "an identifier".to_string(),
                found: format!("{other:?}"),
                span: self.current().span,
            }),
        }
    }

    // ---- expressions, lowest to highest precedence ----

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_logical()
    }

    fn parse_logical(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;
        loop {
            let op = match self.current().kind {
                TokenKind::AndAnd => LogicalOp::And,
                TokenKind::OrOr => LogicalOp::Or,
                _ => break,
            };
            self.advance();
            let right = self.parse_comparison()?;
            let span = left.span().to(right.span());
            left = Expr::Logical {
                operator: op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.current().kind {
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::Ne,
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::GtEq => BinaryOp::GtEq,
                TokenKind::EqEqEq => BinaryOp::StrictEq,
                TokenKind::NotEqEq => BinaryOp::StrictNe,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            let span = left.span().to(right.span());
            left = Expr::Binary {
                operator: op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            let span = left.span().to(right.span());
            left = Expr::Binary {
                operator: op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor()?;
            let span = left.span().to(right.span());
            left = Expr::Binary {
                operator: op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let tok = self.current().clone();
        match tok.kind {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::Literal {
                    value: LiteralValue::Number(n),
                    span: tok.span,
                })
            }
            TokenKind::StringLiteral(sym) => {
                self.advance();
                Ok(Expr::Literal {
                    value: LiteralValue::Str(sym),
                    span: tok.span,
                })
            }
            TokenKind::Identifier(sym) => {
                self.advance();
                if matches!(self.current().kind, TokenKind::LParen) {
                    let arguments = self.parse_call_arguments()?;
                    let end = self.tokens[self.pos - 1].span;
                    Ok(Expr::Call {
                        callee: sym,
                        arguments,
                        span: tok.span.to(end),
                    })
                } else {
                    Ok(Expr::Identifier {
                        name: sym,
                        span: tok.span,
                    })
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            other => Err(ParseError::UnexpectedToken {
                expected: "a number, string, identifier or '('".to_string(),
                found: format!("{other:?}"),
                span: tok.span,
            }),
        }
    }
}

//! Lexer: turns source text into a stream of [`Token`]s.
//!
//! Dispatch is direct-coded rather than table-driven: each branch of
//! [`Lexer::next_token`] recognizes one lexeme shape and returns
//! immediately, which keeps error messages tied to a single call site.

use lugha_util::{Span, Symbol};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start};

fn keyword_kind(text: &str) -> Option<TokenKind> {
    match text {
        "عرف" => Some(TokenKind::Declare),
        "لو" => Some(TokenKind::If),
        "بينما" => Some(TokenKind::While),
        "دالة" => Some(TokenKind::Function),
        "عرض" => Some(TokenKind::Print),
        "اعد" => Some(TokenKind::Return),
        _ => None,
    }
}

pub struct Lexer<'source> {
    cursor: Cursor<'source>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Tokenizes the whole source, including a trailing [`TokenKind::Eof`].
    pub fn tokenize(source: &'source str) -> Result<Vec<Token>, LexError> {
        tracing::debug!(bytes = source.len(), "lexing source");
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token()?;
            let is_eof = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        tracing::debug!(tokens = tokens.len(), "lexing complete");
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;

        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(Token::new(
                TokenKind::Eof,
                Span::new(start, start, line, column),
            ));
        }

        let c = self.cursor.current_char();

        let kind = match c {
            '(' => {
                self.cursor.advance();
                TokenKind::LParen
            }
            ')' => {
                self.cursor.advance();
                TokenKind::RParen
            }
            '{' => {
                self.cursor.advance();
                TokenKind::LBrace
            }
            '}' => {
                self.cursor.advance();
                TokenKind::RBrace
            }
            ',' => {
                self.cursor.advance();
                TokenKind::Comma
            }
            '؟' => {
                self.cursor.advance();
                TokenKind::Terminator
            }
            '+' => {
                self.cursor.advance();
                TokenKind::Plus
            }
            '-' => {
                self.cursor.advance();
                TokenKind::Minus
            }
            '*' => {
                self.cursor.advance();
                TokenKind::Star
            }
            '/' => {
                self.cursor.advance();
                TokenKind::Slash
            }
            '&' => {
                self.cursor.advance();
                if self.cursor.match_char('&') {
                    TokenKind::AndAnd
                } else {
                    return Err(LexError::UnexpectedChar {
                        ch: '&',
                        line,
                        column,
                        span: Span::new(start, self.cursor.position(), line, column),
                    });
                }
            }
            '|' => {
                self.cursor.advance();
                if self.cursor.match_char('|') {
                    TokenKind::OrOr
                } else {
                    return Err(LexError::UnexpectedChar {
                        ch: '|',
                        line,
                        column,
                        span: Span::new(start, self.cursor.position(), line, column),
                    });
                }
            }
            '!' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    if self.cursor.match_char('=') {
                        TokenKind::NotEqEq
                    } else {
                        TokenKind::NotEq
                    }
                } else {
                    TokenKind::Bang
                }
            }
            '=' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    if self.cursor.match_char('=') {
                        TokenKind::EqEqEq
                    } else {
                        TokenKind::EqEq
                    }
                } else {
                    TokenKind::Assign
                }
            }
            '<' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                self.cursor.advance();
                if self.cursor.match_char('=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            '"' => self.scan_string(start, line, column)?,
            c if c.is_ascii_digit() => self.scan_number(start),
            c if is_ident_start(c) => self.scan_identifier(start),
            c => {
                self.cursor.advance();
                return Err(LexError::UnexpectedChar {
                    ch: c,
                    line,
                    column,
                    span: Span::new(start, self.cursor.position(), line, column),
                });
            }
        };

        Ok(Token::new(
            kind,
            Span::new(start, self.cursor.position(), line, column),
        ))
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        self.cursor.advance();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        keyword_kind(text).unwrap_or_else(|| TokenKind::Identifier(Symbol::intern(text)))
    }

    fn scan_number(&mut self, start: usize) -> TokenKind {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        if self.cursor.current_char() == '.'
            && self.cursor.peek_char(1).is_ascii_digit()
        {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }
        let text = self.cursor.slice_from(start);
        TokenKind::Number(text.parse().expect("scanned number literal must parse"))
    }

    fn scan_string(&mut self, start: usize, line: u32, column: u32) -> Result<TokenKind, LexError> {
        self.cursor.advance(); // opening quote
        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedString {
                    line,
                    column,
                    span: Span::new(start, self.cursor.position(), line, column),
                });
            }
            match self.cursor.current_char() {
                '\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                '"' => {
                    self.cursor.advance();
                    break;
                }
                _ => self.cursor.advance(),
            }
        }
        // Keeps the surrounding quotes, matching runtime string values.
        let text = self.cursor.slice_from(start);
        Ok(TokenKind::StringLiteral(Symbol::intern(text)))
    }

    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.cursor.current_char() {
                c if c.is_whitespace() => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                }
                '/' if self.cursor.peek_char(1) == '*' => {
                    let start = self.cursor.position();
                    let line = self.cursor.line();
                    let column = self.cursor.column();
                    self.cursor.advance();
                    self.cursor.advance();
                    loop {
                        if self.cursor.is_at_end() {
                            return Err(LexError::UnterminatedComment {
                                line,
                                column,
                                span: Span::new(start, self.cursor.position(), line, column),
                            });
                        }
                        if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                            self.cursor.advance();
                            self.cursor.advance();
                            break;
                        }
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lexes_declaration() {
        let ks = kinds("عرف س = 5؟");
        assert_eq!(ks[0], TokenKind::Declare);
        assert!(matches!(ks[1], TokenKind::Identifier(_)));
    }

    #[test]
    fn lexes_keywords_not_as_identifiers() {
        let ks = kinds("لو");
        assert_eq!(ks, vec![TokenKind::If, TokenKind::Eof]);
    }

    #[test]
    fn lexes_comparison_operators_longest_match_first() {
        assert_eq!(
            kinds("==="),
            vec![TokenKind::EqEqEq, TokenKind::Eof]
        );
        assert_eq!(kinds("=="), vec![TokenKind::EqEq, TokenKind::Eof]);
        assert_eq!(kinds("="), vec![TokenKind::Assign, TokenKind::Eof]);
    }

    #[test]
    fn skips_line_and_block_comments() {
        let ks = kinds("// تعليق\n/* تعليق آخر */عرض");
        assert_eq!(ks, vec![TokenKind::Print, TokenKind::Eof]);
    }

    #[test]
    fn string_literal_keeps_quotes() {
        let toks = Lexer::tokenize("\"أهلا\"").unwrap();
        match &toks[0].kind {
            TokenKind::StringLiteral(sym) => assert_eq!(sym.as_str(), "\"أهلا\""),
            other => panic!("expected string literal, got {other:?}"),
        }
    }

    #[test]
    fn string_literal_handles_escaped_quote() {
        let toks = Lexer::tokenize(r#""a\"b""#).unwrap();
        match &toks[0].kind {
            TokenKind::StringLiteral(sym) => assert_eq!(sym.as_str(), r#""a\"b""#),
            other => panic!("expected string literal, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(Lexer::tokenize("\"abc").is_err());
    }

    #[test]
    fn unexpected_character_is_an_error() {
        assert!(Lexer::tokenize("@").is_err());
    }

    #[test]
    fn reaches_eof_on_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }
}

use lugha_util::{Span, Symbol};

/// A lexical unit, paired with the span it was scanned from.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The category a [`Token`] belongs to.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum TokenKind {
    // Keywords
    /// `عرف` - variable declaration.
    Declare,
    /// `لو` - conditional.
    If,
    /// `بينما` - loop.
    While,
    /// `دالة` - function declaration.
    Function,
    /// `عرض` - print statement.
    Print,
    /// `اعد` - return statement.
    Return,

    // Literals
    Identifier(Symbol),
    Number(f64),
    /// Interned text includes the surrounding double quotes verbatim.
    StringLiteral(Symbol),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    AndAnd,
    OrOr,
    Bang,
    Assign,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    EqEqEq,
    NotEqEq,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    /// `؟` - statement terminator.
    Terminator,

    Eof,
}

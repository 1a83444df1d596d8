//! Token kinds produced by the external scanner.
//!
//! Only the kind and source line survive into the syntax tree: literals and
//! identifiers are carried by their own nodes, so `TokenKind` is fieldless.

use std::fmt;

/// Token kinds for Waray.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Semicolon,
    Colon,
    Pound,

    // Operators
    Minus,
    Plus,
    Star,
    StarStar,
    Caret,
    Slash,
    Modulo,
    Equal,
    Bang,
    BangEqual,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Pipe,

    // Literals
    String,
    Number,
    Identifier,
    Nil,
    True,
    False,

    // Keywords
    Not,
    And,
    Or,
    Map,
    Reduce,
    Filter,
    Print,
    If,
    Else,
    Function,
    Return,
    End,

    Eof,
}

impl TokenKind {
    /// Source spelling of the token, used in diagnostics.
    pub const fn lexeme(self) -> &'static str {
        match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Pound => "#",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Star => "*",
            Self::StarStar => "**",
            Self::Caret => "^",
            Self::Slash => "/",
            Self::Modulo => "%",
            Self::Equal => "=",
            Self::Bang => "!",
            Self::BangEqual => "!=",
            Self::EqualEqual => "==",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Pipe => "|>",
            Self::String => "<string>",
            Self::Number => "<number>",
            Self::Identifier => "<identifier>",
            Self::Nil => "nil",
            Self::True => "true",
            Self::False => "false",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
            Self::Map => "map",
            Self::Reduce => "reduce",
            Self::Filter => "filter",
            Self::Print => "print",
            Self::If => "if",
            Self::Else => "else",
            Self::Function => "fn",
            Self::Return => "return",
            Self::End => "end",
            Self::Eof => "<eof>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

/// An operator token as it appears in `Binary` and `Unary` nodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based source line, reported in runtime diagnostics.
    pub line: u32,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, line: u32) -> Self {
        Token { kind, line }
    }
}

use std::fmt;
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Colon,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    // Literals.
    Identifier,
    String,
    Number,
    // Keywords.
    And,
    Class,
    Struct,
    Else,
    False,
    For,
    Fun,
    If,
    Null,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
    // Preprocessor directives, tokenized whole and never expanded here.
    IfNotDefined, // #ifndef
    Define,       // #define
    PreIf,        // #if
    PreElse,      // #else
    EndIf,        // #endif
    // Native integer types.
    U8,
    U16,
    U32,
    U64,
    S8,
    S16,
    S32,
    S64,
    // Other.
    Eof,
}

/// Decoded literal value, borrowed from the source where possible.
/// The sub-scanner that produced the token decides the variant.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Literal<'src> {
    Float(f64),
    Int32(i32),
    Int64(i64),
    Str(&'src str),
}

impl Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Float(value) => write!(f, "{value:?}"),
            Literal::Int32(value) => write!(f, "{value}i32"),
            Literal::Int64(value) => write!(f, "{value}i64"),
            Literal::Str(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub literal: Option<Literal<'src>>,
    pub line: usize,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lexeme.is_empty(), self.literal) {
            (true, _) => write!(f, "{:?}", self.kind),
            (false, None) => write!(f, "{:?} '{}'", self.kind, self.lexeme),
            (false, Some(literal)) => write!(f, "{:?} '{}' {}", self.kind, self.lexeme, literal),
        }
    }
}

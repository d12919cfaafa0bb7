use std::sync::LazyLock;

use ahash::AHashMap;

use crate::error::LexError;
use crate::error::Report;
use token::{Literal, Token, TokenKind};

pub mod token;

/// Reserved-word table, shared by every scanner in the process. Lookup is
/// exact-match and case-sensitive.
static KEYWORDS: LazyLock<AHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut keywords = AHashMap::with_capacity(30);
    keywords.insert("and", TokenKind::And);
    keywords.insert("class", TokenKind::Class);
    keywords.insert("struct", TokenKind::Struct);
    keywords.insert("else", TokenKind::Else);
    keywords.insert("false", TokenKind::False);
    keywords.insert("for", TokenKind::For);
    keywords.insert("fun", TokenKind::Fun);
    keywords.insert("if", TokenKind::If);
    keywords.insert("null", TokenKind::Null);
    keywords.insert("or", TokenKind::Or);
    keywords.insert("print", TokenKind::Print);
    keywords.insert("return", TokenKind::Return);
    keywords.insert("super", TokenKind::Super);
    keywords.insert("this", TokenKind::This);
    keywords.insert("true", TokenKind::True);
    keywords.insert("var", TokenKind::Var);
    keywords.insert("while", TokenKind::While);
    keywords.insert("#ifndef", TokenKind::IfNotDefined);
    keywords.insert("#define", TokenKind::Define);
    keywords.insert("#if", TokenKind::PreIf);
    keywords.insert("#else", TokenKind::PreElse);
    keywords.insert("#endif", TokenKind::EndIf);
    keywords.insert("u8", TokenKind::U8);
    keywords.insert("u16", TokenKind::U16);
    keywords.insert("u32", TokenKind::U32);
    keywords.insert("u64", TokenKind::U64);
    keywords.insert("s8", TokenKind::S8);
    keywords.insert("s16", TokenKind::S16);
    keywords.insert("s32", TokenKind::S32);
    keywords.insert("s64", TokenKind::S64);
    keywords
});

/// Single-pass scanner over one source unit. Lexical errors go to the
/// injected [`Report`] sink and never stop the scan.
pub struct Scanner<'src, 'rep> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
    start: usize,
    current: usize,
    line: usize,
    reporter: &'rep mut dyn Report,
}

impl<'src, 'rep> Scanner<'src, 'rep> {
    pub fn new(source: &'src str, reporter: &'rep mut dyn Report) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token<'src>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: "",
            literal: None,
            line: self.line,
        });
        self.tokens
    }

    fn scan_token(&mut self) {
        let byte = self.advance();
        match byte {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b':' => self.add_token(TokenKind::Colon), // reserved, no distinguished use yet
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'!' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::BangEqual),
                false => self.add_token(TokenKind::Bang),
            },
            b'=' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::EqualEqual),
                false => self.add_token(TokenKind::Equal),
            },
            b'<' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::LessEqual),
                false => self.add_token(TokenKind::Less),
            },
            b'>' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::GreaterEqual),
                false => self.add_token(TokenKind::Greater),
            },
            b'/' => {
                if self.is_match(b'/') {
                    while self.peek() != b'\n' && !self.is_at_end() {
                        self.current += 1;
                    }
                } else if self.is_match(b'*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.string(),
            b'0' => {
                if self.is_match(b'x') || self.is_match(b'X') {
                    self.hex();
                } else if self.is_match(b'b') || self.is_match(b'B') {
                    self.binary();
                } else {
                    self.number();
                }
            }
            b if b.is_ascii_digit() => self.number(),
            // '#' starts a lexeme only so the directive spellings reach the
            // keyword table; it is not an identifier continuation byte.
            b'#' => self.identifier(),
            b if is_alpha(b) => self.identifier(),
            _ => self.reporter.report(self.line, LexError::UnexpectedCharacter),
        }
    }

    fn identifier(&mut self) {
        loop {
            let byte = self.peek();
            if !byte.is_ascii_digit() && !is_alpha(byte) {
                break;
            }
            self.current += 1;
        }
        let kind = match KEYWORDS.get(self.lexeme()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };
        self.add_token(kind);
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.current += 1;
        }
        // The dot belongs to the number only when a digit follows it.
        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.current += 1;
            while self.peek().is_ascii_digit() {
                self.current += 1;
            }
        }
        let value = self.lexeme().parse::<f64>().unwrap_or_default();
        self.add_literal_token(TokenKind::Number, Literal::Float(value));
    }

    fn hex(&mut self) {
        while self.peek().is_ascii_hexdigit() {
            self.current += 1;
        }
        let digits = &self.lexeme()[2..];
        // Unsigned-magnitude decode; an empty digit run or a run past 16
        // digits decodes as 0.
        let value = u64::from_str_radix(digits, 16).unwrap_or_default();
        // Width heuristic: 64-bit only when the leading digit is above '7'
        // and there are at least 8 digits. Inherited as-is.
        let wide = digits.len() >= 8 && digits.as_bytes().first().is_some_and(|&b| b > b'7');
        match wide {
            true => self.add_literal_token(TokenKind::Number, Literal::Int64(value as i64)),
            false => self.add_literal_token(TokenKind::Number, Literal::Int32(value as i32)),
        }
    }

    fn binary(&mut self) {
        while matches!(self.peek(), b'0' | b'1') {
            self.current += 1;
        }
        let digits = &self.lexeme()[2..];
        let value = u32::from_str_radix(digits, 2).unwrap_or_default();
        self.add_literal_token(TokenKind::Number, Literal::Int32(value as i32));
    }

    fn string(&mut self) {
        while self.peek() != b'"' && !self.is_at_end() {
            if self.advance() == b'\n' {
                self.line += 1;
            }
        }
        if self.is_at_end() {
            self.reporter.report(self.line, LexError::UnterminatedString);
            return;
        }
        self.current += 1;
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenKind::String, Literal::Str(value));
    }

    fn block_comment(&mut self) {
        while !self.is_at_end() {
            if self.peek() == b'*' && self.peek_next() == b'/' {
                self.current += 2;
                return;
            }
            if self.advance() == b'\n' {
                self.line += 1;
            }
        }
        // Unterminated block comments consume the rest of the input with no
        // diagnostic. Known asymmetry with unterminated strings.
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme(),
            literal: None,
            line: self.line,
        });
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal<'src>) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme(),
            literal: Some(literal),
            line: self.line,
        });
    }

    fn advance(&mut self) -> u8 {
        let byte = self.source.as_bytes()[self.current];
        self.current += 1;
        byte
    }

    fn is_match(&mut self, expected: u8) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.peek() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.current).copied().unwrap_or(b'\0')
    }

    fn peek_next(&self) -> u8 {
        self.source.as_bytes().get(self.current + 1).copied().unwrap_or(b'\0')
    }
}

fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_uppercase() || byte == b'_'
}

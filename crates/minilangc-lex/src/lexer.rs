use minilangc_util::Span;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Number, Token, TokenKind};

/// Fixed keyword table. Matching is case-sensitive, as specified.
fn keyword(lexeme: &str) -> Option<TokenKind> {
    match lexeme {
        "var" => Some(TokenKind::Var),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "print" => Some(TokenKind::Print),
        _ => None,
    }
}

/// Scans a source string into a token stream terminated by exactly one
/// `Eof` token.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    fn start_span(&self) -> Span {
        Span::new(self.token_start_line, self.token_start_column)
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, "", self.start_span()));
        }

        let c = self.cursor.current_char();
        match c {
            '(' => self.single(TokenKind::LParen, c),
            ')' => self.single(TokenKind::RParen, c),
            '{' => self.single(TokenKind::LBrace, c),
            '}' => self.single(TokenKind::RBrace, c),
            '+' => self.single(TokenKind::Plus, c),
            '-' => self.single(TokenKind::Minus, c),
            '*' => self.single(TokenKind::Multiply, c),
            ';' => self.single(TokenKind::Semicolon, c),
            '/' => self.single(TokenKind::Divide, c),
            '=' => Ok(self.two_char_or('=', TokenKind::Equal, TokenKind::Assign)),
            '!' => self.lex_bang(),
            '<' => Ok(self.two_char_or('=', TokenKind::LessEqual, TokenKind::LessThan)),
            '>' => Ok(self.two_char_or('=', TokenKind::GreaterEqual, TokenKind::GreaterThan)),
            c if c.is_ascii_digit() => self.lex_number(),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.lex_identifier()),
            c => {
                let span = self.start_span();
                self.cursor.advance();
                Err(LexError::UnrecognizedChar { ch: c, span })
            }
        }
    }

    fn single(&mut self, kind: TokenKind, c: char) -> Result<Token, LexError> {
        self.cursor.advance();
        Ok(Token::new(kind, c.to_string(), self.start_span()))
    }

    /// Consumes `=` if it follows the current character, producing `two`;
    /// otherwise emits just the current character as `one`. Handles
    /// `==, !=, <=, >=` — the two-character operators that take priority
    /// over their one-character prefixes.
    fn two_char_or(&mut self, second: char, two: TokenKind, one: TokenKind) -> Token {
        let first = self.cursor.current_char();
        self.cursor.advance();
        if self.cursor.match_char(second) {
            Token::new(two, format!("{first}{second}"), self.start_span())
        } else {
            Token::new(one, first.to_string(), self.start_span())
        }
    }

    fn lex_bang(&mut self) -> Result<Token, LexError> {
        let span = self.start_span();
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Ok(Token::new(TokenKind::NotEqual, "!=", span))
        } else {
            Err(LexError::UnrecognizedChar { ch: '!', span })
        }
    }

    /// Greedy run of digits with at most one `.`. Rejects a second dot or
    /// a dot with no following digit (`3.14.5`, `3.`).
    fn lex_number(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.position();
        let span = self.start_span();
        let mut dot_count = 0;

        while self.cursor.current_char().is_ascii_digit() || self.cursor.current_char() == '.' {
            if self.cursor.current_char() == '.' {
                dot_count += 1;
            }
            self.cursor.advance();
        }

        let text = &self.source_slice(start);
        let malformed = dot_count > 1 || text.ends_with('.');
        if malformed {
            return Err(LexError::MalformedNumber {
                text: text.to_string(),
                span,
            });
        }

        let number = if dot_count == 1 {
            Number::Float(text.parse().expect("validated float literal"))
        } else {
            Number::Int(text.parse().expect("validated integer literal"))
        };

        Ok(Token::new(
            TokenKind::Number(number),
            text.to_string(),
            span,
        ))
    }

    fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        let span = self.start_span();

        while {
            let c = self.cursor.current_char();
            c.is_ascii_alphanumeric() || c == '_'
        } {
            self.cursor.advance();
        }

        let text = self.source_slice(start);
        let kind = keyword(&text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, span)
    }

    fn source_slice(&self, start: usize) -> String {
        self.cursor.source()[start..self.cursor.position()].to_string()
    }
}

//! JSON lexer/tokenizer.
//!
//! Pulls one token at a time from the input text. The lexer is lenient in
//! the ways the serializer relies on: unknown escapes pass through as the
//! two characters `\X`, and a number token may hold several `.` characters
//! (the parser rejects those when it converts the text).

use std::fmt;
use std::iter::FusedIterator;

use super::limits::Limits;
use crate::error::{JsonError, JsonResult};

/// Token types produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// String value (unescaped)
    String,
    /// Number without a decimal point
    Int,
    /// Number containing at least one `.`
    Float,
    /// `true` or `false`
    Boolean,
    /// Null literal
    Null,
    /// End of input
    Eof,
}

impl TokenType {
    /// Upper-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::LeftBrace => "LEFT_BRACE",
            TokenType::RightBrace => "RIGHT_BRACE",
            TokenType::LeftBracket => "LEFT_BRACKET",
            TokenType::RightBracket => "RIGHT_BRACKET",
            TokenType::Colon => "COLON",
            TokenType::Comma => "COMMA",
            TokenType::String => "STRING",
            TokenType::Int => "INT",
            TokenType::Float => "FLOAT",
            TokenType::Boolean => "BOOLEAN",
            TokenType::Null => "NULL",
            TokenType::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexical unit and its text.
///
/// For strings the text is the unescaped content without quotes; for every
/// other token it is the source text (`""` for EOF).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    token_type: TokenType,
    text: String,
}

impl Token {
    /// Create a token.
    pub fn new(token_type: TokenType, text: impl Into<String>) -> Self {
        Self {
            token_type,
            text: text.into(),
        }
    }

    fn eof() -> Self {
        Self::new(TokenType::Eof, "")
    }

    /// The token's classification.
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// The token's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the token, keeping its text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// True for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }
}

/// JSON lexer over a borrowed input text.
///
/// `next_token` returns [`TokenType::Eof`] forever once the input is
/// exhausted. The [`Iterator`] impl stops at EOF instead and is fused after
/// the first error.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    token_start: usize,
    limits: Limits,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer with no size limit.
    ///
    /// Nesting depth and trailing input keep their [`Limits::compatible`]
    /// settings, so a parser built on this lexer is still depth-bounded.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            token_start: 0,
            limits: Limits {
                max_input_size: u64::MAX,
                ..Limits::compatible()
            },
            finished: false,
        }
    }

    /// Create a lexer that enforces `limits.max_input_size`.
    ///
    /// The remaining limits are carried along for the parser.
    pub fn with_limits(input: &'a str, limits: Limits) -> JsonResult<Self> {
        let size = input.len() as u64;
        if size > limits.max_input_size {
            return Err(JsonError::InputTooLarge {
                size,
                limit: limits.max_input_size,
            });
        }

        Ok(Self {
            input,
            pos: 0,
            token_start: 0,
            limits,
            finished: false,
        })
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Byte offset where the most recently returned token starts.
    ///
    /// For EOF this is the end of the input.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Limits this lexer was built with.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Read the next token from the input.
    pub fn next_token(&mut self) -> JsonResult<Token> {
        // The cursor always moves past the character being tested.
        let (start, current) = loop {
            let start = self.pos;
            self.token_start = start;
            match self.advance() {
                None => return Ok(Token::eof()),
                // Unicode White_Space: U+00A0 counts, U+001C..U+001F do not.
                Some(c) if c.is_whitespace() => continue,
                Some(c) => break (start, c),
            }
        };

        let structural = |token_type| Ok(Token::new(token_type, current.to_string()));
        match current {
            '{' => structural(TokenType::LeftBrace),
            '}' => structural(TokenType::RightBrace),
            '[' => structural(TokenType::LeftBracket),
            ']' => structural(TokenType::RightBracket),
            ':' => structural(TokenType::Colon),
            ',' => structural(TokenType::Comma),
            '"' => self.read_string(),
            '-' | '0'..='9' => Ok(self.read_number(start)),
            c if c.is_alphabetic() => self.read_literal(start),
            ch => Err(JsonError::InvalidCharacter {
                ch,
                position: start,
            }),
        }
    }

    /// Read a string token. The opening quote is already consumed.
    fn read_string(&mut self) -> JsonResult<Token> {
        let mut result = String::new();

        loop {
            match self.advance() {
                None => return Err(JsonError::UnterminatedString { partial: result }),
                Some('"') => break,
                Some('\\') => match self.advance() {
                    None => return Err(JsonError::UnterminatedString { partial: result }),
                    Some(c @ ('"' | '\\' | '/')) => result.push(c),
                    Some('f') => result.push('\x0C'),
                    Some('n') => result.push('\n'),
                    Some('r') => result.push('\r'),
                    Some('t') => result.push('\t'),
                    Some(other) => {
                        result.push('\\');
                        result.push(other);
                    }
                },
                Some(c) => result.push(c),
            }
        }

        Ok(Token::new(TokenType::String, result))
    }

    /// Read a number token starting at `start` (first character consumed).
    fn read_number(&mut self, start: usize) -> Token {
        while let Some('0'..='9' | '.') = self.peek() {
            self.advance();
        }

        let text = &self.input[start..self.pos];
        let token_type = if text.contains('.') {
            TokenType::Float
        } else {
            TokenType::Int
        };
        Token::new(token_type, text)
    }

    /// Read a bare word and classify it as a literal.
    fn read_literal(&mut self, start: usize) -> JsonResult<Token> {
        while self.peek().is_some_and(char::is_alphabetic) {
            self.advance();
        }

        match &self.input[start..self.pos] {
            word @ ("true" | "false") => Ok(Token::new(TokenType::Boolean, word)),
            word @ "null" => Ok(Token::new(TokenType::Null, word)),
            word => Err(JsonError::InvalidLiteral {
                literal: word.to_string(),
            }),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = JsonResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

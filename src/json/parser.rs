//! JSON parser.
//!
//! Recursive descent over the lexer's token stream with a single token of
//! lookahead and no backtracking:
//!
//! ```text
//! value   := object | array | STRING | INT | FLOAT | BOOLEAN | NULL
//! object  := '{' (STRING ':' value (',')?)* '}'
//! array   := '[' (value (',')?)* ']'
//! ```
//!
//! Separating commas are optional, so trailing commas are accepted. Whether
//! input after the top-level value is an error depends on
//! [`Limits::allow_trailing_input`].

use super::array::Array;
use super::lexer::{Lexer, Token, TokenType};
use super::limits::Limits;
use super::object::Object;
use super::types::Node;
use crate::error::{JsonError, JsonResult};

/// JSON parser holding the current lookahead token.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    limits: Limits,
    depth: u64,
}

impl<'a> Parser<'a> {
    /// Create a parser and pull the first lookahead token.
    ///
    /// The parser uses the limits the lexer was built with.
    pub fn new(mut lexer: Lexer<'a>) -> JsonResult<Self> {
        let current = lexer.next_token()?;
        let limits = lexer.limits();
        Ok(Self {
            lexer,
            current,
            limits,
            depth: 0,
        })
    }

    /// Parse one value from the current lookahead position.
    pub fn parse(&mut self) -> JsonResult<Node> {
        let value = self.parse_value()?;

        if !self.limits.allow_trailing_input && !self.current.is_eof() {
            return Err(JsonError::TrailingInput {
                position: self.lexer.token_start(),
            });
        }

        Ok(value)
    }

    /// Consume the lookahead if it has type `expected`, returning it.
    fn expect(&mut self, expected: TokenType) -> JsonResult<Token> {
        if self.current.token_type() != expected {
            return Err(JsonError::TokenMismatch {
                expected,
                found: self.current.token_type(),
            });
        }
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Parse a single JSON value.
    fn parse_value(&mut self) -> JsonResult<Node> {
        match self.current.token_type() {
            TokenType::LeftBrace => Ok(Node::Object(self.parse_object()?)),
            TokenType::LeftBracket => Ok(Node::Array(self.parse_array()?)),
            TokenType::String => {
                let token = self.expect(TokenType::String)?;
                Ok(Node::Str(token.into_text()))
            }
            TokenType::Int => {
                let token = self.expect(TokenType::Int)?;
                parse_int(token.text()).map(Node::Int)
            }
            TokenType::Float => {
                let token = self.expect(TokenType::Float)?;
                parse_float(token.text()).map(Node::Float)
            }
            TokenType::Boolean => {
                let token = self.expect(TokenType::Boolean)?;
                // Anything but the exact text "true" is false.
                Ok(Node::Bool(token.text() == "true"))
            }
            TokenType::Null => {
                self.expect(TokenType::Null)?;
                Ok(Node::Null)
            }
            found => Err(JsonError::UnexpectedToken { found }),
        }
    }

    /// Track one more level of nesting.
    fn enter(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            tracing::trace!(
                depth = self.depth,
                limit = self.limits.max_nesting_depth,
                "nesting limit reached"
            );
            return Err(JsonError::NestingTooDeep {
                depth: self.depth,
                limit: self.limits.max_nesting_depth,
            });
        }
        Ok(())
    }

    /// Parse a JSON object.
    fn parse_object(&mut self) -> JsonResult<Object> {
        self.enter()?;
        let mut object = Object::new();

        self.expect(TokenType::LeftBrace)?;
        while self.current.token_type() != TokenType::RightBrace {
            let key = self.expect(TokenType::String)?.into_text();
            self.expect(TokenType::Colon)?;
            let value = self.parse_value()?;
            object.put(key, value);
            if self.current.token_type() == TokenType::Comma {
                self.expect(TokenType::Comma)?;
            }
        }
        self.expect(TokenType::RightBrace)?;

        self.depth -= 1;
        Ok(object)
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> JsonResult<Array> {
        self.enter()?;
        let mut array = Array::new();

        self.expect(TokenType::LeftBracket)?;
        while self.current.token_type() != TokenType::RightBracket {
            let value = self.parse_value()?;
            array.add(value);
            if self.current.token_type() == TokenType::Comma {
                self.expect(TokenType::Comma)?;
            }
        }
        self.expect(TokenType::RightBracket)?;

        self.depth -= 1;
        Ok(array)
    }
}

fn parse_int(text: &str) -> JsonResult<i32> {
    text.parse().map_err(|_| JsonError::InvalidNumber {
        text: text.to_string(),
    })
}

fn parse_float(text: &str) -> JsonResult<f32> {
    match text.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(JsonError::InvalidNumber {
            text: text.to_string(),
        }),
    }
}

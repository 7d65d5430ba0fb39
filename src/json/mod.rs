//! JSON parsing and serialization.
//!
//! A small, self-contained JSON value library for constrained runtimes.
//! Numbers are 32-bit, there is no exponent notation and no `\uXXXX`
//! escapes, and the serializer follows a fixed, slightly unusual format
//! (see [`write`]).
//!
//! # Architecture
//!
//! - [`lexer`] - Pull-based tokenizer
//! - [`parser`] - Recursive descent parser with one token of lookahead
//! - [`types`] - [`Node`] and [`Number`]
//! - [`object`] / [`array`] - Ordered containers
//! - [`write`] - `Display`-based serializer
//! - [`limits`] - Input size, nesting and trailing-input configuration
//!
//! # Example
//!
//! ```
//! use json_lite::json::{parse, stringify};
//!
//! let value = parse(r#"{"url":"/classes","ok":true,"items":[1,2.5,null]}"#).unwrap();
//! let object = value.as_object().unwrap();
//! assert_eq!(object.get("url").as_str().unwrap(), "/classes");
//!
//! assert_eq!(
//!     stringify(&value),
//!     r#"{"url":"\/classes","ok":true,"items":[1, 2.5, null]}"#
//! );
//! ```

pub mod array;
pub mod lexer;
pub mod limits;
pub mod object;
pub mod parser;
mod ser;
pub mod types;
pub mod write;

pub use array::Array;
pub use lexer::{Lexer, Token, TokenType};
pub use limits::Limits;
pub use object::Object;
pub use parser::Parser;
pub use types::{Node, Number};
pub use write::JsonValue;

use crate::error::JsonResult;

/// Parse a JSON text with the default [`Limits`].
pub fn parse(input: &str) -> JsonResult<Node> {
    parse_with_limits(input, Limits::default())
}

/// Parse a JSON text with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> JsonResult<Node> {
    tracing::trace!(len = input.len(), "parsing JSON text");
    let result = Lexer::with_limits(input, limits)
        .and_then(Parser::new)
        .and_then(|mut parser| parser.parse());
    if let Err(e) = &result {
        tracing::debug!(error = %e, code = e.code(), "rejected JSON input");
    }
    result
}

/// Serialize a [`Node`], [`Object`] or [`Array`] to JSON text.
pub fn stringify<T: JsonValue + ?Sized>(value: &T) -> String {
    value.to_string()
}

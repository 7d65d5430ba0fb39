//! Error handling for json-lite.
//!
//! Every failure the library can report is a [`JsonError`]. Variants are
//! grouped into the [`ErrorKind`] taxonomy so callers at a boundary can
//! reject an input without matching on individual variants.
//!
//! No error is recoverable for the call in progress: a lexer or parser that
//! returned an error has no partial result to offer.

use thiserror::Error;

use crate::json::lexer::TokenType;

/// Broad classification of a [`JsonError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Raised by the lexer while classifying characters.
    Lex,
    /// Raised by the parser on an unexpected token.
    Parse,
    /// A number token whose text is not a valid i32/f32.
    NumberFormat,
    /// A typed accessor was called on a node of another variant.
    Type,
    /// A configured [`Limits`](crate::json::Limits) bound was exceeded.
    Limit,
}

/// All errors produced by the lexer, parser and value model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// A character that cannot start any token (code 100).
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The offending character
        ch: char,
        /// Byte offset of the character
        position: usize,
    },

    /// Input ended before the closing quote of a string (code 101).
    #[error("unterminated string: {partial:?}")]
    UnterminatedString {
        /// Content read before the input ran out
        partial: String,
    },

    /// A bare word other than `true`, `false` or `null` (code 102).
    #[error("invalid literal: {literal}")]
    InvalidLiteral {
        /// The word as written
        literal: String,
    },

    /// The lookahead did not match the token the grammar requires (code 200).
    #[error("token mismatch: expected {expected}, found {found}")]
    TokenMismatch {
        /// Token type the grammar required
        expected: TokenType,
        /// Token type actually present
        found: TokenType,
    },

    /// A token that cannot start a value (code 201).
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        /// Token type found where a value was required
        found: TokenType,
    },

    /// Content after the top-level value when trailing input is disallowed (code 202).
    #[error("trailing input after top-level value at position {position}")]
    TrailingInput {
        /// Byte offset where the offending token starts
        position: usize,
    },

    /// Number text that fails integer or float conversion (code 300).
    #[error("invalid number: {text}")]
    InvalidNumber {
        /// The raw number token text
        text: String,
    },

    /// Typed accessor called on a node holding another variant (code 400).
    #[error("wrong type: expected {expected}, found {found}")]
    WrongType {
        /// Variant the accessor expects
        expected: &'static str,
        /// Variant the node holds
        found: &'static str,
    },

    /// Input larger than `Limits::max_input_size` (code 500).
    #[error("input too large: {size} bytes exceeds limit of {limit}")]
    InputTooLarge {
        /// Input size in bytes
        size: u64,
        /// Configured limit
        limit: u64,
    },

    /// Arrays/objects nested deeper than `Limits::max_nesting_depth` (code 501).
    #[error("nesting too deep: depth {depth} exceeds limit of {limit}")]
    NestingTooDeep {
        /// Depth reached
        depth: u64,
        /// Configured limit
        limit: u64,
    },
}

impl JsonError {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            JsonError::InvalidCharacter { .. } => 100,
            JsonError::UnterminatedString { .. } => 101,
            JsonError::InvalidLiteral { .. } => 102,
            JsonError::TokenMismatch { .. } => 200,
            JsonError::UnexpectedToken { .. } => 201,
            JsonError::TrailingInput { .. } => 202,
            JsonError::InvalidNumber { .. } => 300,
            JsonError::WrongType { .. } => 400,
            JsonError::InputTooLarge { .. } => 500,
            JsonError::NestingTooDeep { .. } => 501,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            JsonError::InvalidCharacter { .. } => "InvalidCharacter",
            JsonError::UnterminatedString { .. } => "UnterminatedString",
            JsonError::InvalidLiteral { .. } => "InvalidLiteral",
            JsonError::TokenMismatch { .. } => "TokenMismatch",
            JsonError::UnexpectedToken { .. } => "UnexpectedToken",
            JsonError::TrailingInput { .. } => "TrailingInput",
            JsonError::InvalidNumber { .. } => "InvalidNumber",
            JsonError::WrongType { .. } => "WrongType",
            JsonError::InputTooLarge { .. } => "InputTooLarge",
            JsonError::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            JsonError::InvalidCharacter { .. }
            | JsonError::UnterminatedString { .. }
            | JsonError::InvalidLiteral { .. } => ErrorKind::Lex,
            JsonError::TokenMismatch { .. }
            | JsonError::UnexpectedToken { .. }
            | JsonError::TrailingInput { .. } => ErrorKind::Parse,
            JsonError::InvalidNumber { .. } => ErrorKind::NumberFormat,
            JsonError::WrongType { .. } => ErrorKind::Type,
            JsonError::InputTooLarge { .. } | JsonError::NestingTooDeep { .. } => ErrorKind::Limit,
        }
    }
}

/// Result type for json-lite operations.
pub type JsonResult<T> = Result<T, JsonError>;

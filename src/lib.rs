//! json-lite - a self-contained JSON value library.
//!
//! Tokenizes JSON text, parses it into an owned value tree and serializes
//! the tree back to text. Nothing depends on the host's locale or number
//! formatting routines beyond Rust's own shortest-round-trip float output.
//!
//! # Architecture
//!
//! - [`json`] - Lexer, parser, value model and serializer
//! - [`error`] - Error type shared by every stage
//! - [`echo`] - The demo request/response worker used by the `json-echo` binary
//!
//! # Example
//!
//! ```
//! use json_lite::{parse, stringify, Object};
//!
//! let request = parse(r#"{"body":"World"}"#).unwrap();
//! let body = request.as_object().unwrap().get("body").as_str().unwrap();
//!
//! let response = Object::new().with("data", format!("Hello {}!", body));
//! assert_eq!(stringify(&response), r#"{"data":"Hello World!"}"#);
//! ```

// Library code reports failures through JsonError, never by panicking.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod echo;
pub mod error;
pub mod json;

// Re-export commonly used types
pub use error::{ErrorKind, JsonError, JsonResult};
pub use json::{parse, parse_with_limits, stringify, Array, Limits, Node, Number, Object};

//! Demo echo worker.
//!
//! Reads a request object with a string `body` and answers with a fixed
//! response shape:
//!
//! ```text
//! {"data":"Hello <body>!","status":200,"base64":false,"headers":{"X-Generated-By":<generated_by>},"kv":{}}
//! ```
//!
//! Any error, whether in parsing or in the request shape, turns into the
//! same shape with status 400 and the error message as `data`.

use crate::error::{JsonError, JsonResult};
use crate::json::{self, Limits, Node, Object};

/// Default value of the `X-Generated-By` response header.
pub const DEFAULT_GENERATED_BY: &str = "wasm-workers-server";

/// Build the success response for a parsed request.
pub fn respond(request: &Node, generated_by: &str) -> JsonResult<Object> {
    let body = request.as_object()?.get("body").as_str()?;
    Ok(envelope(format!("Hello {}!", body), 200, generated_by))
}

/// Build the failure response for `error`.
pub fn reject(error: &JsonError, generated_by: &str) -> Object {
    envelope(error.to_string(), 400, generated_by)
}

fn envelope(data: String, status: i32, generated_by: &str) -> Object {
    Object::new()
        .with("data", data)
        .with("status", status)
        .with("base64", false)
        .with("headers", Object::new().with("X-Generated-By", generated_by))
        .with("kv", Object::new())
}

/// Parse `input`, answer it and serialize the response. Never fails.
pub fn handle(input: &str, limits: Limits, generated_by: &str) -> String {
    let response = json::parse_with_limits(input, limits)
        .and_then(|request| respond(&request, generated_by))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "rejecting request");
            reject(&e, generated_by)
        });
    json::stringify(&response)
}

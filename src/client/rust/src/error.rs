/* src/client/rust/src/error.rs */

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("no endpoint for block kind `{0}`")]
  NoEndpoint(String),

  #[error("no access token available")]
  MissingToken,

  #[error("request to {url} failed: {source}")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("{url} returned HTTP {status}: {body}")]
  Status { url: String, status: u16, body: String },

  /// The API answered with a validation or business error; the message is
  /// the flattened `detail` of the response body.
  #[error("{0}")]
  Rejected(String),

  #[error("unexpected response from {url}: {reason}")]
  Decode { url: String, reason: String },
}

/// Flatten an error body's `detail` into display text.
///
/// A string detail is returned as-is. A list of `{ loc, msg }` items becomes one
/// `field: message` line per item, where the field is `loc[1]`, else the last
/// string in `loc`, else `field`. Anything else yields `fallback`.
pub fn format_detail(body: &Value, fallback: &str) -> String {
  match body.get("detail") {
    Some(Value::String(text)) if !text.is_empty() => text.clone(),
    Some(Value::Array(items)) if !items.is_empty() => {
      items.iter().map(detail_line).collect::<Vec<_>>().join("\n")
    }
    _ => fallback.to_string(),
  }
}

fn detail_line(item: &Value) -> String {
  let loc = item.get("loc").and_then(Value::as_array);
  let field = loc
    .and_then(|loc| loc.get(1).and_then(Value::as_str))
    .or_else(|| loc.and_then(|loc| loc.iter().rev().find_map(Value::as_str)))
    .unwrap_or("field");
  let msg = match item.get("msg") {
    Some(Value::String(msg)) => msg.clone(),
    Some(other) => other.to_string(),
    None => item.to_string(),
  };
  format!("{field}: {msg}")
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn string_detail() {
    assert_eq!(format_detail(&json!({"detail": "Slug taken"}), "x"), "Slug taken");
  }

  #[test]
  fn validation_list() {
    let body = json!({"detail": [
      {"loc": ["body", "title"], "msg": "field required"},
      {"loc": ["body"], "msg": "invalid payload"},
      {"loc": [], "msg": "broken"},
    ]});
    assert_eq!(
      format_detail(&body, "x"),
      "title: field required\nbody: invalid payload\nfield: broken"
    );
  }

  #[test]
  fn missing_detail_uses_fallback() {
    assert_eq!(format_detail(&json!({}), "Could not create record"), "Could not create record");
    assert_eq!(format_detail(&json!({"detail": []}), "none"), "none");
  }
}

/* src/engine/rust/src/envelope.rs */

//! Response envelopes: the outer wrapper a list endpoint puts around its records.
//! Decoding is total; anything unrecognized yields no records.

use serde_json::Value;

use crate::record::{RecordId, record_id};

/// Known envelope shapes, tried in priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope<'a> {
  /// `[ ... ]`
  Bare(&'a [Value]),
  /// `{ "data": [ ... ] }`
  Data(&'a [Value]),
  /// `{ "data": { "<key>": [ ... ], ... } }`, first array-valued field wins
  Nested { key: &'a str, records: &'a [Value] },
  Unrecognized,
}

impl<'a> Envelope<'a> {
  pub fn decode(body: &'a Value) -> Self {
    if let Value::Array(items) = body {
      return Self::Bare(items);
    }
    match body.get("data") {
      Some(Value::Array(items)) => Self::Data(items),
      Some(Value::Object(fields)) => fields
        .iter()
        .find_map(|(key, v)| {
          v.as_array().map(|list| Self::Nested { key: key.as_str(), records: list.as_slice() })
        })
        .unwrap_or(Self::Unrecognized),
      _ => Self::Unrecognized,
    }
  }

  pub fn records(&self) -> &'a [Value] {
    match *self {
      Self::Bare(items) | Self::Data(items) => items,
      Self::Nested { records, .. } => records,
      Self::Unrecognized => &[],
    }
  }
}

/// Extract the selectable records from a raw list-fetch body.
pub fn extract_records(body: &Value) -> Vec<Value> {
  Envelope::decode(body).records().to_vec()
}

/// Id of a freshly created record: `data.id`, then `id`, then the first
/// element of the first list nested under `data`.
pub fn extract_created_id(body: &Value) -> Option<RecordId> {
  if let Some(id) = body.get("data").and_then(record_id) {
    return Some(id);
  }
  if let Some(id) = record_id(body) {
    return Some(id);
  }
  let data = body.get("data")?.as_object()?;
  data.values().find_map(|v| v.as_array()).and_then(|list| list.first()).and_then(record_id)
}

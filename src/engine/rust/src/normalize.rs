/* src/engine/rust/src/normalize.rs */

//! Canonical records: absolute media URLs and a resolved, localized title.
//! Every function here returns a new value; inputs are never mutated, since the
//! same cached response may be read by several blocks at once.

use serde_json::{Map, Value};

use crate::record::{first_non_empty, non_empty_str, translation_matching};

/// String fields holding media paths.
const MEDIA_KEYS: [&str; 3] = ["image", "src", "img_url"];

/// Array fields whose elements are normalized recursively.
const COLLECTION_KEYS: [&str; 11] = [
  "slides",
  "items",
  "cards",
  "features",
  "steps",
  "services",
  "posts",
  "serviceItems",
  "packages",
  "comments",
  "reviews",
];

/// Candidate step lists of a process record, in lookup order.
const STEP_KEYS: [&str; 4] = ["slides", "steps", "items", "stages"];

pub const UNTITLED: &str = "Untitled";
pub const PLACEHOLDER_STEP_TITLE: &str = "Example Step";

/// Make a media path absolute against `media_base_url`.
/// Values that already carry a URI scheme (`https:`, `blob:`, `data:` ...) and
/// empty strings are returned unchanged, which makes the rewrite idempotent.
pub fn resolve_media_url(value: &str, media_base_url: &str) -> String {
  if value.is_empty() || has_uri_scheme(value) {
    return value.to_string();
  }
  let base = media_base_url.trim_end_matches('/');
  let path = value.strip_prefix('/').unwrap_or(value);
  format!("{base}/{path}")
}

fn has_uri_scheme(value: &str) -> bool {
  let Some((scheme, _)) = value.split_once(':') else {
    return false;
  };
  let mut chars = scheme.chars();
  chars.next().is_some_and(|c| c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Normalize a selected record (or a list of page items) into canonical form.
///
/// Media fields are rewritten at every level reachable through the known
/// collection keys. Title resolution only applies to a top-level object.
pub fn normalize(record: &Value, media_base_url: &str, locale: &str) -> Value {
  let mut canonical = normalize_node(record, media_base_url);
  if let Value::Object(fields) = &mut canonical {
    resolve_title(fields, record, locale);
  }
  canonical
}

fn normalize_node(value: &Value, media_base_url: &str) -> Value {
  match value {
    Value::Array(items) => {
      Value::Array(items.iter().map(|item| normalize_node(item, media_base_url)).collect())
    }
    Value::Object(fields) => {
      let mut out = Map::with_capacity(fields.len());
      for (key, v) in fields {
        let fixed = match v {
          Value::String(s) if MEDIA_KEYS.contains(&key.as_str()) => {
            Value::String(resolve_media_url(s, media_base_url))
          }
          Value::Array(items) if COLLECTION_KEYS.contains(&key.as_str()) => {
            Value::Array(items.iter().map(|item| normalize_node(item, media_base_url)).collect())
          }
          other => other.clone(),
        };
        out.insert(key.clone(), fixed);
      }
      Value::Object(out)
    }
    other => other.clone(),
  }
}

fn is_present(value: Option<&Value>) -> bool {
  match value {
    None | Some(Value::Null) | Some(Value::Bool(false)) => false,
    Some(Value::String(s)) => !s.trim().is_empty(),
    Some(_) => true,
  }
}

fn resolve_title(fields: &mut Map<String, Value>, original: &Value, locale: &str) {
  if is_present(fields.get("title")) {
    return;
  }

  if let Some(entry) = translation_matching(original, locale) {
    if let Some(title) = first_non_empty(entry, &["title", "name"]) {
      fields.insert("title".into(), Value::String(title.to_string()));
    }
    if let Some(description) = first_non_empty(entry, &["description", "content"]) {
      fields.insert("description".into(), Value::String(description.to_string()));
    }
  }

  if !is_present(fields.get("title")) {
    let fallback = non_empty_str(original, "name").unwrap_or(UNTITLED).to_string();
    fields.insert("title".into(), Value::String(fallback));
  }
}

/// Step list of a canonical process record.
///
/// The first array among `slides`, `steps`, `items`, `stages` is used. Every
/// step is normalized and carries a `features` array; an empty list becomes a
/// single placeholder step so the block never renders empty.
pub fn process_steps(canonical: &Value, media_base_url: &str) -> Vec<Value> {
  let raw = STEP_KEYS.iter().find_map(|key| canonical.get(*key).and_then(Value::as_array));

  let mut steps: Vec<Value> = raw
    .map(|list| list.iter().map(|step| with_features(normalize_node(step, media_base_url))).collect())
    .unwrap_or_default();

  if steps.is_empty() {
    steps.push(serde_json::json!({ "title": PLACEHOLDER_STEP_TITLE, "features": [] }));
  }
  steps
}

fn with_features(step: Value) -> Value {
  match step {
    Value::Object(mut fields) => {
      if !fields.get("features").is_some_and(Value::is_array) {
        fields.insert("features".into(), Value::Array(vec![]));
      }
      Value::Object(fields)
    }
    Value::String(title) => serde_json::json!({ "title": title, "features": [] }),
    _ => serde_json::json!({ "features": [] }),
  }
}

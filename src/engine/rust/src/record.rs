/* src/engine/rust/src/record.rs */

// Field access helpers over loosely-shaped remote records.

use serde_json::Value;

/// Remote record identifier. `0` is never a valid id: pickers use it for "nothing selected".
pub type RecordId = u64;

/// Numeric id of a record, accepting both `42` and `"42"`.
pub fn record_id(record: &Value) -> Option<RecordId> {
  match record.get("id")? {
    Value::Number(n) => n.as_u64(),
    Value::String(s) => s.trim().parse().ok(),
    _ => None,
  }
}

/// Id rendered for humans; `?` when the record carries none.
pub fn id_display(record: &Value) -> String {
  match record.get("id") {
    Some(Value::String(s)) if !s.is_empty() => s.clone(),
    Some(Value::Number(n)) => n.to_string(),
    _ => "?".to_string(),
  }
}

/// String field that is present and non-empty after trimming.
pub fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
  value.get(key).and_then(Value::as_str).filter(|s| !s.trim().is_empty())
}

/// First non-empty string among `keys`, in order.
pub fn first_non_empty<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
  keys.iter().find_map(|k| non_empty_str(value, k))
}

/// Locale code of a translation entry: `{ language: { code } }` or `{ language_code }`.
pub fn language_code(entry: &Value) -> Option<&str> {
  entry
    .get("language")
    .and_then(|l| l.get("code"))
    .and_then(Value::as_str)
    .or_else(|| entry.get("language_code").and_then(Value::as_str))
}

/// Pick a translation entry: the one matching `locale`, else the first.
/// Returns `None` when `translations` is missing, not an array, or empty.
pub fn translation_for<'a>(record: &'a Value, locale: Option<&str>) -> Option<&'a Value> {
  locale
    .and_then(|loc| translation_matching(record, loc))
    .or_else(|| record.get("translations")?.as_array()?.first())
}

/// The translation entry for exactly `locale`, with no fallback.
pub fn translation_matching<'a>(record: &'a Value, locale: &str) -> Option<&'a Value> {
  let entries = record.get("translations")?.as_array()?;
  entries.iter().find(|e| language_code(e) == Some(locale))
}

/// Resolve a bound id against a fetched record list.
pub fn find_record(records: &[Value], id: RecordId) -> Option<&Value> {
  records.iter().find(|r| record_id(r) == Some(id))
}

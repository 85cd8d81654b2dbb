/* src/engine/rust/src/adapt.rs */

//! Render props for a bound block.
//!
//! Each renderer expects its payload under a different key (`items`, `posts`,
//! `serviceItems` ...). This module is the single place that fans a canonical
//! record out to all of those keys, so renderers never special-case shapes.

use serde_json::{Map, Value};

use crate::kind::BlockKind;
use crate::normalize::{normalize, process_steps};

pub type PropsBag = Map<String, Value>;

/// Keys under which generic renderers look for their list payload.
const LIST_KEYS: [&str; 7] =
  ["items", "services", "posts", "serviceItems", "packages", "comments", "reviews"];

/// Shape a selected record into the props its renderer expects.
/// `None` in, or nothing after normalization, yields `None`: the caller shows a
/// "no content selected" placeholder.
pub fn adapt(
  record: Option<&Value>,
  kind: BlockKind,
  locale: &str,
  media_base_url: &str,
) -> Option<PropsBag> {
  let record = record?;
  let media_base_url = media_base_url.trim_end_matches('/');
  let canonical = normalize(record, media_base_url, locale);
  if canonical.is_null() {
    return None;
  }

  let mut props = PropsBag::new();

  if kind == BlockKind::Process {
    let steps = Value::Array(process_steps(&canonical, media_base_url));
    let mut data = canonical;
    if let Value::Object(fields) = &mut data {
      fields.insert("items".into(), steps.clone());
    }
    props.insert("slides".into(), steps.clone());
    props.insert("items".into(), steps);
    props.insert("data".into(), data);
    props.insert("locale".into(), Value::String(locale.to_string()));
    props.insert("mediaBaseUrl".into(), Value::String(media_base_url.to_string()));
    return Some(props);
  }

  let as_list = match &canonical {
    Value::Array(_) => canonical.clone(),
    other => Value::Array(vec![other.clone()]),
  };

  props.insert("data".into(), canonical.clone());
  for key in LIST_KEYS {
    props.insert(key.into(), as_list.clone());
  }
  props.insert("locale".into(), Value::String(locale.to_string()));
  props.insert("mediaBaseUrl".into(), Value::String(media_base_url.to_string()));

  // Record fields spread last: they win over the generic keys above
  if let Value::Object(fields) = canonical {
    props.extend(fields);
  }
  Some(props)
}

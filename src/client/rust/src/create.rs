/* src/client/rust/src/create.rs */

use blockpage_engine::BlockKind;
use serde_json::{Value, json};

/// Body for creating a bare record of `kind` with only a title.
/// Translated kinds also get a single translation entry in `locale`.
pub fn quick_create_payload(kind: BlockKind, title: &str, locale: &str) -> Value {
  if kind.is_translated() {
    json!({
      "title": title,
      "name": title,
      "translations": [{ "language_code": locale, "title": title, "name": title }],
    })
  } else {
    json!({ "title": title })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn translated_body() {
    let body = quick_create_payload(BlockKind::Hero, "Welcome", "tr");
    assert_eq!(body["name"], "Welcome");
    assert_eq!(body["translations"][0]["language_code"], "tr");
    assert_eq!(body["translations"][0]["title"], "Welcome");
  }

  #[test]
  fn plain_body() {
    assert_eq!(quick_create_payload(BlockKind::Slider, "Gallery", "en"), json!({"title": "Gallery"}));
  }
}

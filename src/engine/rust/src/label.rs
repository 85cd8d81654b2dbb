/* src/engine/rust/src/label.rs */

use serde_json::Value;

use crate::record::{first_non_empty, id_display, non_empty_str, translation_for};

const TITLE_KEYS: [&str; 3] = ["title", "name", "question"];

/// Display label for a record of unknown shape. Total: always non-empty.
///
/// Resolution order, first match wins:
/// 1. person records (`full_name`) -> `"<full_name> (<email or role>)"`
/// 2. translated records -> title of the `locale` entry (else the first entry),
///    suffixed with the record's `type` or its id
/// 3. direct `title` / `name` / `question`
/// 4. `"Record #<id>"`
pub fn label(record: &Value, locale: Option<&str>) -> String {
  if let Some(name) = non_empty_str(record, "full_name") {
    return match first_non_empty(record, &["email", "role"]) {
      Some(contact) => format!("{name} ({contact})"),
      None => name.to_string(),
    };
  }

  if let Some(title) = translation_for(record, locale).and_then(|t| first_non_empty(t, &TITLE_KEYS))
  {
    let suffix = match non_empty_str(record, "type") {
      Some(kind) => kind.to_string(),
      None => id_display(record),
    };
    return format!("{title} ({suffix})");
  }

  if let Some(title) = first_non_empty(record, &TITLE_KEYS) {
    return title.to_string();
  }

  format!("Record #{}", id_display(record))
}

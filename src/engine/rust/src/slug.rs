/* src/engine/rust/src/slug.rs */

use std::time::{SystemTime, UNIX_EPOCH};

fn transliterate(c: char) -> char {
  match c {
    'ğ' | 'Ğ' => 'g',
    'ü' | 'Ü' | 'û' | 'Û' => 'u',
    'ş' | 'Ş' => 's',
    'ı' | 'İ' | 'î' | 'Î' => 'i',
    'ö' | 'Ö' => 'o',
    'ç' | 'Ç' => 'c',
    'â' | 'Â' => 'a',
    other => other,
  }
}

/// URL slug from free text: lowercase, diacritics folded to ASCII, anything
/// outside `[a-z0-9\s-]` dropped, whitespace runs collapsed to `-`.
/// May return an empty string.
pub fn slugify(text: &str) -> String {
  let kept: String = text
    .chars()
    .map(transliterate)
    .flat_map(char::to_lowercase)
    .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
    .collect();
  kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Slug for a page: derived from `title`, or `page-<unix millis>` when the
/// title yields nothing.
pub fn generate_slug(title: Option<&str>) -> String {
  let derived = title.map(slugify).unwrap_or_default();
  if derived.is_empty() { timestamp_slug() } else { derived }
}

fn timestamp_slug() -> String {
  let millis = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis()).unwrap_or(0);
  format!("page-{millis}")
}

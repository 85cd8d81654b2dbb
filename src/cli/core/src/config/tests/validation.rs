/* src/cli/core/src/config/tests/validation.rs */

use super::*;

fn config(base_url: &str, locale: &str) -> BlockpageConfig {
  let toml_str = format!(
    r#"
[project]
name = "site"

[api]
base_url = "{base_url}"

[editor]
locale = "{locale}"
"#
  );
  toml::from_str(&toml_str).unwrap()
}

#[test]
fn accepts_http_and_https() {
  assert!(config("http://localhost:8000", "tr").validate().is_ok());
  assert!(config("https://api.example.com", "en").validate().is_ok());
}

#[test]
fn rejects_schemeless_base_url() {
  let err = config("api.example.com", "tr").validate().unwrap_err();
  assert!(err.to_string().contains("api.base_url"));
}

#[test]
fn rejects_empty_locale() {
  let err = config("https://api.example.com", " ").validate().unwrap_err();
  assert!(err.to_string().contains("editor.locale"));
}

#[test]
fn rejects_bad_media_base_url() {
  let mut cfg = config("https://api.example.com", "tr");
  cfg.api.media_base_url = Some("cdn.example.com".into());
  assert!(cfg.validate().is_err());
}

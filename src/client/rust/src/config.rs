/* src/client/rust/src/config.rs */

use std::sync::Arc;

/// Supplies the bearer token at request time. Returning `None` makes every
/// authenticated call fail with [`crate::ApiError::MissingToken`].
pub type TokenFn = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Fixed token, e.g. read once from a session file or the environment.
pub fn static_token(token: Option<String>) -> TokenFn {
  Arc::new(move || token.clone())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
  base_url: String,
  media_base_url: String,
}

impl ApiConfig {
  /// Media URLs default to the API base.
  pub fn new(base_url: &str) -> Self {
    let base_url = base_url.trim_end_matches('/').to_string();
    Self { media_base_url: base_url.clone(), base_url }
  }

  pub fn with_media_base_url(mut self, media_base_url: &str) -> Self {
    self.media_base_url = media_base_url.trim_end_matches('/').to_string();
    self
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub fn media_base_url(&self) -> &str {
    &self.media_base_url
  }

  pub fn url(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path.trim_start_matches('/'))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn joins_paths() {
    let cfg = ApiConfig::new("https://api.example.com/");
    assert_eq!(cfg.url("/v1/admin/heroes"), "https://api.example.com/v1/admin/heroes");
    assert_eq!(cfg.media_base_url(), "https://api.example.com");
    let cfg = cfg.with_media_base_url("https://cdn.example.com/");
    assert_eq!(cfg.media_base_url(), "https://cdn.example.com");
  }

  #[test]
  fn static_token_is_reused() {
    let token = static_token(Some("abc".into()));
    assert_eq!(token(), Some("abc".into()));
    assert_eq!(token(), Some("abc".into()));
    assert_eq!(static_token(None)(), None);
  }
}

/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use blockpage_client::ApiConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct BlockpageConfig {
  pub project: ProjectConfig,
  pub api: ApiSection,
  #[serde(default)]
  pub editor: EditorSection,
  #[serde(default)]
  pub session: SessionSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
  pub base_url: String,
  pub media_base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorSection {
  #[serde(default = "default_locale")]
  pub locale: String,
  #[serde(default = "default_language_id")]
  pub language_id: u64,
}

impl Default for EditorSection {
  fn default() -> Self {
    Self { locale: default_locale(), language_id: default_language_id() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSection {
  #[serde(default = "default_session_path")]
  pub path: String,
}

impl Default for SessionSection {
  fn default() -> Self {
    Self { path: default_session_path() }
  }
}

fn default_locale() -> String {
  "tr".to_string()
}

fn default_language_id() -> u64 {
  1
}

fn default_session_path() -> String {
  ".blockpage/session.json".to_string()
}

impl BlockpageConfig {
  pub fn validate(&self) -> Result<()> {
    let base = &self.api.base_url;
    if !(base.starts_with("http://") || base.starts_with("https://")) {
      bail!("api.base_url must start with http:// or https:// (got \"{base}\")");
    }
    if let Some(media) = &self.api.media_base_url
      && !(media.starts_with("http://") || media.starts_with("https://"))
    {
      bail!("api.media_base_url must start with http:// or https:// (got \"{media}\")");
    }
    if self.editor.locale.trim().is_empty() {
      bail!("editor.locale must not be empty");
    }
    if self.editor.language_id == 0 {
      bail!("editor.language_id must be a positive id");
    }
    Ok(())
  }

  pub fn api_config(&self) -> ApiConfig {
    let config = ApiConfig::new(&self.api.base_url);
    match &self.api.media_base_url {
      Some(media) => config.with_media_base_url(media),
      None => config,
    }
  }

  /// Session file location; relative paths resolve against the config directory.
  pub fn session_path(&self, base_dir: &Path) -> PathBuf {
    let path = Path::new(&self.session.path);
    if path.is_absolute() { path.to_path_buf() } else { base_dir.join(path) }
  }
}

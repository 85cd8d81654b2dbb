/* src/cli/core/src/context.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use blockpage_client::{ApiError, ContentClient, static_token};

use crate::config::{BlockpageConfig, CONFIG_FILE, find_config, load_config};
use crate::session::{TOKEN_ENV, resolve_token};

/// Loaded project: config plus the directory it was found in.
pub struct Project {
  pub base_dir: PathBuf,
  pub config: BlockpageConfig,
}

impl Project {
  /// Resolve config path (explicit or auto-detected) and parse it
  pub fn load(explicit: Option<PathBuf>) -> Result<Self> {
    let path = match explicit {
      Some(p) => p,
      None => {
        let cwd = std::env::current_dir().context("failed to get cwd")?;
        find_config(&cwd)
          .with_context(|| format!("run inside a project with {CONFIG_FILE} or pass --config"))?
      }
    };
    let config = load_config(&path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
    Ok(Self { base_dir, config })
  }

  /// Like `load`, but `Ok(None)` when no config is passed and none is found
  /// upward from `start`. A config that exists but does not parse is an error.
  pub fn load_optional(explicit: Option<PathBuf>, start: &Path) -> Result<Option<Self>> {
    if explicit.is_some() {
      return Self::load(explicit).map(Some);
    }
    match find_config(start) {
      Ok(path) => Self::load(Some(path)).map(Some),
      Err(_) => Ok(None),
    }
  }

  pub fn session_path(&self) -> PathBuf {
    self.config.session_path(&self.base_dir)
  }

  pub fn locale(&self) -> &str {
    &self.config.editor.locale
  }

  /// API client carrying the stored (or environment) token.
  pub fn client(&self) -> Result<ContentClient> {
    let token = resolve_token(&self.session_path())?;
    Ok(ContentClient::new(self.config.api_config(), static_token(token)))
  }
}

/// Turn a client error into a user-facing one, with a hint for missing logins.
pub fn api_error(err: ApiError) -> anyhow::Error {
  match err {
    ApiError::MissingToken => {
      anyhow!("not logged in: run `blockpage login` or set {TOKEN_ENV}")
    }
    other => anyhow::Error::new(other),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const VALID: &str = r#"
[project]
name = "clinic"

[api]
base_url = "https://api.example.com"

[editor]
language_id = 4
"#;

  #[test]
  fn optional_without_config_is_none() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(Project::load_optional(None, tmp.path()).unwrap().is_none());
  }

  #[test]
  fn optional_finds_config_upward() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(CONFIG_FILE), VALID).unwrap();
    let nested = tmp.path().join("drafts");
    std::fs::create_dir(&nested).unwrap();

    let project = Project::load_optional(None, &nested).unwrap().unwrap();
    assert_eq!(project.config.editor.language_id, 4);
    assert_eq!(project.base_dir, tmp.path().canonicalize().unwrap());
  }

  #[test]
  fn optional_reports_broken_config() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(CONFIG_FILE), "[project]\nname = \"x\"\n").unwrap();
    let err = Project::load_optional(None, tmp.path()).err().unwrap();
    assert!(format!("{err:#}").contains("failed to parse"), "{err:#}");
  }

  #[test]
  fn optional_explicit_path_must_exist() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(Project::load_optional(Some(tmp.path().join("missing.toml")), tmp.path()).is_err());
  }

  #[test]
  fn missing_login_hint() {
    let err = api_error(ApiError::MissingToken);
    assert!(err.to_string().contains("blockpage login"));
    assert!(err.to_string().contains(TOKEN_ENV));
  }
}

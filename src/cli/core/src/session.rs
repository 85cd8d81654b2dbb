/* src/cli/core/src/session.rs */

use std::path::Path;

use anyhow::{Context, Result};
use blockpage_client::UserProfile;
use serde::{Deserialize, Serialize};

pub const TOKEN_ENV: &str = "BLOCKPAGE_TOKEN";

/// Persisted login: bearer token plus the profile returned with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub access_token: String,
  #[serde(default)]
  pub user: Option<UserProfile>,
}

impl Session {
  /// `Ok(None)` when no session file exists.
  pub fn load(path: &Path) -> Result<Option<Self>> {
    if !path.is_file() {
      return Ok(None);
    }
    let content =
      std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let session =
      serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Some(session))
  }

  pub fn save(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(self)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
  }

  /// Remove the session file. Returns false when there was none.
  pub fn clear(path: &Path) -> Result<bool> {
    if !path.is_file() {
      return Ok(false);
    }
    std::fs::remove_file(path).with_context(|| format!("failed to remove {}", path.display()))?;
    Ok(true)
  }

  pub fn display_name(&self) -> Option<&str> {
    let user = self.user.as_ref()?;
    [user.full_name.as_str(), user.email.as_str()].into_iter().find(|s| !s.is_empty())
  }
}

/// Environment token wins over the stored session; empty values count as unset.
pub fn pick_token(env: Option<String>, session: Option<&Session>) -> Option<String> {
  env
    .filter(|t| !t.trim().is_empty())
    .or_else(|| session.map(|s| s.access_token.clone()).filter(|t| !t.is_empty()))
}

pub fn resolve_token(path: &Path) -> Result<Option<String>> {
  let session = Session::load(path)?;
  Ok(pick_token(std::env::var(TOKEN_ENV).ok(), session.as_ref()))
}

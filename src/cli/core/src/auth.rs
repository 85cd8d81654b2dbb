/* src/cli/core/src/auth.rs */

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use blockpage_client::{ContentClient, LoginOutcome, LoginRequest, static_token};

use crate::context::{Project, api_error};
use crate::session::Session;
use crate::ui;

fn prompt(label: &str) -> Result<String> {
  print!("  {label}: ");
  std::io::stdout().flush().context("failed to flush stdout")?;
  let mut line = String::new();
  std::io::stdin().lock().read_line(&mut line).context("failed to read from stdin")?;
  Ok(line.trim().to_string())
}

/// Email + password login, with a one-time code round when the API asks for it.
pub async fn login(project: &Project, email: String, password: Option<String>) -> Result<()> {
  let password = match password {
    Some(p) => p,
    None => prompt("password")?,
  };
  let client = ContentClient::new(project.config.api_config(), static_token(None));
  ui::arrow(&format!("signing in as {email}"));

  let request = LoginRequest::new(email, password);
  let outcome = client.login(&request).await.map_err(api_error)?;
  let outcome = match outcome {
    LoginOutcome::OtpRequired { challenge_id, destination } => {
      let target = destination.as_deref().unwrap_or("your email address");
      ui::detail(&format!("a verification code was sent to {target}"));
      let code = prompt("code")?;
      client.login(&request.with_otp(code, challenge_id)).await.map_err(api_error)?
    }
    authenticated @ LoginOutcome::Authenticated { .. } => authenticated,
  };

  let LoginOutcome::Authenticated { access_token, user } = outcome else {
    anyhow::bail!("login did not complete: the API asked for another verification code");
  };
  let session = Session { access_token, user };
  let path = project.session_path();
  session.save(&path)?;
  match session.display_name() {
    Some(name) => ui::ok(&format!("logged in as {name}")),
    None => ui::ok("logged in"),
  }
  ui::detail(&format!("session saved to {}", path.display()));
  Ok(())
}

pub fn logout(project: &Project) -> Result<()> {
  let path = project.session_path();
  if Session::clear(&path)? {
    ui::ok("logged out");
  } else {
    ui::warn("no active session");
  }
  Ok(())
}

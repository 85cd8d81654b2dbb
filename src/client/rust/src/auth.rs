/* src/client/rust/src/auth.rs */

//! Login exchange. The first request carries email + password; when the API
//! asks for a one-time code the same request is repeated with the code and the
//! challenge id it handed out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginRequest {
  pub email: String,
  pub password: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub otp_code: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub otp_challenge_id: Option<String>,
}

impl LoginRequest {
  pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
    Self { email: email.into(), password: password.into(), ..Self::default() }
  }

  /// Second step of an OTP login.
  pub fn with_otp(mut self, code: impl Into<String>, challenge_id: impl Into<String>) -> Self {
    self.otp_code = Some(code.into());
    self.otp_challenge_id = Some(challenge_id.into());
    self
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
  pub id: u64,
  pub email: String,
  pub full_name: String,
  pub role: String,
}

/// Raw login response; every field but `status` depends on the status.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
  pub status: String,
  pub challenge_id: Option<String>,
  pub destination: Option<String>,
  pub message: Option<String>,
  pub access_token: Option<String>,
  pub user: Option<UserProfile>,
  pub detail: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
  OtpRequired { challenge_id: String, destination: Option<String> },
  Authenticated { access_token: String, user: Option<UserProfile> },
}

impl LoginResponse {
  /// `None` when the response is neither a usable OTP challenge nor a token.
  pub fn outcome(self) -> Option<LoginOutcome> {
    match self.status.as_str() {
      "otp_required" => self
        .challenge_id
        .filter(|id| !id.is_empty())
        .map(|challenge_id| LoginOutcome::OtpRequired { challenge_id, destination: self.destination }),
      "authenticated" => self
        .access_token
        .filter(|token| !token.is_empty())
        .map(|access_token| LoginOutcome::Authenticated { access_token, user: self.user }),
      _ => None,
    }
  }
}

/* src/client/rust/src/client.rs */

use std::collections::HashMap;
use std::sync::Arc;

use blockpage_engine::record::record_id;
use blockpage_engine::{
  BlockKind, PAGES_PATH, PageDocument, RecordId, extract_created_id,
  extract_records, find_record, label, resolve_name,
};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::auth::{LoginOutcome, LoginRequest, LoginResponse};
use crate::config::{ApiConfig, TokenFn};
use crate::create::quick_create_payload;
use crate::error::{ApiError, format_detail};

pub const LOGIN_PATH: &str = "/v1/auth/login";

const CREATE_FAILED: &str = "Could not create record";
const SAVE_FAILED: &str = "Could not save page";
const LOGIN_FAILED: &str = "Login failed. Check your credentials.";

/// One selectable entry of a block picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOption {
  pub id: RecordId,
  pub label: String,
}

/// Content API client. List bodies are cached per endpoint path until a
/// create on that path invalidates them.
pub struct ContentClient {
  http: reqwest::Client,
  config: ApiConfig,
  token: TokenFn,
  cache: RwLock<HashMap<String, Arc<Value>>>,
}

impl ContentClient {
  pub fn new(config: ApiConfig, token: TokenFn) -> Self {
    Self { http: reqwest::Client::new(), config, token, cache: RwLock::new(HashMap::new()) }
  }

  pub fn config(&self) -> &ApiConfig {
    &self.config
  }

  fn bearer(&self) -> Result<String, ApiError> {
    (self.token)().filter(|t| !t.is_empty()).ok_or(ApiError::MissingToken)
  }

  fn request(&self, method: Method, path: &str) -> (String, RequestBuilder) {
    let url = self.config.url(path);
    debug!(%method, path, "content api request");
    let builder = self.http.request(method, &url);
    (url, builder)
  }

  async fn send(url: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
    builder.send().await.map_err(|source| ApiError::Transport { url: url.to_string(), source })
  }

  async fn read_body(url: &str, resp: Response) -> Result<(u16, String), ApiError> {
    let status = resp.status().as_u16();
    let text =
      resp.text().await.map_err(|source| ApiError::Transport { url: url.to_string(), source })?;
    Ok((status, text))
  }

  fn decode(url: &str, text: &str) -> Result<Value, ApiError> {
    serde_json::from_str(text)
      .map_err(|e| ApiError::Decode { url: url.to_string(), reason: e.to_string() })
  }

  // --- Fetching ---

  /// Raw body of an authenticated GET, served from the cache when present.
  pub async fn fetch_raw(&self, path: &str) -> Result<Arc<Value>, ApiError> {
    if let Some(body) = self.cache.read().await.get(path) {
      debug!(path, "content api cache hit");
      return Ok(Arc::clone(body));
    }

    let token = self.bearer()?;
    let (url, builder) = self.request(Method::GET, path);
    let resp = Self::send(&url, builder.bearer_auth(token)).await?;
    let (status, text) = Self::read_body(&url, resp).await?;
    if !(200..300).contains(&status) {
      warn!(status, path, "content api fetch failed");
      return Err(ApiError::Status { url, status, body: text });
    }

    let body = Arc::new(Self::decode(&url, &text)?);
    self.cache.write().await.insert(path.to_string(), Arc::clone(&body));
    Ok(body)
  }

  pub async fn invalidate(&self, path: &str) {
    self.cache.write().await.remove(path);
  }

  async fn list(&self, path: &str) -> Result<Vec<Value>, ApiError> {
    let body = self.fetch_raw(path).await?;
    Ok(extract_records(&body))
  }

  /// Records selectable for a block kind.
  pub async fn records(&self, kind: BlockKind) -> Result<Vec<Value>, ApiError> {
    let path = blockpage_engine::resolve(kind).ok_or_else(|| ApiError::NoEndpoint(kind.to_string()))?;
    self.list(path).await
  }

  /// Picker entries for a block kind. Records without a usable id are skipped.
  pub async fn options(
    &self,
    kind: BlockKind,
    locale: Option<&str>,
  ) -> Result<Vec<RecordOption>, ApiError> {
    let records = self.records(kind).await?;
    Ok(
      records
        .iter()
        .filter_map(|r| record_id(r).map(|id| RecordOption { id, label: label(r, locale) }))
        .collect(),
    )
  }

  /// Live record bound to `id`, or `None` when it no longer exists remotely.
  pub async fn resolve_selection(
    &self,
    kind: BlockKind,
    id: RecordId,
  ) -> Result<Option<Value>, ApiError> {
    let records = self.records(kind).await?;
    Ok(find_record(&records, id).cloned())
  }

  /// Records of a collection named by block kind or system name
  /// (`languages`, `pages`).
  pub async fn collection(&self, name: &str) -> Result<Vec<Value>, ApiError> {
    let path = resolve_name(name).ok_or_else(|| ApiError::NoEndpoint(name.to_string()))?;
    self.list(path).await
  }

  // --- Mutations ---

  async fn post_json<T: Serialize + ?Sized>(
    &self,
    path: &str,
    body: &T,
    fallback: &str,
  ) -> Result<Value, ApiError> {
    let token = self.bearer()?;
    let (url, builder) = self.request(Method::POST, path);
    let resp = Self::send(&url, builder.bearer_auth(token).json(body)).await?;
    let (status, text) = Self::read_body(&url, resp).await?;
    if !(200..300).contains(&status) {
      warn!(status, path, "content api rejected request");
      return match serde_json::from_str::<Value>(&text) {
        Ok(body) => Err(ApiError::Rejected(format_detail(&body, fallback))),
        Err(_) => Err(ApiError::Status { url, status, body: text }),
      };
    }
    Self::decode(&url, &text)
  }

  /// Create a bare record with just a title and return its id.
  pub async fn create_entry(
    &self,
    kind: BlockKind,
    title: &str,
    locale: &str,
  ) -> Result<RecordId, ApiError> {
    let path = blockpage_engine::resolve(kind).ok_or_else(|| ApiError::NoEndpoint(kind.to_string()))?;
    let payload = quick_create_payload(kind, title, locale);
    let body = self.post_json(path, &payload, CREATE_FAILED).await?;
    self.invalidate(path).await;
    extract_created_id(&body).ok_or_else(|| ApiError::Decode {
      url: self.config.url(path),
      reason: "created record carries no id".to_string(),
    })
  }

  /// Submit a page document; returns the API's response body.
  pub async fn submit_page(&self, doc: &PageDocument) -> Result<Value, ApiError> {
    let body = self.post_json(PAGES_PATH, doc, SAVE_FAILED).await?;
    self.invalidate(PAGES_PATH).await;
    Ok(body)
  }

  // --- Auth ---

  /// One login step. The body is read whatever the HTTP status; a response
  /// that is neither an OTP challenge nor a token becomes `Rejected`.
  pub async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, ApiError> {
    let (url, builder) = self.request(Method::POST, LOGIN_PATH);
    let resp = Self::send(&url, builder.json(request)).await?;
    let (status, text) = Self::read_body(&url, resp).await?;
    let Ok(parsed) = serde_json::from_str::<LoginResponse>(&text) else {
      if (200..300).contains(&status) {
        return Err(ApiError::Decode { url, reason: "login response is not JSON".to_string() });
      }
      return Err(ApiError::Status { url, status, body: text });
    };

    let detail = parsed.detail.clone();
    let message = parsed.message.clone();
    match parsed.outcome() {
      Some(outcome) => Ok(outcome),
      None => {
        let reason = match detail {
          Some(detail) => format_detail(&serde_json::json!({ "detail": detail }), LOGIN_FAILED),
          None => message.unwrap_or_else(|| LOGIN_FAILED.to_string()),
        };
        warn!(status, "login rejected");
        Err(ApiError::Rejected(reason))
      }
    }
  }
}

/* src/cli/core/src/testing.rs */

//! Shared fixtures for command tests: a project in a temp dir and a mock
//! content API.

use std::net::SocketAddr;
use std::path::Path;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::context::Project;
use crate::session::Session;

pub const TOKEN: &str = "secret";

/// Project rooted at `base_dir` talking to `base_url`, logged in with `TOKEN`.
pub fn project_at(base_dir: &Path, base_url: &str) -> Project {
  let config = format!("[project]\nname = \"clinic\"\n\n[api]\nbase_url = \"{base_url}\"\n");
  let config = toml::from_str(&config).expect("test config should parse");
  let project = Project { base_dir: base_dir.to_path_buf(), config };
  Session { access_token: TOKEN.into(), user: None }
    .save(&project.session_path())
    .expect("session should save");
  project
}

fn authorized(headers: &HeaderMap) -> bool {
  headers.get("authorization").is_some_and(|v| v.as_bytes().starts_with(b"Bearer "))
}

async fn heroes(headers: HeaderMap) -> (StatusCode, Json<Value>) {
  if !authorized(&headers) {
    return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"})));
  }
  let body = json!({"data": [
    {"id": 42, "title": "Welcome", "image": "/uploads/hero.jpg"},
    {"id": 43, "title": "Second"}
  ]});
  (StatusCode::OK, Json(body))
}

async fn create_hero(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
  (StatusCode::CREATED, Json(json!({"data": {"id": 77, "title": body["title"]}})))
}

async fn cards() -> (StatusCode, &'static str) {
  (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn languages() -> Json<Value> {
  Json(json!([{"id": 1, "name": "Türkçe"}, {"id": 2, "name": "English"}]))
}

/// Mock API: heroes list and create, a failing cards endpoint, languages.
pub async fn spawn_api() -> SocketAddr {
  let app = Router::new()
    .route("/v1/admin/heroes", get(heroes).post(create_hero))
    .route("/v1/admin/cards", get(cards))
    .route("/v1/admin/languages", get(languages));
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("listener should bind");
  let addr = listener.local_addr().expect("listener should have addr");
  tokio::spawn(async move {
    axum::serve(listener, app).await.expect("server should run");
  });
  addr
}

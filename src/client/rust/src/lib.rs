/* src/client/rust/src/lib.rs */

pub mod auth;
pub mod client;
pub mod config;
pub mod create;
pub mod error;

pub use auth::{LoginOutcome, LoginRequest, LoginResponse, UserProfile};
pub use client::{ContentClient, LOGIN_PATH, RecordOption};
pub use config::{ApiConfig, TokenFn, static_token};
pub use create::quick_create_payload;
pub use error::{ApiError, format_detail};

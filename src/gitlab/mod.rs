//! Gitlab side (read-only)
pub mod client;
pub mod config;
pub mod project;

/// Default API path on a gitlab server
pub const GITLAB_DEFAULT_API_PATH: &str = "/api/v4";

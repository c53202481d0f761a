//! Gitlab configuration
use super::client::GitlabClient;
use super::GITLAB_DEFAULT_API_PATH;
use crate::errors::Gitlab2GogsError;
use crate::{config::Config, config_password_wrap, config_value_wrap};
use serde::{Deserialize, Serialize};

/// Gitlab configuration
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct GitlabConfig {
    /// Gitlab base URL
    pub host: Option<String>,

    /// API path on the gitlab server (defaults to /api/v4)
    pub api_path: Option<String>,

    /// Gitlab username
    pub username: Option<String>,

    /// Gitlab password
    pub password: Option<String>,

    /// Gitlab personal access token
    pub token: Option<String>,
}

impl GitlabConfig {
    /// Get a gitlab client, prompting for missing values
    /// # Errors
    /// Error if a missing value can't be read from the user
    pub fn get_client(config: &mut Config) -> Result<GitlabClient, Gitlab2GogsError> {
        let host = config_value_wrap!(
            config,
            gitlab,
            GitlabConfig,
            host,
            "the gitlab base URL (e.g. https://gitlab.example.com)"
        );
        let api_path = match &config.config_data.gitlab {
            Some(GitlabConfig {
                api_path: Some(path),
                ..
            }) => path.clone(),
            _ => GITLAB_DEFAULT_API_PATH.to_string(),
        };
        let username = config_value_wrap!(
            config,
            gitlab,
            GitlabConfig,
            username,
            "your gitlab username (used by gogs to clone the repositories)"
        );
        let password = config_password_wrap!(
            config,
            gitlab,
            GitlabConfig,
            password,
            "your gitlab password (used by gogs to clone the repositories)"
        );
        let token = config_password_wrap!(
            config,
            gitlab,
            GitlabConfig,
            token,
            "your gitlab token (https://gitlab.example.com/-/user_settings/personal_access_tokens)"
        );
        Ok(GitlabClient::new(host, api_path, username, password, token))
    }
}

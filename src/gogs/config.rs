//! Gogs configuration
use super::client::GogsClient;
use crate::errors::Gitlab2GogsError;
use crate::{config::Config, config_password_wrap, config_value_wrap};
use serde::{Deserialize, Serialize};

/// Gogs configuration
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct GogsConfig {
    /// Gogs base URL
    pub url: Option<String>,

    /// Gogs access token
    pub token: Option<String>,

    /// Gogs admin user owning the created organizations
    pub admin_user: Option<String>,
}

impl GogsConfig {
    /// Get a gogs client and the admin user, prompting for missing values
    /// # Errors
    /// Error if a missing value can't be read from the user
    pub fn get_client(config: &mut Config) -> Result<(GogsClient, String), Gitlab2GogsError> {
        let url = config_value_wrap!(
            config,
            gogs,
            GogsConfig,
            url,
            "the gogs base URL (e.g. https://gogs.example.com)"
        );
        let token = config_password_wrap!(
            config,
            gogs,
            GogsConfig,
            token,
            "your gogs token (https://gogs.example.com/user/settings/applications)"
        );
        let admin_user = config_value_wrap!(
            config,
            gogs,
            GogsConfig,
            admin_user,
            "the gogs admin user that will own the created organizations"
        );
        Ok((GogsClient::new(url, token), admin_user))
    }
}

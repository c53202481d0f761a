//! Gogs API client
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use urlencoding::encode;

use super::org::{CreateOrgOption, GogsOrg};
use super::repo::{GogsRepo, MigrateRepoOption};
use crate::errors::{Gitlab2GogsError, Gitlab2GogsErrorKind, RemoteType};

/// Gogs API client
#[derive(Default, Debug, Clone)]
pub struct GogsClient {
    /// Gogs base URL, without trailing slash
    base_url: String,

    /// Gogs access token
    token: String,

    /// Reqwest client
    client: reqwest::Client,
}

impl GogsClient {
    /// Create a new gogs client
    pub fn new(url: String, token: String) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    /// The gogs base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up an organization by name
    ///
    /// A missing organization is a normal outcome and returns `Ok(None)`.
    /// # Errors
    /// Error on any response that is neither success nor 404
    pub async fn get_org(&self, name: &str) -> Result<Option<GogsOrg>, Gitlab2GogsError> {
        let url = format!("{}/api/v1/orgs/{}", self.base_url, encode(name));
        let request = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, "application/json")
            .send();

        let response = request.await?;
        log::debug!("GET {}: {}", url, response.status());
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let text = response.text().await?;
            return Err(Gitlab2GogsError::new(Gitlab2GogsErrorKind::GetOrg)
                .with_remote(RemoteType::Gogs)
                .with_text(&text));
        }
        let org: GogsOrg = response.json().await?;
        Ok(Some(org))
    }

    /// Create an organization owned by the given admin user
    /// # Errors
    /// Error on any non-success API response
    pub async fn admin_create_org(
        &self,
        admin_user: &str,
        opts: &CreateOrgOption,
    ) -> Result<GogsOrg, Gitlab2GogsError> {
        let url = format!(
            "{}/api/v1/admin/users/{}/orgs",
            self.base_url,
            encode(admin_user)
        );
        let request = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(opts)
            .send();

        let response = request.await?;
        log::debug!("POST {}: {}", url, response.status());
        if !response.status().is_success() {
            let text = response.text().await?;
            return Err(Gitlab2GogsError::new(Gitlab2GogsErrorKind::OrgCreation)
                .with_remote(RemoteType::Gogs)
                .with_text(&text));
        }
        let org: GogsOrg = response.json().await?;
        Ok(org)
    }

    /// Look up a repository by owner and name
    ///
    /// A missing repository is a normal outcome and returns `Ok(None)`.
    /// # Errors
    /// Error on any response that is neither success nor 404
    pub async fn get_repo(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Option<GogsRepo>, Gitlab2GogsError> {
        let url = format!(
            "{}/api/v1/repos/{}/{}",
            self.base_url,
            encode(owner),
            encode(name)
        );
        let request = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, "application/json")
            .send();

        let response = request.await?;
        log::debug!("GET {}: {}", url, response.status());
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let text = response.text().await?;
            return Err(Gitlab2GogsError::new(Gitlab2GogsErrorKind::GetRepo)
                .with_remote(RemoteType::Gogs)
                .with_text(&text));
        }
        let repo: GogsRepo = response.json().await?;
        Ok(Some(repo))
    }

    /// Ask the gogs server to migrate a repository from its clone URL
    /// # Errors
    /// Error on any non-success API response
    pub async fn migrate_repo(
        &self,
        opts: &MigrateRepoOption,
    ) -> Result<GogsRepo, Gitlab2GogsError> {
        let url = format!("{}/api/v1/repos/migrate", self.base_url);
        let request = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(opts)
            .send();

        let response = request.await?;
        log::debug!("POST {}: {}", url, response.status());
        if !response.status().is_success() {
            let text = response.text().await?;
            return Err(Gitlab2GogsError::new(Gitlab2GogsErrorKind::Migration)
                .with_remote(RemoteType::Gogs)
                .with_text(&text));
        }
        let repo: GogsRepo = response.json().await?;
        Ok(repo)
    }
}

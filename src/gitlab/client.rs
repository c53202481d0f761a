//! Gitlab API client
use reqwest::header::ACCEPT;

use super::project::GitlabProject;
use crate::errors::{Gitlab2GogsError, Gitlab2GogsErrorKind, RemoteType};

/// Gitlab API client (read-only)
#[derive(Default, Debug, Clone)]
pub struct GitlabClient {
    /// Gitlab base URL, without trailing slash
    base_url: String,

    /// API path on the server, with leading slash
    api_path: String,

    /// Gitlab username, forwarded to gogs as clone credential
    username: String,

    /// Gitlab password, forwarded to gogs as clone credential
    password: String,

    /// Gitlab personal access token
    token: String,

    /// Reqwest client
    client: reqwest::Client,
}

impl GitlabClient {
    /// Create a new gitlab client
    pub fn new(
        host: String,
        api_path: String,
        username: String,
        password: String,
        token: String,
    ) -> Self {
        let base_url = host.trim_end_matches('/').to_string();
        let api_path = if api_path.starts_with('/') {
            api_path
        } else {
            format!("/{api_path}")
        };
        Self {
            base_url,
            api_path,
            username,
            password,
            token,
            client: reqwest::Client::new(),
        }
    }

    /// The gitlab base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The gitlab username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The gitlab password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// List all projects visible to the token, page by page
    /// # Errors
    /// Error on any non-success API response
    pub async fn all_projects(&self) -> Result<Vec<GitlabProject>, Gitlab2GogsError> {
        let url = format!("{}{}/projects", self.base_url, self.api_path);
        let mut page: usize = 1;
        let mut all_projects = Vec::new();
        loop {
            let request = self
                .client
                .get(&url)
                .header("PRIVATE-TOKEN", &self.token)
                .header(ACCEPT, "application/json")
                .query(&[("per_page", "100"), ("page", &page.to_string())])
                .send();

            let response = request.await?;
            log::debug!("GET {} (page {}): {}", url, page, response.status());
            if !response.status().is_success() {
                let text = response.text().await?;
                return Err(Gitlab2GogsError::new(Gitlab2GogsErrorKind::GetProjects)
                    .with_remote(RemoteType::Gitlab)
                    .with_text(&text));
            }
            let text = response.text().await?;
            let projects: Vec<GitlabProject> = serde_json::from_str(&text)?;
            if projects.is_empty() {
                break;
            }
            println!("Requested gitlab (page {}): {}", page, projects.len());
            all_projects.extend(projects);
            page += 1;
        }
        Ok(all_projects)
    }
}

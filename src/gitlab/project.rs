//! Gitlab project wire types
use serde::{Deserialize, Serialize};

/// Gitlab project, as returned by the projects API
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct GitlabProject {
    /// Project id
    pub id: u64,

    /// Project name
    pub name: String,

    /// Project description
    pub description: Option<String>,

    /// Project visibility ("private", "internal" or "public")
    pub visibility: String,

    /// Whether the project is archived
    pub archived: bool,

    /// HTTP clone URL
    pub http_url_to_repo: String,

    /// Namespace owning the project
    pub namespace: GitlabNamespace,
}

/// Gitlab namespace owning one or more projects
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct GitlabNamespace {
    /// Namespace name
    pub name: String,

    /// Namespace description
    pub description: Option<String>,
}

impl GitlabProject {
    /// Whether the project is publicly visible ("internal" counts as private)
    pub fn is_public(&self) -> bool {
        self.visibility == "public"
    }
}

//! Gogs repository wire types
use serde::{Deserialize, Serialize};

/// Gogs repository
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct GogsRepo {
    /// Repository id
    pub id: i64,

    /// Repository name
    pub name: String,

    /// Repository full name (owner/name)
    #[serde(default)]
    pub full_name: String,

    /// Whether the repository is private
    pub private: bool,

    /// Whether the repository is a mirror
    #[serde(default)]
    pub mirror: bool,

    /// Repository description
    #[serde(default)]
    pub description: String,
}

/// Body of a repository migration request
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct MigrateRepoOption {
    /// URL the repository is cloned from
    pub clone_addr: String,

    /// Username used for the clone
    pub auth_username: String,

    /// Password used for the clone
    pub auth_password: String,

    /// Id of the owning organization
    pub uid: i64,

    /// Name of the migrated repository
    pub repo_name: String,

    /// Whether the migrated repository is private
    pub private: bool,

    /// Whether the migrated repository stays synchronized with the source
    pub mirror: bool,

    /// Description of the migrated repository
    pub description: String,
}

//! Gogs organization wire types
use serde::{Deserialize, Serialize};

/// Gogs organization
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct GogsOrg {
    /// Organization id
    pub id: i64,

    /// Organization account name
    pub username: String,

    /// Organization full name
    #[serde(default)]
    pub full_name: String,

    /// Organization description
    #[serde(default)]
    pub description: String,
}

/// Body of an organization creation request
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct CreateOrgOption {
    /// Organization account name
    pub username: String,

    /// Organization full name
    pub full_name: String,

    /// Organization description
    pub description: String,
}

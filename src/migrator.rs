//! Migrate gitlab projects to a gogs server, one at a time
use std::collections::HashMap;

use crate::errors::Gitlab2GogsError;
use crate::gitlab::project::{GitlabNamespace, GitlabProject};
use crate::gogs::client::GogsClient;
use crate::gogs::org::{CreateOrgOption, GogsOrg};
use crate::gogs::repo::MigrateRepoOption;

/// "api" is reserved on the gogs side
const RESERVED_NAME: &str = "api";

/// Replacement for the reserved name
const RESERVED_NAME_REPLACEMENT: &str = "theapi";

/// Fix a namespace or project name for the gogs side
///
/// The reserved name "api" (in any casing) always becomes "theapi"; any
/// other name is lowercased when `lc_names` is set and passed through
/// unchanged otherwise.
pub fn fix_name(raw: &str, lc_names: bool) -> String {
    if raw.eq_ignore_ascii_case(RESERVED_NAME) {
        RESERVED_NAME_REPLACEMENT.to_string()
    } else if lc_names {
        raw.to_lowercase()
    } else {
        raw.to_string()
    }
}

/// Optional namespace/project filter, matched case-insensitively
///
/// The project filter only applies inside a matching namespace; without a
/// namespace filter it filters nothing.
#[derive(Default, Debug, Clone)]
pub struct ProjectFilter {
    /// Namespace to migrate, lowercased
    namespace: Option<String>,

    /// Project to migrate within the namespace, lowercased
    project: Option<String>,
}

impl ProjectFilter {
    /// Create a new filter
    pub fn new(namespace: Option<String>, project: Option<String>) -> Self {
        Self {
            namespace: namespace.map(|n| n.to_lowercase()),
            project: project.map(|p| p.to_lowercase()),
        }
    }

    /// Whether the project passes the filter
    pub fn matches(&self, project: &GitlabProject) -> bool {
        match &self.namespace {
            None => true,
            Some(namespace) => {
                if *namespace != project.namespace.name.to_lowercase() {
                    return false;
                }
                match &self.project {
                    Some(name) => *name == project.name.to_lowercase(),
                    None => true,
                }
            }
        }
    }
}

/// Settings for one migration run
#[derive(Default, Debug, Clone)]
pub struct MigratorOptions {
    /// Gogs admin user owning the created organizations
    pub gogs_admin: String,

    /// Gitlab username, forwarded to gogs as clone credential
    pub gitlab_username: String,

    /// Gitlab password, forwarded to gogs as clone credential
    pub gitlab_password: String,

    /// Lowercase organization and repository names
    pub lc_names: bool,

    /// Migrate repositories as mirrors
    pub mirror: bool,
}

/// Migrates gitlab projects to a gogs server
pub struct Migrator {
    /// Gogs API client
    gogs: GogsClient,

    /// Run settings
    opts: MigratorOptions,

    /// Organizations resolved so far, keyed by fixed name
    org_cache: HashMap<String, GogsOrg>,
}

impl Migrator {
    /// Create a new migrator with an empty organization cache
    pub fn new(gogs: GogsClient, opts: MigratorOptions) -> Self {
        Self {
            gogs,
            opts,
            org_cache: HashMap::new(),
        }
    }

    /// Fix a name according to the run settings
    fn fix_name(&self, raw: &str) -> String {
        fix_name(raw, self.opts.lc_names)
    }

    /// Resolve the gogs organization for a gitlab namespace
    ///
    /// Checks the run-local cache, then the gogs server, and finally creates
    /// the organization. Creation failures are fatal.
    async fn resolve_org(
        &mut self,
        namespace: &GitlabNamespace,
    ) -> Result<GogsOrg, Gitlab2GogsError> {
        let name = self.fix_name(&namespace.name);
        if let Some(org) = self.org_cache.get(&name) {
            return Ok(org.clone());
        }
        if let Some(org) = self.gogs.get_org(&name).await? {
            self.org_cache.insert(name, org.clone());
            return Ok(org);
        }
        let create_opt = CreateOrgOption {
            username: name.clone(),
            full_name: namespace.name.clone(),
            description: namespace.description.clone().unwrap_or_default(),
        };
        println!("Creating organization '{}' as '{}'...", namespace.name, name);
        let org = match self
            .gogs
            .admin_create_org(&self.opts.gogs_admin, &create_opt)
            .await
        {
            Ok(org) => org,
            Err(e) => {
                return Err(format!("Failed to create organization '{name}': {e}").into());
            }
        };
        self.org_cache.insert(name, org.clone());
        Ok(org)
    }

    /// Migrate one gitlab project, skipping it if it already exists
    async fn migrate_one(&mut self, project: &GitlabProject) -> Result<(), Gitlab2GogsError> {
        let name = self.fix_name(&project.name);
        let namespace = self.fix_name(&project.namespace.name);
        if self.gogs.get_repo(&namespace, &name).await?.is_some() {
            println!("Repository '{namespace}/{name}' already exists.");
            return Ok(());
        }
        let org = self.resolve_org(&project.namespace).await?;
        println!(
            "Migrating '{}/{}' as '{}/{}'...",
            project.namespace.name, project.name, namespace, name
        );
        let opts = MigrateRepoOption {
            clone_addr: project.http_url_to_repo.clone(),
            auth_username: self.opts.gitlab_username.clone(),
            auth_password: self.opts.gitlab_password.clone(),
            uid: org.id,
            repo_name: name,
            private: !project.is_public(),
            mirror: self.opts.mirror,
            description: project.description.clone().unwrap_or_default(),
        };
        if let Err(e) = self.gogs.migrate_repo(&opts).await {
            return Err(format!(
                "Failed to migrate '{}/{}': {e}",
                project.namespace.name, project.name
            )
            .into());
        }
        Ok(())
    }

    /// Migrate all projects passing the filter, in listing order
    ///
    /// Archived projects are skipped. The first hard API error aborts the
    /// remaining batch.
    /// # Errors
    /// Error on the first fatal API failure
    pub async fn run(
        &mut self,
        projects: &[GitlabProject],
        filter: &ProjectFilter,
    ) -> Result<(), Gitlab2GogsError> {
        for project in projects {
            if project.archived {
                println!(
                    "Skipping archived project '{}/{}'",
                    project.namespace.name, project.name
                );
                continue;
            }
            if !filter.matches(project) {
                log::debug!(
                    "Skipping filtered project '{}/{}'",
                    project.namespace.name,
                    project.name
                );
                continue;
            }
            self.migrate_one(project).await?;
        }
        Ok(())
    }
}

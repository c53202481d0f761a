//! Utility functions
use crate::config::Config;
use crate::errors::Gitlab2GogsError;
use crate::gitlab::config::GitlabConfig;
use crate::gogs::config::GogsConfig;
use crate::migrator::{Migrator, MigratorOptions, ProjectFilter};

/// Main function to migrate projects
/// # Errors
/// Error on configuration problems or on the first fatal API failure
pub async fn run_migration(config: &mut Config) -> Result<(), Gitlab2GogsError> {
    let gitlab = GitlabConfig::get_client(config)?;
    let (gogs, gogs_admin) = GogsConfig::get_client(config)?;
    println!("Fetching projects from {}", gitlab.base_url());
    let projects = match gitlab.all_projects().await {
        Ok(projects) => projects,
        Err(e) => return Err(format!("Cannot get gitlab projects: {e}").into()),
    };
    println!("Number of projects in gitlab: {}", projects.len());
    let filter = ProjectFilter::new(
        config.cli_args.gitlab_org.clone(),
        config.cli_args.gitlab_repo.clone(),
    );
    let opts = MigratorOptions {
        gogs_admin,
        gitlab_username: gitlab.username().to_string(),
        gitlab_password: gitlab.password().to_string(),
        lc_names: config.cli_args.lc_names,
        mirror: config.cli_args.mirror,
    };
    let mut migrator = Migrator::new(gogs, opts);
    migrator.run(&projects, &filter).await
}

/// Get input from the user
pub(crate) fn input() -> Result<String, Gitlab2GogsError> {
    use std::io::{stdin, stdout, Write};
    let mut s = String::new();
    let _ = stdout().flush();
    stdin()
        .read_line(&mut s)
        .map_err(|e| Gitlab2GogsError::new_with_source("Did not enter a correct string", e))?;
    if let Some('\n') = s.chars().next_back() {
        s.pop();
    }
    if let Some('\r') = s.chars().next_back() {
        s.pop();
    }
    Ok(s)
}

/// Get a password from the user, without echo
pub(crate) fn get_password() -> Result<String, Gitlab2GogsError> {
    rpassword::read_password()
        .map_err(|e| Gitlab2GogsError::new_with_source("Error reading password", e))
}

//! Command line options for the gitlab2gogs tool
use crate::{config::Config, errors::Gitlab2GogsError, utils::run_migration};
use clap::Parser;
use serde::Deserialize;

/// gitlab2gogs - Migrate GitLab projects to a Gogs server
#[derive(Parser, Deserialize, Default, Clone, Debug)]
pub struct Gitlab2GogsCli {
    /// Base URL of the gitlab server (e.g. https://gitlab.example.com)
    #[arg(long = "gitlab-host")]
    pub gitlab_host: Option<String>,

    /// API path on the gitlab server
    #[arg(long = "gitlab-api-path")]
    pub gitlab_api_path: Option<String>,

    /// Gitlab username, used by gogs to clone the repositories
    #[arg(long = "gitlab-user")]
    pub gitlab_user: Option<String>,

    /// Gitlab password, used by gogs to clone the repositories
    #[arg(long = "gitlab-password")]
    pub gitlab_password: Option<String>,

    /// Gitlab personal access token, used to list the projects
    #[arg(long = "gitlab-token")]
    pub gitlab_token: Option<String>,

    /// Base URL of the gogs server (e.g. https://gogs.example.com)
    #[arg(long = "gogs-url")]
    pub gogs_url: Option<String>,

    /// Gogs access token
    #[arg(long = "gogs-token")]
    pub gogs_token: Option<String>,

    /// Gogs admin user that will own the created organizations
    #[arg(long = "gogs-user")]
    pub gogs_user: Option<String>,

    /// Lowercase organization and repository names
    #[arg(long = "lc-names")]
    pub lc_names: bool,

    /// Only migrate projects from this gitlab namespace
    #[arg(long = "gitlab-org")]
    pub gitlab_org: Option<String>,

    /// Only migrate this project (combined with --gitlab-org)
    #[arg(long = "gitlab-repo")]
    pub gitlab_repo: Option<String>,

    /// Migrate repositories as mirrors
    #[arg(short, long)]
    pub mirror: bool,

    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Show the current config path
    #[arg(long)]
    pub show_config_path: bool,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Run the gitlab2gogs tool with the provided command line options
/// # Errors
/// Error on configuration problems or on the first fatal API failure
pub async fn gitlab2gogs_main(args: Gitlab2GogsCli) -> Result<(), Gitlab2GogsError> {
    let mut config = Config::try_new(args)?;
    if config.cli_args.show_config_path {
        println!("{}", config.config_path.display());
        return Ok(());
    }
    run_migration(&mut config).await
}

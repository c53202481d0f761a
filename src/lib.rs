//! # gitlab2gogs
//!
//! Migrate GitLab projects to a Gogs server
//!
//! ## Usage
//!
//! ```txt
//! Usage: gitlab2gogs [OPTIONS]
//!
//! Options:
//!       --gitlab-host <GITLAB_HOST>          Base URL of the gitlab server (e.g. https://gitlab.example.com)
//!       --gitlab-api-path <GITLAB_API_PATH>  API path on the gitlab server
//!       --gitlab-user <GITLAB_USER>          Gitlab username, used by gogs to clone the repositories
//!       --gitlab-password <GITLAB_PASSWORD>  Gitlab password, used by gogs to clone the repositories
//!       --gitlab-token <GITLAB_TOKEN>        Gitlab personal access token, used to list the projects
//!       --gogs-url <GOGS_URL>                Base URL of the gogs server (e.g. https://gogs.example.com)
//!       --gogs-token <GOGS_TOKEN>            Gogs access token
//!       --gogs-user <GOGS_USER>              Gogs admin user that will own the created organizations
//!       --lc-names                           Lowercase organization and repository names
//!       --gitlab-org <GITLAB_ORG>            Only migrate projects from this gitlab namespace
//!       --gitlab-repo <GITLAB_REPO>          Only migrate this project (combined with --gitlab-org)
//!   -m, --mirror                             Migrate repositories as mirrors
//!   -c, --config <CONFIG>                    Custom configuration file path
//!       --show-config-path                   Show the current config path
//!   -v, --verbose...                         Verbose mode (-v, -vv, -vvv)
//!   -h, --help                               Print help
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::multiple_crate_versions)]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod macros;
pub(crate) mod utils;
pub(crate) use macros::config_password_wrap;
pub(crate) use macros::config_value;
pub(crate) use macros::config_value_wrap;

pub mod gitlab;
pub mod gogs;
pub mod migrator;

pub use cli::{gitlab2gogs_main, Gitlab2GogsCli};
pub use config::Config;
pub use errors::Gitlab2GogsError;
pub use utils::run_migration;

//! Configuration handling
use std::{
    fs::{create_dir_all, read_to_string, File},
    io::Write,
    path::PathBuf,
};

use home::home_dir;
use serde::{Deserialize, Serialize};

use crate::{
    cli::Gitlab2GogsCli, errors::Gitlab2GogsError, gitlab::config::GitlabConfig,
    gogs::config::GogsConfig,
};

/// Configuration data
#[derive(Deserialize, Default, Clone, Debug)]
pub struct Config {
    /// path to the configuration file
    pub config_path: PathBuf,

    /// actual configuration data
    pub config_data: ConfigData,

    /// CLI arguments
    pub cli_args: Gitlab2GogsCli,
}

/// Content of the configuration file
#[derive(Deserialize, Serialize, Default, Clone, Debug)]
pub struct ConfigData {
    /// Gitlab configuration
    pub gitlab: Option<GitlabConfig>,

    /// Gogs configuration
    pub gogs: Option<GogsConfig>,
}

impl Config {
    /// Create a new Config object, overlaying CLI values on the file values
    /// # Errors
    /// Error if the config file can't be opened
    pub fn try_new(cli_args: Gitlab2GogsCli) -> Result<Self, Gitlab2GogsError> {
        let config_path = match cli_args.config.clone() {
            Some(p) => PathBuf::from(p),
            None => Self::get_config_path()?,
        };
        let contents = read_to_string(config_path.clone())
            .map_err(|e| Gitlab2GogsError::new_with_source("Unable to open", e))?;
        let config_data = toml::from_str(&contents)?;
        let mut config = Config {
            config_path,
            cli_args,
            config_data,
        };
        config.overlay_cli_args();
        Ok(config)
    }

    /// Copy values given on the command line over the file values
    fn overlay_cli_args(&mut self) {
        let cli = self.cli_args.clone();
        let gitlab = self.config_data.gitlab.get_or_insert_with(Default::default);
        if cli.gitlab_host.is_some() {
            gitlab.host = cli.gitlab_host;
        }
        if cli.gitlab_api_path.is_some() {
            gitlab.api_path = cli.gitlab_api_path;
        }
        if cli.gitlab_user.is_some() {
            gitlab.username = cli.gitlab_user;
        }
        if cli.gitlab_password.is_some() {
            gitlab.password = cli.gitlab_password;
        }
        if cli.gitlab_token.is_some() {
            gitlab.token = cli.gitlab_token;
        }
        let gogs = self.config_data.gogs.get_or_insert_with(Default::default);
        if cli.gogs_url.is_some() {
            gogs.url = cli.gogs_url;
        }
        if cli.gogs_token.is_some() {
            gogs.token = cli.gogs_token;
        }
        if cli.gogs_user.is_some() {
            gogs.admin_user = cli.gogs_user;
        }
    }

    /// Save the config data to the config file
    /// # Errors
    /// Error if the config file can't be created or written to
    pub fn save(&self) -> Result<(), Gitlab2GogsError> {
        let config_str = toml::to_string(&self.config_data)
            .map_err(|e| Gitlab2GogsError::new_with_source("Unable to serialize config", e))?;
        let mut file = File::create(&self.config_path)
            .map_err(|e| Gitlab2GogsError::new_with_source("Unable to create config file", e))?;
        file.write_all(config_str.as_bytes())
            .map_err(|e| Gitlab2GogsError::new_with_source("Unable to write to config file", e))
    }

    /// Get the path to the config file
    /// # Errors
    /// Error if the home directory can't be found
    pub fn get_config_path() -> Result<PathBuf, Gitlab2GogsError> {
        let home_dir = match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err("Unable to get your home dir! home::home_dir() isn't working".into()),
        };
        let config_directory = home_dir.join(".config").join(".gitlab2gogs");
        let config_path = config_directory.join("config.toml");
        create_dir_all(config_directory)
            .map_err(|e| Gitlab2GogsError::new_with_source("Unable to create config dir", e))?;
        if !config_path.exists() {
            let mut file = File::create(&config_path)
                .map_err(|e| Gitlab2GogsError::new_with_source("Unable to create config file", e))?;
            file.write_all(b"")
                .map_err(|e| Gitlab2GogsError::new_with_source("Unable to write to config file", e))?;
        }
        Ok(config_path)
    }

    /// Update the config data and save it to the config file
    /// # Errors
    /// Error if fail to save config
    pub fn update(
        &mut self,
        updater_fn: impl FnOnce(&mut ConfigData),
    ) -> Result<(), Gitlab2GogsError> {
        updater_fn(&mut self.config_data);
        self.save()?;
        Ok(())
    }
}

//! Configuration management for rHub CLI.

use anyhow::{Context, Result};
use rhub::storage::FileStorage;
use rhub::{HubClient, Router, Session};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::output::CliNotifier;

const CONFIG_FILE: &str = "rhub.toml";
const CREDENTIALS_FILE: &str = "rhub-credentials.json";

/// CLI configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server base URL.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

fn exe_dir() -> Result<PathBuf> {
    let exe_path = env::current_exe().context("Could not determine executable path")?;
    let exe_dir = exe_path
        .parent()
        .context("Could not determine executable directory")?;

    Ok(exe_dir.to_path_buf())
}

/// Get the configuration file path.
pub fn config_path() -> Result<PathBuf> {
    Ok(exe_dir()?.join(CONFIG_FILE))
}

/// Get the credential store path.
pub fn credentials_path() -> Result<PathBuf> {
    Ok(exe_dir()?.join(CREDENTIALS_FILE))
}

/// Load configuration from file.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path).context("Failed to read config file")?;

    toml::from_str(&content).context("Failed to parse config file")
}

/// Everything a command needs: the session, the route table and a client
/// bound to both.
pub struct AppContext {
    pub session: Arc<Session>,
    pub router: Arc<Router>,
    pub client: HubClient,
}

impl AppContext {
    /// Build the context from the config file, with `base_url` taking
    /// precedence when given.
    pub fn load(base_url: Option<&str>) -> Result<Self> {
        let config = load_config()?;

        let storage = FileStorage::open(credentials_path()?)
            .context("Failed to open credential store")?;
        let router = Arc::new(Router::standard().context("Failed to build route table")?);
        let session = Arc::new(Session::initialize(Arc::new(storage)).with_redirect(router.clone()));

        let mut builder = HubClient::builder()
            .session(session.clone())
            .notifier(Arc::new(CliNotifier));

        if let Some(url) = base_url.map(str::to_owned).or(config.base_url) {
            builder = builder.base_url(url);
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().context("Failed to build rHub client")?;

        Ok(Self {
            session,
            router,
            client,
        })
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.session.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let cfg: Config = toml::from_str("base_url = \"http://localhost:9000\"\ntimeout_secs = 3\n").unwrap();
        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cfg.timeout_secs, Some(3));

        let empty: Config = toml::from_str("").unwrap();
        assert!(empty.base_url.is_none());
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::constants::{DEFAULT_HOST, DEFAULT_SCHEME, FORGE_HIDDEN_DIR, REMOTE_CONFIG_FILENAME};
use crate::error::ForgeError;

/// Where the backend API lives. Injected into every loader call so nothing
/// in the crate hardcodes a host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub host: String,
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

fn default_scheme() -> String {
    String::from(DEFAULT_SCHEME)
}

impl Default for RemoteConfig {
    fn default() -> RemoteConfig {
        RemoteConfig::new()
    }
}

impl RemoteConfig {
    pub fn new() -> RemoteConfig {
        RemoteConfig {
            host: String::from(DEFAULT_HOST),
            scheme: String::from(DEFAULT_SCHEME),
        }
    }

    pub fn from_host(host: impl AsRef<str>) -> RemoteConfig {
        RemoteConfig {
            host: host.as_ref().to_string(),
            scheme: String::from(DEFAULT_SCHEME),
        }
    }

    /// Parse a fully qualified base URL, e.g. `http://127.0.0.1:4000`.
    pub fn from_url(url: impl AsRef<str>) -> Result<RemoteConfig, ForgeError> {
        let parsed = Url::parse(url.as_ref())?;
        let mut host = parsed.host_str().unwrap_or_default().to_string();
        if host.is_empty() {
            return Err(ForgeError::basic_str(format!(
                "Remote URL has no host: {}",
                url.as_ref()
            )));
        }
        if let Some(port) = parsed.port() {
            host = format!("{host}:{port}");
        }
        Ok(RemoteConfig {
            host,
            scheme: parsed.scheme().to_string(),
        })
    }

    /// Read the config file if one was written, otherwise the defaults.
    pub fn get() -> Result<RemoteConfig, ForgeError> {
        let config_file = RemoteConfig::default_path()?;
        log::debug!("looking for remote config in...{:?}", config_file);
        if config_file.exists() {
            RemoteConfig::from_file(&config_file)
        } else {
            Ok(RemoteConfig::new())
        }
    }

    pub fn from_file(path: &Path) -> Result<RemoteConfig, ForgeError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn default_path() -> Result<PathBuf, ForgeError> {
        match dirs::home_dir() {
            Some(home_dir) => Ok(home_dir.join(FORGE_HIDDEN_DIR).join(REMOTE_CONFIG_FILENAME)),
            None => Err(ForgeError::home_dir_not_found()),
        }
    }

    pub fn save_default(&self) -> Result<(), ForgeError> {
        let config_file = RemoteConfig::default_path()?;
        if let Some(config_dir) = config_file.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)?;
            }
        }
        self.save(&config_file)
    }

    pub fn save(&self, path: &Path) -> Result<(), ForgeError> {
        let toml = toml::to_string(&self)?;
        fs::write(path, toml)?;
        Ok(())
    }

    /// `<scheme>://<host>`, no trailing slash.
    pub fn root_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

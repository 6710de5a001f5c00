//! Registry login detection from the docker client configuration.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const DOCKER_HUB: &str = "index.docker.io";

/// The parts of `~/.docker/config.json` that record registry credentials.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerConfigFile {
    #[serde(default)]
    pub auths: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub cred_helpers: HashMap<String, String>,
    #[serde(default)]
    pub creds_store: Option<String>,
}

impl DockerConfigFile {
    /// `$DOCKER_CONFIG/config.json`, falling back to `$HOME/.docker/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os("DOCKER_CONFIG") {
            return Some(PathBuf::from(dir).join("config.json"));
        }
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".docker/config.json"))
    }

    /// Load the config file. A missing file means no credentials at all.
    pub fn load(path: &Path) -> Result<Self, AuthError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| AuthError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| AuthError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Whether pushing to `registry_root` can be expected to authenticate.
    ///
    /// A global `credsStore` is trusted without querying the helper.
    pub fn has_credentials(&self, registry_root: &str) -> bool {
        if self.creds_store.as_deref().is_some_and(|s| !s.is_empty()) {
            tracing::debug!("docker credsStore configured, assuming login");
            return true;
        }
        let wanted = registry_host(registry_root);
        self.auths
            .keys()
            .chain(self.cred_helpers.keys())
            .any(|key| normalize_key(key) == wanted)
    }
}

/// Registry host of an image prefix; bare Docker Hub namespaces map to the index.
pub fn registry_host(registry_root: &str) -> String {
    let first = registry_root
        .trim()
        .split('/')
        .next()
        .unwrap_or_default();
    let is_host = first.contains('.') || first.contains(':') || first == "localhost";
    match first {
        "docker.io" | "registry-1.docker.io" => DOCKER_HUB.to_owned(),
        _ if is_host => first.to_owned(),
        _ => DOCKER_HUB.to_owned(),
    }
}

fn normalize_key(key: &str) -> String {
    let without_scheme = key
        .strip_prefix("https://")
        .or_else(|| key.strip_prefix("http://"))
        .unwrap_or(key);
    registry_host(without_scheme)
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("failed to read docker config {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse docker config {path}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

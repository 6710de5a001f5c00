use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the per-repository manifest.
pub const MANIFEST_FILE: &str = "deploy.toml";

/// deploy.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployManifest {
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub docker_repository: DockerRepositoryConfig,
    #[serde(default)]
    pub cluster: ClusterConfig,
    #[serde(default)]
    pub testing: TestingConfig,
    /// Test sets, run in declared order
    #[serde(default)]
    pub tests: Vec<TestSetConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name, used as the image repository name
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DockerRepositoryConfig {
    /// Registry prefix, e.g. `eu.gcr.io/my-project`
    #[serde(default)]
    pub registry_root: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Target cluster; `production` enables the dirty working tree check
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestingConfig {
    /// Image used for `in-external-container` test commands
    #[serde(default = "default_aux_image")]
    pub aux_image: String,
    /// Seconds to wait after starting a test container
    #[serde(default = "default_grace_secs")]
    pub startup_grace_secs: u64,
    /// Seconds to wait before each test command
    #[serde(default = "default_grace_secs")]
    pub command_grace_secs: u64,
}

/// One `[[tests]]` entry as declared in deploy.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestSetConfig {
    #[serde(default)]
    pub name: String,
    /// `host-only`, `on-host`, `in-test-container` or `in-external-container`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Extra flags for `docker run`, placed before the image name
    #[serde(default)]
    pub docker_args: String,
    /// Command for the started container, placed after the image name
    #[serde(default)]
    pub docker_command: String,
    #[serde(default)]
    pub commands: Vec<String>,
}

impl Default for TestingConfig {
    fn default() -> Self {
        Self {
            aux_image: default_aux_image(),
            startup_grace_secs: default_grace_secs(),
            command_grace_secs: default_grace_secs(),
        }
    }
}

impl DeployManifest {
    /// Load deploy.toml from the given project directory.
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        Self::load_from(&project_dir.join(MANIFEST_FILE))
    }

    /// Load a manifest from an explicit path.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| crate::Error::ConfigLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn default_aux_image() -> String {
    "mycujoo/gcloud-docker".to_owned()
}

fn default_grace_secs() -> u64 {
    2
}

use crate::command::{TestCommand, tokenize};
use crate::config::{DeployManifest, TestSetConfig};
use crate::git::GitInfo;
use std::path::PathBuf;
use std::time::Duration;

/// Cluster name that requires a clean working tree before building.
pub const PRODUCTION_CLUSTER: &str = "production";

/// Where the commands of a test set are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// On the host, without starting a test container.
    HostOnly,
    /// On the host, against a started test container.
    OnHost,
    /// Inside the started test container via `docker exec`.
    InTestContainer,
    /// In a throwaway container sharing the test container's network.
    ///
    /// `declared` is false when the manifest gave no (or an unknown) type.
    InExternalContainer { declared: bool },
}

impl ExecutionMode {
    pub fn from_declared(kind: Option<&str>) -> Self {
        match kind {
            Some("host-only") => Self::HostOnly,
            Some("on-host") => Self::OnHost,
            Some("in-test-container") => Self::InTestContainer,
            Some("in-external-container") => Self::InExternalContainer { declared: true },
            _ => Self::InExternalContainer { declared: false },
        }
    }

    /// Whether a test container is started for this mode.
    pub fn starts_container(self) -> bool {
        !matches!(self, Self::HostOnly)
    }
}

/// A resolved test set: typed commands plus the container it runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSet {
    pub name: String,
    pub mode: ExecutionMode,
    pub docker_args: Vec<String>,
    pub docker_command: Vec<String>,
    pub commands: Vec<TestCommand>,
}

impl TestSet {
    pub fn from_config(config: &TestSetConfig) -> crate::Result<Self> {
        let split = |field: &'static str, value: &str| {
            tokenize(value).map_err(|_| crate::Error::UnterminatedQuote {
                test_set: config.name.clone(),
                field,
                value: value.to_owned(),
            })
        };

        let commands = config
            .commands
            .iter()
            .enumerate()
            .map(|(index, line)| {
                TestCommand::parse(line)
                    .map_err(|_| crate::Error::UnterminatedQuote {
                        test_set: config.name.clone(),
                        field: "commands",
                        value: line.clone(),
                    })?
                    .ok_or_else(|| crate::Error::EmptyTestCommand {
                        test_set: config.name.clone(),
                        index,
                    })
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Self {
            name: config.name.clone(),
            mode: ExecutionMode::from_declared(config.kind.as_deref()),
            docker_args: split("docker_args", &config.docker_args)?,
            docker_command: split("docker_command", &config.docker_command)?,
            commands,
        })
    }
}

/// Everything the build pipeline needs to know about the repository.
#[derive(Debug, Clone)]
pub struct RepoConfig {
    pub app_name: String,
    pub cluster_name: String,
    pub registry_root: String,
    /// Short image reference, e.g. `my-api:master-abc1234`
    pub image_name: String,
    /// Registry-qualified image reference
    pub image_full_path: String,
    pub release_name: String,
    /// Docker build context
    pub pwd: PathBuf,
    pub aux_test_image: String,
    pub startup_grace: Duration,
    pub command_grace: Duration,
    pub tests: Vec<TestSet>,
}

impl RepoConfig {
    /// Combine the manifest with git metadata for the working tree at `pwd`.
    pub fn resolve(manifest: &DeployManifest, pwd: PathBuf, git: &GitInfo) -> crate::Result<Self> {
        let app_name = manifest.application.name.trim();
        if app_name.is_empty() {
            return Err(crate::Error::MissingField {
                field: "application.name",
            });
        }
        let registry_root = manifest
            .docker_repository
            .registry_root
            .trim()
            .trim_end_matches('/');
        if registry_root.is_empty() {
            return Err(crate::Error::MissingField {
                field: "docker_repository.registry_root",
            });
        }

        let image_name = format!("{app_name}:{tag}", tag = git.image_tag());
        let image_full_path = format!("{registry_root}/{image_name}");

        let tests = manifest
            .tests
            .iter()
            .map(TestSet::from_config)
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Self {
            app_name: app_name.to_owned(),
            cluster_name: manifest.cluster.name.clone(),
            registry_root: registry_root.to_owned(),
            image_name,
            image_full_path,
            release_name: format!("{app_name}-{branch}", branch = git.sanitized_branch()),
            pwd,
            aux_test_image: manifest.testing.aux_image.clone(),
            startup_grace: Duration::from_secs(manifest.testing.startup_grace_secs),
            command_grace: Duration::from_secs(manifest.testing.command_grace_secs),
            tests,
        })
    }

    pub fn is_production(&self) -> bool {
        self.cluster_name == PRODUCTION_CLUSTER
    }
}

use crate::error::PipelineError;
use kubedeploy_docker::{DockerConfigFile, registry_host};

/// Refuses to start a build that could never be pushed.
pub struct RegistryLoginCheck<'a> {
    credentials: &'a DockerConfigFile,
}

impl<'a> RegistryLoginCheck<'a> {
    pub fn new(credentials: &'a DockerConfigFile) -> Self {
        Self { credentials }
    }

    pub fn check(&self, registry_root: &str) -> Result<(), PipelineError> {
        if self.credentials.has_credentials(registry_root) {
            Ok(())
        } else {
            Err(PipelineError::NotLoggedIn {
                registry: registry_host(registry_root),
            })
        }
    }
}

use crate::error::PipelineError;
use kubedeploy_docker::{CommandExecutor, DockerClient};
use std::path::Path;

/// Builds the image under its short name.
pub struct ImageBuilder<'a, E: CommandExecutor> {
    docker: &'a DockerClient<E>,
}

impl<'a, E: CommandExecutor> ImageBuilder<'a, E> {
    pub fn new(docker: &'a DockerClient<E>) -> Self {
        Self { docker }
    }

    /// `docker build`, streamed. Any non-zero exit is fatal; there is no retry.
    pub async fn build(&self, image: &str, context: &Path) -> Result<(), PipelineError> {
        tracing::info!("building image {image} from {}", context.display());

        let exit_code = self
            .docker
            .build(image, context)
            .await
            .map_err(|e| PipelineError::BuildExec { source: e })?;

        if exit_code != 0 {
            return Err(PipelineError::BuildFailed {
                image: image.to_owned(),
                exit_code,
            });
        }
        Ok(())
    }
}

/// Re-tags the built image with its registry-qualified path.
pub struct ImageTagger<'a, E: CommandExecutor> {
    docker: &'a DockerClient<E>,
}

impl<'a, E: CommandExecutor> ImageTagger<'a, E> {
    pub fn new(docker: &'a DockerClient<E>) -> Self {
        Self { docker }
    }

    /// `docker tag`. A non-zero exit is fatal.
    pub async fn tag(&self, image: &str, full_path: &str) -> Result<(), PipelineError> {
        tracing::info!("tagging {image} as {full_path}");

        let exit_code = self
            .docker
            .tag(image, full_path)
            .await
            .map_err(|e| PipelineError::DockerExec {
                action: "tag",
                source: e,
            })?;

        if exit_code != 0 {
            return Err(PipelineError::TagFailed {
                image: image.to_owned(),
                full_path: full_path.to_owned(),
                exit_code,
            });
        }
        Ok(())
    }
}

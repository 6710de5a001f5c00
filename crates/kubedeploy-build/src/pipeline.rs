use crate::dispatch::TestDispatcher;
use crate::error::PipelineError;
use crate::image::{ImageBuilder, ImageTagger};
use crate::login::RegistryLoginCheck;
use crate::push::{PipelineOutcome, PushGate};
use crate::readiness::{FixedDelay, ReadinessWait};
use crate::workdir::WorkingDirectoryGate;
use kubedeploy_core::{RepoConfig, RunOptions};
use kubedeploy_docker::{CommandExecutor, DockerClient, DockerConfigFile, RealExecutor};
use std::io::{BufRead, Write};

/// The build → test → tag → push state machine.
///
/// Every stage returns on the first fatal condition; nothing here exits the
/// process.
pub struct Pipeline<E: CommandExecutor = RealExecutor, W: ReadinessWait = FixedDelay> {
    docker: DockerClient<E>,
    repo: RepoConfig,
    options: RunOptions,
    readiness: W,
    credentials: DockerConfigFile,
}

impl<E: CommandExecutor> Pipeline<E, FixedDelay> {
    /// Pipeline with the manifest's fixed readiness delays and no registry
    /// credentials; see [`Pipeline::with_credentials`].
    pub fn new(docker: DockerClient<E>, repo: RepoConfig, options: RunOptions) -> Self {
        let readiness = FixedDelay::from_repo(&repo);
        Self {
            docker,
            repo,
            options,
            readiness,
            credentials: DockerConfigFile::default(),
        }
    }
}

impl<E: CommandExecutor, W: ReadinessWait> Pipeline<E, W> {
    pub fn with_readiness<W2: ReadinessWait>(self, readiness: W2) -> Pipeline<E, W2> {
        Pipeline {
            docker: self.docker,
            repo: self.repo,
            options: self.options,
            readiness,
            credentials: self.credentials,
        }
    }

    pub fn with_credentials(mut self, credentials: DockerConfigFile) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn repo(&self) -> &RepoConfig {
        &self.repo
    }

    /// Full run: build and test, then push (forced or after asking).
    pub async fn make_and_push<R: BufRead, Wr: Write>(
        &self,
        input: &mut R,
        output: &mut Wr,
    ) -> Result<PipelineOutcome, PipelineError> {
        self.make_and_test().await?;

        let gate = PushGate::new(&self.docker, &self.repo.image_full_path);
        if self.options.force_push_image {
            gate.force().await
        } else {
            gate.ask(input, output).await
        }
    }

    /// Login check, dirty-tree gate, build, all test sets, tag.
    pub async fn make_and_test(&self) -> Result<PipelineOutcome, PipelineError> {
        RegistryLoginCheck::new(&self.credentials).check(&self.repo.registry_root)?;
        self.build().await?;
        self.run_tests().await?;
        ImageTagger::new(&self.docker)
            .tag(&self.repo.image_name, &self.repo.image_full_path)
            .await?;
        Ok(PipelineOutcome::Tested)
    }

    /// Build the image; production builds first require a clean tree.
    pub async fn build(&self) -> Result<(), PipelineError> {
        if self.repo.is_production() {
            let gate = WorkingDirectoryGate::new(
                self.docker.executor(),
                &self.repo.pwd,
                self.options.override_dirty_workdir,
            );
            if !gate.is_clean().await {
                return Err(PipelineError::DirtyWorkdir);
            }
        }

        ImageBuilder::new(&self.docker)
            .build(&self.repo.image_name, &self.repo.pwd)
            .await
    }

    /// Run every declared test set against the already-built image.
    pub async fn run_tests(&self) -> Result<(), PipelineError> {
        TestDispatcher::new(&self.docker, &self.readiness, &self.repo, &self.options)
            .run_all(&self.repo.tests)
            .await
    }
}

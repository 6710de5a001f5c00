use crate::error::PipelineError;
use crate::lifecycle::ContainerLifecycle;
use crate::readiness::ReadinessWait;
use kubedeploy_core::{ExecutionMode, RepoConfig, RunOptions, TestCommand, TestSet};
use kubedeploy_docker::{CommandExecutor, ContainerHandle, DockerClient, ExecError};

/// Runs declared test sets in order, one optional container per set.
///
/// The first failing command (or container start) tears down that set's
/// container and fails the whole run; later commands and sets never run.
pub struct TestDispatcher<'a, E: CommandExecutor, W: ReadinessWait> {
    docker: &'a DockerClient<E>,
    readiness: &'a W,
    lifecycle: ContainerLifecycle<'a, E>,
    image_name: &'a str,
    aux_image: &'a str,
}

impl<'a, E: CommandExecutor, W: ReadinessWait> TestDispatcher<'a, E, W> {
    pub fn new(
        docker: &'a DockerClient<E>,
        readiness: &'a W,
        repo: &'a RepoConfig,
        options: &RunOptions,
    ) -> Self {
        Self {
            docker,
            readiness,
            lifecycle: ContainerLifecycle::new(docker, options.keep_test_container),
            image_name: &repo.image_name,
            aux_image: &repo.aux_test_image,
        }
    }

    pub async fn run_all(&self, sets: &[TestSet]) -> Result<(), PipelineError> {
        for set in sets {
            self.run_set(set).await?;
        }
        Ok(())
    }

    /// Run one test set. Teardown happens exactly once, on every path.
    pub async fn run_set(&self, set: &TestSet) -> Result<(), PipelineError> {
        tracing::info!("setting up test set: {}", set.name);

        let handle = if set.mode.starts_container() {
            self.start_container(set).await?
        } else {
            ContainerHandle::none()
        };

        self.readiness.container_started().await;

        let result = self.run_commands(set, &handle).await;
        self.lifecycle.teardown(handle).await;
        result
    }

    async fn start_container(&self, set: &TestSet) -> Result<ContainerHandle, PipelineError> {
        tracing::info!("starting docker image: {}", self.image_name);

        let started = self
            .docker
            .start_container(&set.docker_args, self.image_name, &set.docker_command)
            .await
            .map_err(|e| PipelineError::TestExec {
                test_set: set.name.clone(),
                source: e,
            })?;

        let handle = ContainerHandle::from_run_output(&started.stdout);
        tracing::debug!(%handle, "test container started");

        if !started.success() {
            self.lifecycle.teardown(handle).await;
            return Err(PipelineError::ContainerStart {
                test_set: set.name.clone(),
                exit_code: started.exit_code,
            });
        }
        if handle.is_empty() {
            tracing::warn!(
                "test set '{}': docker run printed no container ID; add -d to docker_args",
                set.name
            );
        }
        Ok(handle)
    }

    async fn run_commands(
        &self,
        set: &TestSet,
        handle: &ContainerHandle,
    ) -> Result<(), PipelineError> {
        for command in &set.commands {
            self.readiness.before_command().await;
            tracing::info!("executing test command: {command}");

            let exit_code = self
                .execute(set.mode, handle, command)
                .await
                .map_err(|e| PipelineError::TestExec {
                    test_set: set.name.clone(),
                    source: e,
                })?;

            if exit_code != 0 {
                return Err(PipelineError::TestFailed {
                    test_set: set.name.clone(),
                    command: command.to_string(),
                    exit_code,
                });
            }
        }
        Ok(())
    }

    /// Dispatch one command according to the set's execution mode.
    async fn execute(
        &self,
        mode: ExecutionMode,
        handle: &ContainerHandle,
        command: &TestCommand,
    ) -> Result<i32, ExecError> {
        match mode {
            ExecutionMode::HostOnly | ExecutionMode::OnHost => {
                self.docker.run_on_host(command).await
            }
            ExecutionMode::InTestContainer => self.docker.exec(handle, command).await,
            ExecutionMode::InExternalContainer { declared } => {
                if !declared {
                    tracing::warn!(
                        "no test type given for `{command}`; running it in a container \
                         attached to the test container's network"
                    );
                }
                self.docker
                    .run_attached(handle, self.aux_image, command)
                    .await
            }
        }
    }
}

use crate::container::ContainerHandle;
use crate::executor::{CommandExecutor, CommandResult, ExecError, RealExecutor};
use kubedeploy_core::TestCommand;
use std::path::Path;

/// Name of the docker CLI binary.
pub const DOCKER: &str = "docker";

/// Docker CLI operations, parameterized over the executor for testability.
///
/// Methods return the raw exit code; deciding which codes are fatal is the
/// pipeline's job.
pub struct DockerClient<E: CommandExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// The underlying executor, for commands that do not go through docker.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    // ── Images ──

    /// `docker build -t <image> <context>`, streamed.
    pub async fn build(&self, image: &str, context: &Path) -> Result<i32, ExecError> {
        let context = context.to_string_lossy();
        self.executor
            .run_streaming(DOCKER, &args(["build", "-t", image, &context]))
            .await
    }

    /// `docker tag <image> <full_path>`.
    pub async fn tag(&self, image: &str, full_path: &str) -> Result<i32, ExecError> {
        self.executor
            .run(DOCKER, &args(["tag", image, full_path]))
            .await
    }

    /// `docker push <full_path>`, streamed.
    pub async fn push(&self, full_path: &str) -> Result<i32, ExecError> {
        self.executor
            .run_streaming(DOCKER, &args(["push", full_path]))
            .await
    }

    // ── Test containers ──

    /// `docker run <docker_args…> <image> <docker_command…>`, capturing stdout
    /// so the container ID printed by a detached run can be recovered.
    pub async fn start_container(
        &self,
        docker_args: &[String],
        image: &str,
        docker_command: &[String],
    ) -> Result<CommandResult, ExecError> {
        let mut cmd = args(["run"]);
        cmd.extend(docker_args.iter().cloned());
        cmd.push(image.to_owned());
        cmd.extend(docker_command.iter().cloned());

        self.executor.run_capturing(DOCKER, &cmd).await
    }

    /// `docker exec <handle> <command…>`, streamed.
    pub async fn exec(
        &self,
        handle: &ContainerHandle,
        command: &TestCommand,
    ) -> Result<i32, ExecError> {
        let mut cmd = args(["exec", handle.as_str()]);
        cmd.extend(command.argv());

        self.executor.run_streaming(DOCKER, &cmd).await
    }

    /// `docker run --rm --network container:<handle> <image> <command…>`, streamed.
    ///
    /// The throwaway container shares the test container's network namespace,
    /// so services inside it are reachable on localhost.
    pub async fn run_attached(
        &self,
        handle: &ContainerHandle,
        image: &str,
        command: &TestCommand,
    ) -> Result<i32, ExecError> {
        let network = format!("container:{handle}");
        let mut cmd = args(["run", "--rm", "--network", &network, image]);
        cmd.extend(command.argv());

        self.executor.run_streaming(DOCKER, &cmd).await
    }

    /// `docker stop <handle>`.
    pub async fn stop(&self, handle: &ContainerHandle) -> Result<i32, ExecError> {
        self.executor
            .run(DOCKER, &args(["stop", handle.as_str()]))
            .await
    }

    /// `docker rm <handle>`.
    pub async fn remove(&self, handle: &ContainerHandle) -> Result<i32, ExecError> {
        self.executor
            .run(DOCKER, &args(["rm", handle.as_str()]))
            .await
    }

    // ── Host ──

    /// Run a test command directly on the host, streamed.
    pub async fn run_on_host(&self, command: &TestCommand) -> Result<i32, ExecError> {
        self.executor
            .run_streaming(&command.program, &command.args)
            .await
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

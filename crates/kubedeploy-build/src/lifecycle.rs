use kubedeploy_docker::{CommandExecutor, ContainerHandle, DockerClient, ExecError};

/// Stops and (unless kept) removes a test set's container.
pub struct ContainerLifecycle<'a, E: CommandExecutor> {
    docker: &'a DockerClient<E>,
    keep_container: bool,
}

impl<'a, E: CommandExecutor> ContainerLifecycle<'a, E> {
    pub fn new(docker: &'a DockerClient<E>, keep_container: bool) -> Self {
        Self {
            docker,
            keep_container,
        }
    }

    /// Tear down the container behind `handle`; a no-op for an empty handle.
    ///
    /// Consumes the handle so nothing can reference the container afterwards.
    /// Failures are logged and never replace the outcome being reported, and
    /// `rm` is still attempted after a failed `stop`.
    pub async fn teardown(&self, handle: ContainerHandle) {
        if handle.is_empty() {
            return;
        }

        tracing::info!("stopping test container {handle}");
        report("stop", &handle, self.docker.stop(&handle).await);

        if self.keep_container {
            tracing::info!("leaving test container {handle} in place, as requested");
            return;
        }

        tracing::info!("removing test container {handle}");
        report("rm", &handle, self.docker.remove(&handle).await);
    }
}

fn report(action: &str, handle: &ContainerHandle, result: Result<i32, ExecError>) {
    match result {
        Ok(0) => {}
        Ok(exit_code) => {
            tracing::warn!(%handle, exit_code, "docker {action} exited non-zero");
        }
        Err(e) => {
            tracing::warn!(%handle, error = %e, "docker {action} could not run");
        }
    }
}

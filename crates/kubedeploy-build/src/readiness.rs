use kubedeploy_core::RepoConfig;
use std::time::Duration;

/// How long to wait for a test container's service before running tests.
///
/// Isolated from dispatch so a health-polling policy can replace it.
#[allow(async_fn_in_trait)]
pub trait ReadinessWait {
    /// Called once per test set after container setup (also for host-only sets).
    async fn container_started(&self);

    /// Called before every test command.
    async fn before_command(&self);
}

/// Fixed sleeps; the default is 2s at both points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    pub after_start: Duration,
    pub before_command: Duration,
}

impl FixedDelay {
    pub fn new(after_start: Duration, before_command: Duration) -> Self {
        Self {
            after_start,
            before_command,
        }
    }

    /// Delays configured in the `[testing]` section of deploy.toml.
    pub fn from_repo(repo: &RepoConfig) -> Self {
        Self::new(repo.startup_grace, repo.command_grace)
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Duration::from_secs(2), Duration::from_secs(2))
    }
}

impl ReadinessWait for FixedDelay {
    async fn container_started(&self) {
        tokio::time::sleep(self.after_start).await;
    }

    async fn before_command(&self) {
        tokio::time::sleep(self.before_command).await;
    }
}

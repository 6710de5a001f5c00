use kubedeploy_docker::ExecError;

/// Fatal pipeline conditions. Each one ends the run with a non-zero exit.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    // ── Environment ──
    #[error("not logged into docker registry {registry} — you won't be able to push; run: docker login {registry}")]
    NotLoggedIn { registry: String },

    // ── Preconditions ──
    #[error(
        "uncommitted changes in the working tree; commit or stash before deploying to production, \
         or override with --override-dirty-workdir"
    )]
    DirtyWorkdir,

    // ── Build ──
    #[error("docker build of {image} failed with exit code {exit_code}")]
    BuildFailed { image: String, exit_code: i32 },

    #[error("failed to run docker build")]
    BuildExec { source: ExecError },

    // ── Tests ──
    #[error("test set '{test_set}': test container failed to start (exit code {exit_code})")]
    ContainerStart { test_set: String, exit_code: i32 },

    #[error("test set '{test_set}': `{command}` failed with exit code {exit_code}")]
    TestFailed {
        test_set: String,
        command: String,
        exit_code: i32,
    },

    #[error("test set '{test_set}': could not run command")]
    TestExec { test_set: String, source: ExecError },

    // ── Tag / push ──
    #[error("docker tag {image} {full_path} failed with exit code {exit_code}")]
    TagFailed {
        image: String,
        full_path: String,
        exit_code: i32,
    },

    #[error("docker push {full_path} failed with exit code {exit_code}")]
    PushFailed { full_path: String, exit_code: i32 },

    #[error("failed to run docker {action}")]
    DockerExec {
        action: &'static str,
        source: ExecError,
    },

    #[error("failed to read push confirmation")]
    Prompt { source: std::io::Error },
}

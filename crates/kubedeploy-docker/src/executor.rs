use std::process::{ExitStatus, Stdio};

/// Exit code plus captured stdout of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
    pub stdout: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Abstraction over subprocess execution for testability.
///
/// Every call blocks the pipeline until the child exits; there is no timeout.
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor: Send + Sync {
    /// Run a command, discarding its output, and return the exit code.
    async fn run(&self, program: &str, args: &[String]) -> Result<i32, ExecError>;

    /// Run a command with stdout/stderr shown live, and return the exit code.
    async fn run_streaming(&self, program: &str, args: &[String]) -> Result<i32, ExecError>;

    /// Run a command, capturing stdout (stderr is shown live).
    async fn run_capturing(&self, program: &str, args: &[String])
    -> Result<CommandResult, ExecError>;
}

/// Real executor backed by `tokio::process`.
pub struct RealExecutor;

impl CommandExecutor for RealExecutor {
    async fn run(&self, program: &str, args: &[String]) -> Result<i32, ExecError> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ExecError::spawn(program, e))?;

        if !output.status.success() {
            tracing::debug!(
                program,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "command exited with {}",
                output.status
            );
        }
        Ok(exit_code(output.status))
    }

    async fn run_streaming(&self, program: &str, args: &[String]) -> Result<i32, ExecError> {
        let status = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ExecError::spawn(program, e))?;

        Ok(exit_code(status))
    }

    async fn run_capturing(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<CommandResult, ExecError> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| ExecError::spawn(program, e))?;

        Ok(CommandResult {
            exit_code: exit_code(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Killed-by-signal maps to -1.
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

impl ExecError {
    fn spawn(program: &str, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.to_owned(),
            source,
        }
    }
}

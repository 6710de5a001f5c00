use crate::error::PipelineError;
use kubedeploy_docker::{CommandExecutor, DockerClient};
use std::io::{BufRead, Write};

/// What happened at the end of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Built, tested and tagged; pushing was not part of the run.
    Tested,
    Pushed,
    /// The operator answered the push prompt with anything but `y`.
    PushDeclined,
}

/// Pushes the tagged image, optionally after asking the operator.
pub struct PushGate<'a, E: CommandExecutor> {
    docker: &'a DockerClient<E>,
    full_path: &'a str,
}

impl<'a, E: CommandExecutor> PushGate<'a, E> {
    pub fn new(docker: &'a DockerClient<E>, full_path: &'a str) -> Self {
        Self { docker, full_path }
    }

    /// Prompt on `output`, read one line from `input`, push only on `y`/`Y`.
    pub async fn ask<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<PipelineOutcome, PipelineError> {
        write!(
            output,
            "All tests passed! Push {} to the registry now?\n\
             Press 'y' to push, anything else to exit.\n>>> ",
            self.full_path
        )
        .and_then(|()| output.flush())
        .map_err(|e| PipelineError::Prompt { source: e })?;

        let mut answer = String::new();
        input
            .read_line(&mut answer)
            .map_err(|e| PipelineError::Prompt { source: e })?;

        if !is_affirmative(&answer) {
            tracing::info!("not pushing {}", self.full_path);
            return Ok(PipelineOutcome::PushDeclined);
        }
        self.force().await
    }

    /// Push without asking.
    pub async fn force(&self) -> Result<PipelineOutcome, PipelineError> {
        tracing::info!("pushing {}", self.full_path);

        let exit_code = self
            .docker
            .push(self.full_path)
            .await
            .map_err(|e| PipelineError::DockerExec {
                action: "push",
                source: e,
            })?;

        if exit_code != 0 {
            return Err(PipelineError::PushFailed {
                full_path: self.full_path.to_owned(),
                exit_code,
            });
        }
        Ok(PipelineOutcome::Pushed)
    }
}

/// Exactly `y` or `Y`, ignoring the line terminator.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim_end_matches(['\n', '\r']), "y" | "Y")
}

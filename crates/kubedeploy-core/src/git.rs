use std::path::{Path, PathBuf};
use std::process::Command;

/// Branch and commit of the working tree being deployed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    pub branch: String,
    pub sha: String,
}

impl GitInfo {
    pub fn new(branch: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            sha: sha.into(),
        }
    }

    /// Read the current branch and short HEAD hash from git.
    pub fn discover(dir: &Path) -> crate::Result<Self> {
        let branch = git_output(dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;
        let sha = git_output(dir, &["rev-parse", "--short", "HEAD"])?;
        tracing::debug!(%branch, %sha, "discovered git metadata");
        Ok(Self { branch, sha })
    }

    /// Branch name reduced to characters valid in an image tag.
    pub fn sanitized_branch(&self) -> String {
        self.branch
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }

    /// Image tag: `<branch>-<sha>`.
    pub fn image_tag(&self) -> String {
        format!("{}-{}", self.sanitized_branch(), self.sha)
    }
}

fn git_output(dir: &Path, args: &[&str]) -> crate::Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| crate::Error::GitCommand {
            dir: PathBuf::from(dir),
            source: e,
        })?;

    if !output.status.success() {
        return Err(crate::Error::GitFailed {
            dir: PathBuf::from(dir),
            args: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}

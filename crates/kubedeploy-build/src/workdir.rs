use kubedeploy_docker::CommandExecutor;
use std::path::Path;

/// Decides whether the source tree is clean enough to build for production.
pub struct WorkingDirectoryGate<'a, E: CommandExecutor> {
    executor: &'a E,
    dir: &'a Path,
    override_dirty: bool,
}

impl<'a, E: CommandExecutor> WorkingDirectoryGate<'a, E> {
    pub fn new(executor: &'a E, dir: &'a Path, override_dirty: bool) -> Self {
        Self {
            executor,
            dir,
            override_dirty,
        }
    }

    /// True when there are neither modified tracked files nor untracked files.
    ///
    /// With the override set, no git command runs at all.
    pub async fn is_clean(&self) -> bool {
        if self.override_dirty {
            tracing::warn!("respecting --override-dirty-workdir, building anyway");
            return true;
        }

        let dir = self.dir.to_string_lossy().into_owned();

        let modified = self
            .executor
            .run(
                "git",
                &git_args(&dir, &["diff-index", "--quiet", "HEAD", "--"]),
            )
            .await;
        let tracked_clean = match modified {
            Ok(code) => code == 0,
            Err(e) => {
                tracing::warn!(error = %e, "could not check for modified files");
                false
            }
        };

        let untracked = self
            .executor
            .run_capturing(
                "git",
                &git_args(&dir, &["ls-files", "--others", "--exclude-standard"]),
            )
            .await;
        let untracked_clean = match untracked {
            Ok(result) => result.success() && result.stdout.trim().is_empty(),
            Err(e) => {
                tracing::warn!(error = %e, "could not check for untracked files");
                false
            }
        };

        tracing::debug!(tracked_clean, untracked_clean, "working tree status");
        tracked_clean && untracked_clean
    }
}

fn git_args(dir: &str, rest: &[&str]) -> Vec<String> {
    let mut args = vec!["-C".to_owned(), dir.to_owned()];
    args.extend(rest.iter().map(|s| (*s).to_owned()));
    args
}

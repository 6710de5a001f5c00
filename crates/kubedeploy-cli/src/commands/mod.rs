mod build;
mod info;

use kubedeploy_core::{DeployManifest, GitInfo, MANIFEST_FILE, RepoConfig};
use std::path::Path;

pub use build::{build, test, test_only};
pub use info::{cluster, name, release};

/// Load deploy.toml and resolve it against the current git checkout.
///
/// The working directory is the docker build context.
fn load_repo(manifest: Option<&Path>) -> anyhow::Result<RepoConfig> {
    let pwd = std::env::current_dir()?;
    let manifest_path = manifest.map_or_else(|| pwd.join(MANIFEST_FILE), Path::to_path_buf);

    let manifest = DeployManifest::load_from(&manifest_path)?;
    let git = GitInfo::discover(&pwd)?;
    let repo = RepoConfig::resolve(&manifest, pwd, &git)?;

    tracing::info!(
        registry = %repo.registry_root,
        app = %repo.app_name,
        branch = %git.branch,
        sha = %git.sha,
        cluster = %repo.cluster_name,
        "using image {}",
        repo.image_full_path
    );
    Ok(repo)
}

use kubedeploy_build::{Pipeline, PipelineOutcome};
use kubedeploy_core::{RepoConfig, RunOptions};
use kubedeploy_docker::{DockerClient, DockerConfigFile};
use std::path::Path;

/// Build, test, tag, then push (or ask to).
pub async fn build(manifest: Option<&Path>, options: RunOptions) -> anyhow::Result<()> {
    let pipeline = pipeline(super::load_repo(manifest)?, options)?;

    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout();
    let outcome = pipeline.make_and_push(&mut input, &mut output).await?;

    println!();
    match outcome {
        PipelineOutcome::PushDeclined => println!("Not pushing. Thanks for building!"),
        PipelineOutcome::Pushed | PipelineOutcome::Tested => {
            println!("Pushed: {}", pipeline.repo().image_full_path);
        }
    }
    Ok(())
}

/// Build, test and tag without pushing.
pub async fn test(manifest: Option<&Path>, options: RunOptions) -> anyhow::Result<()> {
    let pipeline = pipeline(super::load_repo(manifest)?, options)?;
    pipeline.make_and_test().await?;

    println!();
    println!("All tests passed. Tagged: {}", pipeline.repo().image_full_path);
    Ok(())
}

/// Run the test sets against the image that is already built locally.
pub async fn test_only(manifest: Option<&Path>, options: RunOptions) -> anyhow::Result<()> {
    let repo = super::load_repo(manifest)?;
    let pipeline = Pipeline::new(DockerClient::new(), repo, options);
    pipeline.run_tests().await?;

    println!();
    println!("All tests passed.");
    Ok(())
}

fn pipeline(repo: RepoConfig, options: RunOptions) -> anyhow::Result<Pipeline> {
    let credentials = match DockerConfigFile::default_path() {
        Some(path) => DockerConfigFile::load(&path)?,
        None => DockerConfigFile::default(),
    };
    Ok(Pipeline::new(DockerClient::new(), repo, options).with_credentials(credentials))
}

mod commands;

use clap::{Args, Parser, Subcommand};
use kubedeploy_core::RunOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kube-deploy",
    about = "Build, test and push container images for Kubernetes deploys"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    flags: Flags,
}

#[derive(Args)]
struct Flags {
    /// Push the image after tests pass without asking (useful for CI/CD)
    #[arg(long, global = true)]
    force_push_image: bool,
    /// Build for production even with uncommitted changes
    #[arg(long, global = true)]
    override_dirty_workdir: bool,
    /// Stop but don't remove test containers
    #[arg(long, global = true)]
    keep_test_container: bool,
    /// Print extra information, including test container IDs
    #[arg(long, global = true)]
    debug: bool,
    /// Only print warnings and errors
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
    /// Path to deploy.toml (defaults to ./deploy.toml)
    #[arg(long, global = true, value_name = "PATH")]
    manifest: Option<PathBuf>,
}

impl Flags {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            force_push_image: self.force_push_image,
            override_dirty_workdir: self.override_dirty_workdir,
            keep_test_container: self.keep_test_container,
            debug: self.debug,
            quiet: self.quiet,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build, test, tag and push the image
    #[command(visible_alias = "make")]
    Build,
    /// Build, test and tag the image without pushing
    Test,
    /// Run the test sets against an already-built image
    #[command(name = "test-only", visible_alias = "testonly")]
    TestOnly,
    /// Print the registry-qualified image name
    Name,
    /// Print the target cluster
    Cluster,
    /// Print the release name
    Release,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = cli.flags.run_options();

    let default_level = if options.quiet {
        "warn"
    } else if options.debug {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let manifest = cli.flags.manifest.as_deref();

    match cli.command {
        Commands::Build => commands::build(manifest, options).await?,
        Commands::Test => commands::test(manifest, options).await?,
        Commands::TestOnly => commands::test_only(manifest, options).await?,
        Commands::Name => commands::name(manifest)?,
        Commands::Cluster => commands::cluster(manifest)?,
        Commands::Release => commands::release(manifest)?,
    }

    Ok(())
}

//! Subprocess execution and docker CLI operations for kube-deploy.
//!
//! [`CommandExecutor`] is the single seam where processes are spawned;
//! [`DockerClient`] turns pipeline intents into bit-exact docker invocations
//! on top of it.

pub mod auth;
pub mod client;
pub mod container;
pub mod executor;

pub use auth::{AuthError, DockerConfigFile, registry_host};
pub use client::{DOCKER, DockerClient};
pub use container::ContainerHandle;
pub use executor::{CommandExecutor, CommandResult, ExecError, RealExecutor};

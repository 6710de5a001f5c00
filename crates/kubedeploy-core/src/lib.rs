//! Core types and configuration for kube-deploy.
//!
//! This crate defines the `deploy.toml` schema ([`DeployManifest`]), the
//! resolved [`RepoConfig`] consumed by the build pipeline, typed test
//! commands ([`TestCommand`]), operator switches ([`RunOptions`]), and shared
//! error types.

pub mod command;
pub mod config;
pub mod error;
pub mod git;
pub mod options;
pub mod repo;

pub use command::{TestCommand, UnbalancedQuote};
pub use config::{DeployManifest, MANIFEST_FILE, TestSetConfig, TestingConfig};
pub use error::{Error, Result};
pub use git::GitInfo;
pub use options::RunOptions;
pub use repo::{ExecutionMode, PRODUCTION_CLUSTER, RepoConfig, TestSet};

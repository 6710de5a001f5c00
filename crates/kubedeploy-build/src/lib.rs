//! Build, test, tag and push pipeline for kube-deploy.
//!
//! # Pipeline
//!
//! ```text
//! kube-deploy build
//!   1. Login check ── ~/.docker/config.json has credentials for the registry
//!   2. Dirty check ── git diff-index / git ls-files (production only,
//!                     skip with --override-dirty-workdir)
//!   3. Build       ── docker build -t <image> <context>
//!   4. Test sets   ── docker run … → commands → docker stop / rm
//!   5. Tag         ── docker tag <image> <registry path>
//!   6. Push        ── prompt, or --force-push-image
//! ```
//!
//! # Test sets
//!
//! Each `[[tests]]` entry gets at most one container, started from the
//! freshly built image unless the set is `host-only`. Commands then run:
//! - **host-only / on-host**: directly on the host
//! - **in-test-container**: `docker exec` into the test container
//! - **in-external-container** (and the default): a throwaway container of
//!   the auxiliary image sharing the test container's network
//!
//! The first failing command stops everything; the set's container is torn
//! down before the error is returned.

pub mod dispatch;
pub mod error;
pub mod image;
pub mod lifecycle;
pub mod login;
pub mod pipeline;
pub mod push;
pub mod readiness;
pub mod workdir;

pub use dispatch::TestDispatcher;
pub use error::PipelineError;
pub use image::{ImageBuilder, ImageTagger};
pub use lifecycle::ContainerLifecycle;
pub use login::RegistryLoginCheck;
pub use pipeline::Pipeline;
pub use push::{PipelineOutcome, PushGate, is_affirmative};
pub use readiness::{FixedDelay, ReadinessWait};
pub use workdir::WorkingDirectoryGate;

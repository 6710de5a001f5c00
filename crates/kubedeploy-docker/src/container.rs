use std::fmt;

/// Identifier of a started test container, as printed by `docker run -d`.
///
/// Empty when no container was started. Deliberately not `Clone`: a handle
/// belongs to one test set and is consumed by its teardown.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ContainerHandle(String);

impl ContainerHandle {
    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_owned())
    }

    /// Recover the container ID from captured `docker run` stdout.
    ///
    /// The ID is the last non-empty line; anything the image printed before
    /// it (attached runs, pull notices) is ignored.
    pub fn from_run_output(stdout: &str) -> Self {
        stdout
            .lines()
            .map(str::trim)
            .rfind(|line| !line.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

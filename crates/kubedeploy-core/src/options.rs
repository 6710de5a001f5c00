/// Operator switches, resolved once before the pipeline starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Push after tests pass without asking
    pub force_push_image: bool,
    /// Build for production even with uncommitted changes
    pub override_dirty_workdir: bool,
    /// Stop but do not remove test containers
    pub keep_test_container: bool,
    pub debug: bool,
    pub quiet: bool,
}

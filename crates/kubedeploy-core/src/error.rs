use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("test set '{test_set}' has an empty test command at position {index}")]
    EmptyTestCommand { test_set: String, index: usize },

    #[error("unterminated quote in {field} of test set '{test_set}': {value}")]
    UnterminatedQuote {
        test_set: String,
        field: &'static str,
        value: String,
    },

    #[error("`{field}` must not be empty in deploy.toml")]
    MissingField { field: &'static str },

    // ── Git discovery ──
    #[error("failed to run git in {dir}")]
    GitCommand {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("git {args} failed in {dir}: {stderr}")]
    GitFailed {
        dir: PathBuf,
        args: String,
        stderr: String,
    },
}

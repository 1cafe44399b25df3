//! Error types for the Runway deployment tool.

use thiserror::Error;

/// Errors resolving the execution context from flags and the config file.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("{0} is required. Pass the flag or set it in the config file")]
    MissingField(&'static str),

    #[error("invalid runner type '{0}'. Valid values: github-actions, cloud-build, local")]
    InvalidRunner(String),

    #[error("failed to load config file: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid logging configuration: {0}")]
    Logging(String),
}

/// Errors deriving commit hashes and revision tags from CI runner metadata.
#[derive(Debug, Error)]
pub enum NamingError {
    #[error("commit SHA is not set in the CI environment")]
    MissingCommitSha,

    #[error("commit hash is not available for local runs")]
    CommitHashUnavailable,

    #[error("local execution requires the tag flag")]
    ExplicitTagRequired,

    #[error("ref name is not set in the CI environment")]
    MissingRef,

    #[error("invalid tag name '{0}'. Valid values: lowercase alphanumeric, numbers, hyphen")]
    InvalidTagFormat(String),
}

/// Errors from the Cloud Run gateway, either the gcloud CLI or the Admin API.
#[derive(Debug, Error)]
pub enum GcloudError {
    #[error("revision '{0}' was not found")]
    RevisionNotFound(String),

    #[error("service '{0}' was not found")]
    ServiceNotFound(String),

    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error("failed to obtain an access token: {0}")]
    AccessToken(String),

    #[error("Cloud Run Admin API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Cloud Run Admin API returned status {status}: {message}")]
    Api { status: u16, message: String },
}

/// Operation-level errors surfaced by the deploy command service.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("image flag is required")]
    MissingImage,

    #[error("active tag '{0}' not found")]
    ActiveTagNotFound(String),

    #[error("operation timed out after {0} seconds")]
    Timeout(u64),

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error(transparent)]
    Gcloud(#[from] GcloudError),
}

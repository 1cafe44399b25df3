//! Commit hash and revision tag resolution from CI runner metadata.
//!
//! Each CI provider exposes the commit SHA and the ref under its own
//! environment variable; `CiEnv` snapshots them once so resolution stays
//! deterministic and testable. Local runs have neither and must pass
//! explicit names instead.

use crate::context::Runner;
use crate::error::NamingError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Revision suffixes keep the first 7 characters of the commit SHA.
pub const COMMIT_HASH_LENGTH: usize = 7;

pub const ENV_GITHUB_SHA: &str = "GITHUB_SHA";
pub const ENV_GITHUB_REF: &str = "GITHUB_REF";
pub const ENV_CLOUD_BUILD_SHA: &str = "COMMIT_SHA";
pub const ENV_CLOUD_BUILD_REF: &str = "REF_NAME";

/// Character set Cloud Run accepts for revision tags.
static TAG_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9-]+$").expect("tag format pattern")
});

/// Ref characters that must be rewritten before use as a tag.
static REF_SANITIZER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[./: _]").expect("ref sanitizer pattern")
});

/// Immutable snapshot of the CI environment variables the resolvers read.
#[derive(Debug, Clone, Default)]
pub struct CiEnv {
    vars: HashMap<String, String>,
}

impl CiEnv {
    /// Capture the provider variables from the process environment.
    pub fn from_process() -> Self {
        let mut vars = HashMap::new();
        for key in [
            ENV_GITHUB_SHA,
            ENV_GITHUB_REF,
            ENV_CLOUD_BUILD_SHA,
            ENV_CLOUD_BUILD_REF,
        ] {
            if let Ok(value) = std::env::var(key) {
                vars.insert(key.to_string(), value);
            }
        }
        Self { vars }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    fn get(&self, key: &str) -> &str {
        self.vars.get(key).map(String::as_str).unwrap_or("")
    }
}

/// Resolve the short commit hash for the invoking runner.
///
/// CI runners read the provider SHA variable and truncate it; local runs have
/// no derivable commit identity and fail with `CommitHashUnavailable`.
pub fn resolve_commit_hash(runner: Runner, env: &CiEnv) -> Result<String, NamingError> {
    let sha = match runner {
        Runner::GithubActions => env.get(ENV_GITHUB_SHA),
        Runner::CloudBuild => env.get(ENV_CLOUD_BUILD_SHA),
        Runner::Local => return Err(NamingError::CommitHashUnavailable),
    };

    if sha.is_empty() {
        return Err(NamingError::MissingCommitSha);
    }
    Ok(sha.chars().take(COMMIT_HASH_LENGTH).collect())
}

fn runner_ref(runner: Runner, env: &CiEnv) -> Result<&str, NamingError> {
    let ref_name = match runner {
        Runner::GithubActions => env.get(ENV_GITHUB_REF),
        Runner::CloudBuild => env.get(ENV_CLOUD_BUILD_REF),
        Runner::Local => return Err(NamingError::MissingRef),
    };

    if ref_name.is_empty() {
        return Err(NamingError::MissingRef);
    }
    Ok(ref_name)
}

/// Resolve the revision tag for an operation.
///
/// A non-empty explicit tag passes through unchanged. CI runners derive the
/// tag from the ref, rewriting `. / : space _` to `-` and prefixing `tag-`.
/// Local runs must pass an explicit tag.
pub fn resolve_tag_name(
    explicit: &str,
    runner: Runner,
    env: &CiEnv,
) -> Result<String, NamingError> {
    if !explicit.is_empty() {
        return Ok(explicit.to_string());
    }
    if runner == Runner::Local {
        return Err(NamingError::ExplicitTagRequired);
    }

    let ref_name = runner_ref(runner, env)?;
    Ok(format!("tag-{}", REF_SANITIZER.replace_all(ref_name, "-")))
}

/// Reject tags outside the Cloud Run tag character set. Empty is allowed
/// since a tag may still be derived later; validation runs before any remote
/// call so malformed input never reaches the service.
pub fn validate_tag(tag: &str) -> Result<(), NamingError> {
    if !tag.is_empty() && !TAG_FORMAT.is_match(tag) {
        return Err(NamingError::InvalidTagFormat(tag.to_string()));
    }
    Ok(())
}

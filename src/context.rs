//! Execution context: the immutable set of coordinates one invocation runs with.
//!
//! Resolved once at the entry point from CLI flags and the config file, then
//! passed by reference through every call boundary. Nothing reads these values
//! from ambient state.

use crate::config::RunwayConfig;
use crate::error::OptionsError;
use std::fmt;
use std::str::FromStr;

/// Identity of the invoking environment. Selects where commit and ref
/// metadata is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runner {
    GithubActions,
    CloudBuild,
    Local,
}

impl Runner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Runner::GithubActions => "github-actions",
            Runner::CloudBuild => "cloud-build",
            Runner::Local => "local",
        }
    }
}

impl FromStr for Runner {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github-actions" => Ok(Runner::GithubActions),
            "cloud-build" => Ok(Runner::CloudBuild),
            "local" => Ok(Runner::Local),
            other => Err(OptionsError::InvalidRunner(other.to_string())),
        }
    }
}

impl fmt::Display for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global flag values as parsed by the CLI. Empty string means unset.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub project: String,
    pub region: String,
    pub service: String,
    pub runner: String,
}

/// Coordinates for one invocation: project, region, service, and runner.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub project: String,
    pub region: String,
    pub service: String,
    pub runner: Runner,
}

impl ExecutionContext {
    /// Merge flags and config-file values into a validated context.
    /// A non-empty flag wins over the config value for every field.
    pub fn resolve(
        flags: &GlobalOptions,
        config: Option<&RunwayConfig>,
    ) -> Result<Self, OptionsError> {
        let pick = |flag: &str, file: Option<&String>| {
            if flag.is_empty() {
                file.cloned().unwrap_or_default()
            } else {
                flag.to_string()
            }
        };

        let project = pick(&flags.project, config.and_then(|c| c.project.as_ref()));
        let region = pick(&flags.region, config.and_then(|c| c.region.as_ref()));
        let service = pick(&flags.service, config.and_then(|c| c.service.as_ref()));
        let runner = pick(&flags.runner, config.and_then(|c| c.runner.as_ref()));

        if project.is_empty() {
            return Err(OptionsError::MissingField("project"));
        }
        if region.is_empty() {
            return Err(OptionsError::MissingField("region"));
        }
        if service.is_empty() {
            return Err(OptionsError::MissingField("service"));
        }
        if runner.is_empty() {
            return Err(OptionsError::MissingField("runner"));
        }

        Ok(Self {
            project,
            region,
            service,
            runner: Runner::from_str(&runner)?,
        })
    }

    /// Fully qualified Admin API resource name of the service.
    pub fn service_resource_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/services/{}",
            self.project, self.region, self.service
        )
    }

    /// Fully qualified Admin API resource name of one revision.
    pub fn revision_resource_name(&self, revision: &str) -> String {
        format!("{}/revisions/{}", self.service_resource_name(), revision)
    }
}

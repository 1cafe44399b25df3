//! Runway: staged Cloud Run rollouts with revision tags and traffic switching.
//!
//! One invocation resolves exactly one operation: create a revision, manage
//! revision tags, or move live traffic. New revisions never receive traffic
//! until explicitly promoted.
//!
//! Data flows one way: flags/config -> [`context::ExecutionContext`] ->
//! [`naming`] -> [`deploy::DeployCommandService`] -> [`gcloud::CloudRunService`].

pub mod cli;
pub mod config;
pub mod context;
pub mod deploy;
pub mod error;
pub mod gcloud;
pub mod logging;
pub mod naming;

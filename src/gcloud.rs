//! Cloud Run Service Abstraction
//!
//! One trait covers every remote capability the deploy operations need:
//! revision creation, tag assignment and removal, traffic updates, and the
//! read-only lookups that guard them. The production implementation drives
//! the `gcloud` CLI for mutations and the Cloud Run Admin API for reads;
//! tests substitute an in-memory fake.
//!
//! Every method is a single blocking remote call. Nothing here retries or
//! interprets failures beyond distinguishing "not found" from other errors.

use crate::error::GcloudError;
use async_trait::async_trait;
use serde::Deserialize;

pub mod api;
pub mod cli;
pub mod service;

pub use service::GcloudService;

/// Sentinel revision name addressing the most recently created revision.
pub const LATEST_REVISION: &str = "LATEST";

/// Subset of the Admin API revision resource the operations need.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub name: String,
    #[serde(default)]
    pub create_time: Option<String>,
}

/// One entry in a service's traffic table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficTarget {
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub percent: Option<i32>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Remote capability set against one Cloud Run service.
#[async_trait]
pub trait CloudRunService: Send + Sync {
    /// Deploy `image` as a new revision receiving no traffic. The revision
    /// name is suffixed with `commit_hash` when one is present.
    async fn create_revision(&self, image: &str, commit_hash: &str) -> Result<(), GcloudError>;

    /// Deploy `image` as a new revision; with `route_traffic` the new
    /// revision is additionally promoted to 100% of live traffic.
    async fn deploy(
        &self,
        image: &str,
        commit_hash: &str,
        route_traffic: bool,
    ) -> Result<(), GcloudError>;

    /// Bind `tag` to the named revision, or to the newest revision when
    /// [`LATEST_REVISION`] is given.
    async fn create_revision_tag(&self, tag: &str, revision: &str) -> Result<(), GcloudError>;

    /// Unbind one tag.
    async fn remove_revision_tag(&self, tag: &str) -> Result<(), GcloudError>;

    /// Unbind many tags in one call. An empty slice is a no-op.
    async fn remove_revision_tags(&self, tags: &[String]) -> Result<(), GcloudError>;

    /// Route 100% of traffic to the newest revision.
    async fn update_traffic_to_latest(&self) -> Result<(), GcloudError>;

    /// Route 100% of traffic to the named revision; the previous target
    /// drops to 0%.
    async fn update_traffic_to_revision(&self, revision: &str) -> Result<(), GcloudError>;

    /// Route 100% of traffic to the revision a tag is bound to.
    async fn update_traffic_to_tag(&self, tag: &str) -> Result<(), GcloudError>;

    /// Tags currently present in the service's traffic table.
    async fn get_active_revision_tags(&self) -> Result<Vec<String>, GcloudError>;

    /// Existence check for a caller-supplied revision name. Fails with
    /// [`GcloudError::RevisionNotFound`] when the revision is absent.
    async fn get_revision(&self, revision: &str) -> Result<Revision, GcloudError>;
}

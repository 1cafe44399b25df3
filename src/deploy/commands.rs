//! Deploy command service: single entry point per rollout CLI variant.
//!
//! Owns operation sequencing; CLI parses, calls one method per variant. Each
//! method is a short linear state machine against the Cloud Run gateway.
//! Revisions are always created without traffic first; promotion to 100% is
//! a separate explicit step, so an unverified image never receives live
//! traffic implicitly. A failure partway through leaves the completed steps'
//! remote state in place.

use crate::context::ExecutionContext;
use crate::error::{CommandError, NamingError};
use crate::gcloud::{CloudRunService, LATEST_REVISION};
use crate::naming::{self, CiEnv};
use std::sync::Arc;
use tracing::info;

/// Flags for `create-tag`.
#[derive(Debug, Clone, Default)]
pub struct CreateTagRequest {
    pub tag: String,
    pub revision: String,
    pub update_traffic: bool,
    pub remove_tags: bool,
}

/// Flags for `deploy`.
#[derive(Debug, Clone, Default)]
pub struct DeployRequest {
    pub image: String,
    pub tag: String,
    pub create_tag: bool,
    pub remove_tags: bool,
}

pub struct DeployCommandService {
    gcloud: Arc<dyn CloudRunService>,
    ctx: ExecutionContext,
    env: CiEnv,
}

impl DeployCommandService {
    pub fn new(gcloud: Arc<dyn CloudRunService>, ctx: ExecutionContext, env: CiEnv) -> Self {
        Self { gcloud, ctx, env }
    }

    /// Commit hash suffix for a new revision. Local runs have no derivable
    /// commit identity and deploy without a suffix.
    fn optional_commit_hash(&self) -> Result<String, CommandError> {
        match naming::resolve_commit_hash(self.ctx.runner, &self.env) {
            Ok(hash) => Ok(hash),
            Err(NamingError::CommitHashUnavailable) => Ok(String::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Remove every active revision tag except `keep`.
    async fn prune_tags_except(&self, keep: &str) -> Result<(), CommandError> {
        let active = self.gcloud.get_active_revision_tags().await?;
        let doomed: Vec<String> = active.into_iter().filter(|tag| tag != keep).collect();
        self.gcloud.remove_revision_tags(&doomed).await?;
        Ok(())
    }

    /// `create-revision`: deploy an image as a new revision with no traffic.
    pub async fn create_revision(&self, image: &str) -> Result<(), CommandError> {
        if image.is_empty() {
            return Err(CommandError::MissingImage);
        }
        let commit_hash = self.optional_commit_hash()?;

        info!(service = %self.ctx.service, "creating revision without traffic");
        self.gcloud.create_revision(image, &commit_hash).await?;
        Ok(())
    }

    /// `create-tag`: bind a tag to a revision, optionally promoting the tag
    /// and pruning every other active tag.
    pub async fn create_tag(&self, req: &CreateTagRequest) -> Result<(), CommandError> {
        naming::validate_tag(&req.tag)?;
        let tag = naming::resolve_tag_name(&req.tag, self.ctx.runner, &self.env)?;

        if req.revision != LATEST_REVISION {
            self.gcloud.get_revision(&req.revision).await?;
        }

        self.gcloud.create_revision_tag(&tag, &req.revision).await?;

        if req.update_traffic {
            self.gcloud.update_traffic_to_tag(&tag).await?;
        }
        if req.remove_tags {
            self.prune_tags_except(&tag).await?;
        }
        Ok(())
    }

    /// `remove-tag`: unbind one tag.
    pub async fn remove_tag(&self, tag: &str) -> Result<(), CommandError> {
        naming::validate_tag(tag)?;
        let tag = naming::resolve_tag_name(tag, self.ctx.runner, &self.env)?;
        self.gcloud.remove_revision_tag(&tag).await?;
        Ok(())
    }

    /// `deploy`: create a new revision and promote it to live traffic,
    /// optionally tagging it and pruning the other active tags.
    pub async fn deploy(&self, req: &DeployRequest) -> Result<(), CommandError> {
        if req.image.is_empty() {
            return Err(CommandError::MissingImage);
        }
        naming::validate_tag(&req.tag)?;

        let mut tag = req.tag.clone();
        if tag.is_empty() && req.create_tag {
            tag = naming::resolve_tag_name(&tag, self.ctx.runner, &self.env)?;
        }

        let commit_hash = self.optional_commit_hash()?;

        info!(service = %self.ctx.service, image = %req.image, "deploying with traffic");
        self.gcloud.deploy(&req.image, &commit_hash, true).await?;

        if req.create_tag {
            self.gcloud.create_revision_tag(&tag, LATEST_REVISION).await?;
        }
        if req.remove_tags {
            self.prune_tags_except(&tag).await?;
        }
        Ok(())
    }

    /// `sr-deploy`: switch live traffic to a revision. The LATEST sentinel
    /// skips the existence check; a named revision must exist first.
    pub async fn switch_revision(&self, revision: &str) -> Result<(), CommandError> {
        if revision != LATEST_REVISION {
            self.gcloud.get_revision(revision).await?;
        }

        info!(service = %self.ctx.service, revision = %revision, "switching traffic to revision");
        self.gcloud.update_traffic_to_revision(revision).await?;
        Ok(())
    }

    /// `st-deploy`: switch live traffic to an active tag. The tag must be
    /// present in the traffic table before any traffic moves.
    pub async fn switch_tag(&self, tag: &str, remove_tags: bool) -> Result<(), CommandError> {
        naming::validate_tag(tag)?;
        let tag = naming::resolve_tag_name(tag, self.ctx.runner, &self.env)?;

        let active = self.gcloud.get_active_revision_tags().await?;
        if !active.iter().any(|candidate| candidate == &tag) {
            return Err(CommandError::ActiveTagNotFound(tag));
        }

        info!(service = %self.ctx.service, tag = %tag, "switching traffic to tag");
        self.gcloud.update_traffic_to_tag(&tag).await?;

        if remove_tags {
            let doomed: Vec<String> =
                active.into_iter().filter(|candidate| candidate != &tag).collect();
            self.gcloud.remove_revision_tags(&doomed).await?;
        }
        Ok(())
    }
}

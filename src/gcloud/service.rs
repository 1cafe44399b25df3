//! Production Cloud Run adapter.
//!
//! Unifies the two transports behind [`CloudRunService`]: mutations go
//! through the `gcloud` CLI subprocess, read paths through the typed Admin
//! API client. Both operate on the same service coordinates.

use crate::context::ExecutionContext;
use crate::error::GcloudError;
use crate::gcloud::api::RunAdminClient;
use crate::gcloud::cli::GcloudCli;
use crate::gcloud::{CloudRunService, Revision};
use async_trait::async_trait;
use tracing::info;

/// Access token override, useful on runners without a gcloud login.
const ENV_ACCESS_TOKEN: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

pub struct GcloudService {
    ctx: ExecutionContext,
    cli: GcloudCli,
    api: RunAdminClient,
}

impl GcloudService {
    /// Connect using the ambient gcloud credentials. The Admin API token
    /// comes from `GOOGLE_OAUTH_ACCESS_TOKEN` when set, otherwise from
    /// `gcloud auth print-access-token`.
    pub async fn connect(ctx: ExecutionContext) -> Result<Self, GcloudError> {
        let cli = GcloudCli::new(&ctx);
        let token = match std::env::var(ENV_ACCESS_TOKEN) {
            Ok(token) if !token.is_empty() => token,
            _ => cli.access_token().await?,
        };
        let api = RunAdminClient::new(token)?;
        Ok(Self { ctx, cli, api })
    }
}

#[async_trait]
impl CloudRunService for GcloudService {
    async fn create_revision(&self, image: &str, commit_hash: &str) -> Result<(), GcloudError> {
        self.deploy(image, commit_hash, false).await
    }

    async fn deploy(
        &self,
        image: &str,
        commit_hash: &str,
        route_traffic: bool,
    ) -> Result<(), GcloudError> {
        let mut cmd = self.cli.deploy_command();
        cmd.args(["--image", image]);

        if !commit_hash.is_empty() {
            cmd.args(["--revision-suffix", commit_hash]);
        }

        if !route_traffic {
            println!("Deploying without traffic");
            cmd.arg("--no-traffic");
        }

        info!(service = %self.ctx.service, image = %image, "deploying revision");
        self.cli.run(cmd).await?;

        if route_traffic {
            self.update_traffic_to_latest().await?;
        }
        Ok(())
    }

    async fn create_revision_tag(&self, tag: &str, revision: &str) -> Result<(), GcloudError> {
        let assignment = format!("{}={}", tag, revision);
        let mut cmd = self.cli.update_traffic_command();
        cmd.args(["--update-tags", assignment.as_str()]);
        self.cli.run(cmd).await
    }

    async fn remove_revision_tag(&self, tag: &str) -> Result<(), GcloudError> {
        let mut cmd = self.cli.update_traffic_command();
        cmd.args(["--remove-tags", tag]);
        self.cli.run(cmd).await
    }

    async fn remove_revision_tags(&self, tags: &[String]) -> Result<(), GcloudError> {
        if tags.is_empty() {
            return Ok(());
        }
        let joined = tags.join(",");
        let mut cmd = self.cli.update_traffic_command();
        cmd.args(["--remove-tags", joined.as_str()]);
        self.cli.run(cmd).await
    }

    async fn update_traffic_to_latest(&self) -> Result<(), GcloudError> {
        let mut cmd = self.cli.update_traffic_command();
        cmd.arg("--to-latest");
        self.cli.run(cmd).await
    }

    async fn update_traffic_to_revision(&self, revision: &str) -> Result<(), GcloudError> {
        let assignment = format!("{}=100", revision);
        let mut cmd = self.cli.update_traffic_command();
        cmd.args(["--to-revisions", assignment.as_str()]);
        self.cli.run(cmd).await
    }

    async fn update_traffic_to_tag(&self, tag: &str) -> Result<(), GcloudError> {
        let assignment = format!("{}=100", tag);
        let mut cmd = self.cli.update_traffic_command();
        cmd.args(["--to-tags", assignment.as_str()]);
        self.cli.run(cmd).await
    }

    async fn get_active_revision_tags(&self) -> Result<Vec<String>, GcloudError> {
        let service = self.api.get_service(&self.ctx).await?;
        Ok(service
            .traffic
            .into_iter()
            .filter_map(|target| target.tag)
            .filter(|tag| !tag.is_empty())
            .collect())
    }

    async fn get_revision(&self, revision: &str) -> Result<Revision, GcloudError> {
        self.api.get_revision(&self.ctx, revision).await
    }
}

//! CLI route: single route table and run context. Dispatches to the deploy
//! command service.

use crate::cli::parse::{Cli, Commands};
use crate::config::ConfigLoader;
use crate::context::{ExecutionContext, GlobalOptions};
use crate::deploy::{CreateTagRequest, DeployCommandService, DeployRequest};
use crate::error::CommandError;
use crate::gcloud::GcloudService;
use crate::naming::CiEnv;
use std::sync::Arc;
use tracing::info;

/// Runtime context for one CLI invocation: the resolved execution context
/// and the Cloud Run gateway, built once at the entry point and passed
/// explicitly into the command service.
pub struct RunContext {
    service: DeployCommandService,
}

impl RunContext {
    /// Resolve flags and config file into an execution context and connect
    /// the gateway. An explicit `--file` must exist; the default config file
    /// is optional.
    pub async fn new(cli: &Cli) -> Result<Self, CommandError> {
        let config = match cli.file {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load_default()?,
        };

        let flags = GlobalOptions {
            project: cli.project.clone(),
            region: cli.region.clone(),
            service: cli.service.clone(),
            runner: cli.runner.clone(),
        };
        let ctx = ExecutionContext::resolve(&flags, Some(&config))?;
        info!(
            project = %ctx.project,
            region = %ctx.region,
            service = %ctx.service,
            runner = %ctx.runner,
            "execution context resolved"
        );

        let gcloud = Arc::new(GcloudService::connect(ctx.clone()).await?);
        let service = DeployCommandService::new(gcloud, ctx, CiEnv::from_process());
        Ok(Self { service })
    }

    /// Execute one parsed command.
    pub async fn execute(&self, command: &Commands) -> Result<(), CommandError> {
        match command {
            Commands::CreateRevision { image } => self.service.create_revision(image).await,
            Commands::CreateTag {
                tag,
                revision,
                update_traffic,
                remove_tags,
            } => {
                self.service
                    .create_tag(&CreateTagRequest {
                        tag: tag.clone(),
                        revision: revision.clone(),
                        update_traffic: *update_traffic,
                        remove_tags: *remove_tags,
                    })
                    .await
            }
            Commands::RemoveTag { tag } => self.service.remove_tag(tag).await,
            Commands::Deploy {
                image,
                tag,
                create_tag,
                remove_tags,
            } => {
                self.service
                    .deploy(&DeployRequest {
                        image: image.clone(),
                        tag: tag.clone(),
                        create_tag: *create_tag,
                        remove_tags: *remove_tags,
                    })
                    .await
            }
            Commands::SrDeploy { revision } => self.service.switch_revision(revision).await,
            Commands::StDeploy { tag, remove_tags } => {
                self.service.switch_tag(tag, *remove_tags).await
            }
        }
    }
}

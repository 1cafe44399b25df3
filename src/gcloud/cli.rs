//! gcloud CLI subprocess transport.
//!
//! Mutating operations shell out to `gcloud run ...` with the target
//! service's coordinates preset. Subprocess stdout/stderr stay attached to
//! the terminal so operators see gcloud's own progress output; processes are
//! killed when the invocation deadline drops them.

use crate::context::ExecutionContext;
use crate::error::GcloudError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

const GCLOUD_BIN: &str = "gcloud";

/// Builds and runs `gcloud` invocations for one service.
#[derive(Debug, Clone)]
pub struct GcloudCli {
    project: String,
    region: String,
    service: String,
}

impl GcloudCli {
    pub fn new(ctx: &ExecutionContext) -> Self {
        Self {
            project: ctx.project.clone(),
            region: ctx.region.clone(),
            service: ctx.service.clone(),
        }
    }

    /// `gcloud run deploy` with service, project, and region preset.
    pub fn deploy_command(&self) -> Command {
        let mut cmd = Command::new(GCLOUD_BIN);
        cmd.args([
            "run",
            "deploy",
            self.service.as_str(),
            "--project",
            self.project.as_str(),
            "--region",
            self.region.as_str(),
        ]);
        cmd
    }

    /// `gcloud run services update-traffic` with service, project, and
    /// region preset.
    pub fn update_traffic_command(&self) -> Command {
        let mut cmd = Command::new(GCLOUD_BIN);
        cmd.args([
            "run",
            "services",
            "update-traffic",
            self.service.as_str(),
            "--region",
            self.region.as_str(),
            "--project",
            self.project.as_str(),
        ]);
        cmd
    }

    /// Run a prepared command to completion. A nonzero exit is an error;
    /// gcloud's own stderr already carries the details.
    pub async fn run(&self, mut cmd: Command) -> Result<(), GcloudError> {
        cmd.kill_on_drop(true);
        let command = command_line(&cmd);
        debug!(command = %command, "running gcloud");

        let status = cmd
            .status()
            .await
            .map_err(|source| GcloudError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(GcloudError::CommandFailed { command, status });
        }
        Ok(())
    }

    /// Fetch a bearer token from the ambient gcloud credentials.
    pub async fn access_token(&self) -> Result<String, GcloudError> {
        let mut cmd = Command::new(GCLOUD_BIN);
        cmd.args(["auth", "print-access-token"]);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::null());
        cmd.kill_on_drop(true);
        let command = command_line(&cmd);
        debug!(command = %command, "requesting access token");

        let output = cmd
            .output()
            .await
            .map_err(|source| GcloudError::Spawn { command, source })?;

        if !output.status.success() {
            return Err(GcloudError::AccessToken(format!(
                "gcloud auth print-access-token exited with {}",
                output.status
            )));
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err(GcloudError::AccessToken(
                "gcloud auth print-access-token returned no token".to_string(),
            ));
        }
        Ok(token)
    }
}

fn command_line(cmd: &Command) -> String {
    let std_cmd = cmd.as_std();
    std::iter::once(std_cmd.get_program())
        .chain(std_cmd.get_args())
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

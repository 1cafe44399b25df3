//! Typed Cloud Run Admin API v2 client.
//!
//! Covers the read paths only: fetching the service (for its traffic table)
//! and fetching a single revision as an existence check. Mutations stay on
//! the gcloud CLI transport.

use crate::context::ExecutionContext;
use crate::error::GcloudError;
use crate::gcloud::{Revision, TrafficTarget};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const DEFAULT_ENDPOINT: &str = "https://run.googleapis.com";

/// Subset of the Admin API service resource the operations need.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub traffic: Vec<TrafficTarget>,
}

/// Read-only Admin API client authenticated with a bearer token.
pub struct RunAdminClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl RunAdminClient {
    pub fn new(token: String) -> Result<Self, GcloudError> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token,
        })
    }

    /// Fetch the service resource, including its traffic table.
    pub async fn get_service(&self, ctx: &ExecutionContext) -> Result<Service, GcloudError> {
        let name = ctx.service_resource_name();
        self.get_resource(&name)
            .await?
            .ok_or_else(|| GcloudError::ServiceNotFound(name))
    }

    /// Fetch one revision. Absence maps to `RevisionNotFound`.
    pub async fn get_revision(
        &self,
        ctx: &ExecutionContext,
        revision: &str,
    ) -> Result<Revision, GcloudError> {
        self.get_resource(&ctx.revision_resource_name(revision))
            .await?
            .ok_or_else(|| GcloudError::RevisionNotFound(revision.to_string()))
    }

    /// GET one resource by its fully qualified name. A 404 is `None`; any
    /// other non-success status is an API error with the response body.
    async fn get_resource<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<Option<T>, GcloudError> {
        let url = format!("{}/v2/{}", self.endpoint, name);
        debug!(url = %url, "admin api request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GcloudError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        Ok(Some(response.json::<T>().await?))
    }
}

/// Pull the human-readable message out of a Google API error body, falling
/// back to the raw body when it is not the expected JSON shape.
fn api_error_message(body: String) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }
    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(&body)
        .map(|parsed| parsed.error.message)
        .unwrap_or(body)
}

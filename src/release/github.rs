//! GitHub GraphQL API release lookup

use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::{AccessToken, RepositorySlug, RunConfig};
use crate::error::ReleaseError;
use crate::release::source::ReleaseSource;
use crate::release::types::{
    GraphQlRequest, GraphQlResponse, ReleaseInfo, RepositoryData, RepositoryVariables,
};

const USER_AGENT: &str = concat!("check-outdated/", env!("CARGO_PKG_VERSION"));

const OPERATION_NAME: &str = "Q";

const LATEST_RELEASE_QUERY: &str = r#"
query Q($owner: String!, $name: String!) {
  repository(name: $name, owner: $owner, followRenames: true) {
    latestRelease {
      createdAt
      id
      name
      tagName
      publishedAt
    }
  }
}
"#;

/// Release source backed by the GitHub GraphQL API
pub struct GitHubReleases {
    client: reqwest::Client,
    endpoint: String,
    token: AccessToken,
}

impl GitHubReleases {
    /// Creates a client for `endpoint` with a per-request timeout
    pub fn new(
        endpoint: &str,
        token: AccessToken,
        timeout: Duration,
    ) -> Result<Self, ReleaseError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            token,
        })
    }

    pub fn from_config(config: &RunConfig) -> Result<Self, ReleaseError> {
        Self::new(&config.graphql_url, config.token.clone(), config.timeout)
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleases {
    async fn latest_release(
        &self,
        repository: &RepositorySlug,
    ) -> Result<ReleaseInfo, ReleaseError> {
        let variables = RepositoryVariables {
            owner: &repository.owner,
            name: &repository.name,
        };
        let body = GraphQlRequest {
            query: LATEST_RELEASE_QUERY,
            variables,
            operation_name: OPERATION_NAME,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.token.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(
                "Response was not successful ({}), vars: {:?}",
                status, body.variables
            );
            error!("{}", text);
            return Err(ReleaseError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: GraphQlResponse<RepositoryData> =
            serde_json::from_str(&text).map_err(|e| {
                warn!("Failed to parse GraphQL response: {}", e);
                ReleaseError::InvalidResponse(e.to_string())
            })?;

        if !envelope.errors.is_empty() {
            let messages = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ReleaseError::GraphQl(messages));
        }

        let data = envelope
            .data
            .ok_or_else(|| ReleaseError::InvalidResponse("missing `data` field".to_string()))?;

        let release = data
            .repository
            .and_then(|node| node.latest_release)
            .ok_or_else(|| ReleaseError::NoRelease(repository.to_string()))?;

        info!("recv release: {:?}", release);
        Ok(release)
    }
}

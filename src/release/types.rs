use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest release of the upstream repository
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
    pub id: String,
    pub name: Option<String>,
    pub tag_name: String,
    pub published_at: DateTime<Utc>,
}

/// Request body for a GraphQL POST
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
    pub operation_name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RepositoryVariables<'a> {
    pub owner: &'a str,
    pub name: &'a str,
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryData {
    pub repository: Option<LatestReleaseNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LatestReleaseNode {
    pub latest_release: Option<ReleaseInfo>,
}

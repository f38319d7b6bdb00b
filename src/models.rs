use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An application tracked by the management service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Application {
    pub metadata: AppMetadata,
    #[serde(default)]
    pub status: AppStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppMetadata {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AppStatus {
    /// Past deployments, oldest first. Entries may have been purged, so IDs
    /// are not contiguous and never equal array position.
    #[serde(default)]
    pub history: Vec<RevisionHistory>,
}

/// One past deployment of an application.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RevisionHistory {
    /// Service-assigned ID, unique within the application's history.
    pub id: i64,
    pub source: ApplicationSource,
    #[serde(rename = "deployedAt", skip_serializing_if = "Option::is_none")]
    pub deployed_at: Option<DateTime<Utc>>,
}

/// Where and how the deployed manifests were generated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ApplicationSource {
    #[serde(rename = "repoURL")]
    pub repo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "targetRevision", skip_serializing_if = "Option::is_none")]
    pub target_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
}

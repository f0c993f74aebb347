use std::path::PathBuf;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the data directory is reachable, "degraded" otherwise
    pub status: String,
    /// Whether the data directory currently exists
    pub storage_ready: bool,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    data_dir: PathBuf,
}

impl Api {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports whether the service is up and its data directory is present.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let storage_ready = tokio::fs::try_exists(&self.data_dir)
            .await
            .unwrap_or(false);

        Json(HealthCheckResponse {
            status: if storage_ready { "healthy" } else { "degraded" }.to_string(),
            storage_ready,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

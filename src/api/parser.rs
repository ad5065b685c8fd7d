//! Response body validation for the backend endpoints.

use super::error::ApiError;
use super::types::{ClusterSnapshot, ClustersEnvelope, SystemStatusSnapshot};

/// Parse a `/api/v1/clusters/` body.
///
/// Accepts the bare JSON array as well as the `{"status": ..., "data": [...]}`
/// envelope. An envelope whose status is not `success` is reported as a
/// parse error carrying the backend's message.
pub fn parse_clusters(body: &str) -> Result<Vec<ClusterSnapshot>, ApiError> {
    // Pick the shape from the first token so serde reports the failing field
    if body.trim_start().starts_with('{') {
        let ClustersEnvelope {
            status,
            data,
            message,
        } = serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))?;

        if status != "success" {
            return Err(ApiError::ParseError(format!(
                "backend reported {}: {}",
                status,
                message.unwrap_or_else(|| "no message".to_string())
            )));
        }
        data.ok_or_else(|| ApiError::ParseError("envelope has no data".to_string()))
    } else {
        serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

/// Parse a `/api/v1/system/status` body.
pub fn parse_system_status(body: &str) -> Result<SystemStatusSnapshot, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))
}

//! Data Transfer Objects - response types owned by the HTTP boundary.

use serde::{Deserialize, Serialize};

/// Response of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// API version string.
    pub version: String,
    /// RFC 3339 timestamp of the response.
    pub timestamp: String,
    /// Seconds since the process started.
    pub uptime_seconds: f64,
    /// Number of posts being served.
    pub posts: usize,
}

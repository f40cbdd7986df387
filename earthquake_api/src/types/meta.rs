use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of the count method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResponse {
    /// Number of events matching the query.
    pub count: u32,
    /// Largest `limit` the service accepts in a single request.
    pub max_allowed: u32,
}

/// The `metadata` block of a GeoJSON feature collection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub generated: DateTime<Utc>,
    pub url: String,
    pub title: String,
    pub status: u16,
    pub api: String,
    #[serde(default)]
    pub count: u32,
}

/// Full service version, as returned by the version method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub version: String,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.version)
    }
}

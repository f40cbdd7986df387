use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meta::Metadata;

/// GeoJSON feature collection returned by the query method.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub metadata: Metadata,
    #[serde(default)]
    pub features: Vec<Feature>,
    /// `[min_lon, min_lat, min_depth, max_lon, max_lat, max_depth]`, absent
    /// when the collection is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
}

/// One seismic event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub properties: Properties,
    pub geometry: Geometry,
}

impl Feature {
    pub fn longitude(&self) -> Option<f64> {
        self.geometry.coordinates.first().copied()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.geometry.coordinates.get(1).copied()
    }

    /// Depth in kilometres.
    pub fn depth(&self) -> Option<f64> {
        self.geometry.coordinates.get(2).copied()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude, depth]`.
    pub coordinates: Vec<f64>,
}

/// Event properties. Most numeric fields are `null` until the relevant
/// product (DYFI, ShakeMap, PAGER, ...) has been published.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    pub mag: Option<f64>,
    pub place: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub tz: Option<i32>,
    pub url: String,
    #[serde(default)]
    pub detail: Option<String>,
    pub felt: Option<u32>,
    pub cdi: Option<f64>,
    pub mmi: Option<f64>,
    pub alert: Option<String>,
    pub status: String,
    #[serde(default)]
    pub tsunami: u8,
    pub sig: i32,
    pub net: String,
    pub code: String,
    pub ids: String,
    pub sources: String,
    pub types: String,
    pub nst: Option<u32>,
    pub dmin: Option<f64>,
    pub rms: Option<f64>,
    pub gap: Option<f64>,
    pub mag_type: Option<String>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
}

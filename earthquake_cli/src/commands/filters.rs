//! Event filter flags shared by `count`, `query` and `fetch`.

use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use usgs_earthquake::{AlertLevel, EventQuery, ReviewStatus};

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Events on or after this time (RFC 3339 or YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_time)]
    pub start: Option<DateTime<Utc>>,

    /// Events on or before this time (RFC 3339 or YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_time)]
    pub end: Option<DateTime<Utc>>,

    /// Events updated after this time (RFC 3339 or YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_time)]
    pub updated_after: Option<DateTime<Utc>>,

    /// Minimum magnitude
    #[arg(long, allow_hyphen_values = true)]
    pub min_mag: Option<f64>,

    /// Maximum magnitude
    #[arg(long, allow_hyphen_values = true)]
    pub max_mag: Option<f64>,

    /// Minimum depth in km
    #[arg(long, allow_hyphen_values = true)]
    pub min_depth: Option<f64>,

    /// Maximum depth in km
    #[arg(long, allow_hyphen_values = true)]
    pub max_depth: Option<f64>,

    /// Southern edge of the search rectangle
    #[arg(long, allow_hyphen_values = true)]
    pub min_lat: Option<f64>,

    /// Northern edge of the search rectangle
    #[arg(long, allow_hyphen_values = true)]
    pub max_lat: Option<f64>,

    /// Western edge of the search rectangle
    #[arg(long, allow_hyphen_values = true)]
    pub min_lon: Option<f64>,

    /// Eastern edge of the search rectangle
    #[arg(long, allow_hyphen_values = true)]
    pub max_lon: Option<f64>,

    /// Latitude of the search circle's center
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude of the search circle's center
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Radius of the search circle in km
    #[arg(long)]
    pub max_radius_km: Option<f64>,

    /// Catalog name (e.g. us, ci, ak)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Contributor name (e.g. us, ci, ak)
    #[arg(long)]
    pub contributor: Option<String>,

    /// Event type (e.g. earthquake, "quarry blast")
    #[arg(long)]
    pub event_type: Option<String>,

    /// PAGER alert level: green, yellow, orange, red
    #[arg(long)]
    pub alert_level: Option<AlertLevel>,

    /// Review status: all, automatic, reviewed
    #[arg(long)]
    pub review_status: Option<ReviewStatus>,
}

impl FilterArgs {
    pub fn to_query(&self) -> Result<EventQuery> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                bail!("--start ({}) is after --end ({})", start, end);
            }
        }
        if let (Some(min), Some(max)) = (self.min_mag, self.max_mag) {
            if min > max {
                bail!("--min-mag ({}) is greater than --max-mag ({})", min, max);
            }
        }
        if self.max_radius_km.is_some() && self.lat.is_none() {
            bail!("--max-radius-km needs --lat and --lon");
        }

        let mut query = EventQuery::new();
        query.start_time = self.start;
        query.end_time = self.end;
        query.updated_after = self.updated_after;
        query.min_magnitude = self.min_mag;
        query.max_magnitude = self.max_mag;
        query.min_depth = self.min_depth;
        query.max_depth = self.max_depth;
        query.min_latitude = self.min_lat;
        query.max_latitude = self.max_lat;
        query.min_longitude = self.min_lon;
        query.max_longitude = self.max_lon;
        query.latitude = self.lat;
        query.longitude = self.lon;
        query.max_radius_km = self.max_radius_km;
        query.alert_level = self.alert_level;
        query.review_status = self.review_status;

        if let Some(ref catalog) = self.catalog {
            query = query.with_catalog(catalog.as_str());
        }
        if let Some(ref contributor) = self.contributor {
            query = query.with_contributor(contributor.as_str());
        }
        if let Some(ref event_type) = self.event_type {
            query = query.with_event_type(event_type.as_str());
        }

        Ok(query)
    }
}

/// Accepts a full RFC 3339 timestamp or a bare date, read as midnight UTC.
pub fn parse_time(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Ok(t.with_timezone(&Utc));
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()),
        Err(_) => bail!(
            "invalid time {:?}: expected RFC 3339 (2024-01-31T12:00:00Z) or YYYY-MM-DD",
            value
        ),
    }
}

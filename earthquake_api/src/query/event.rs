//! The event query: every parameter accepted by the count and query methods,
//! and its canonical query-string encoding.

use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;

use crate::types::{Catalog, Contributor, EventType, ProductType};

use super::common::{AlertLevel, OrderBy, ReviewStatus};

/// The only response format this crate decodes for count and query.
pub const FORMAT_GEOJSON: &str = "geojson";

/// Parameters for the count and query methods.
///
/// Every field starts unset and unset fields are left out of the encoded
/// query string. Numeric filters are `Option<f64>` so that `Some(0.0)` (the
/// equator, a zero-depth bound) is still sent. Integer fields treat `Some(0)`
/// the same as `None`.
///
/// No validation is done here: rectangle and circle searches may be mixed and
/// mutually exclusive parameters may both be set; the service reports those
/// conflicts.
#[derive(Clone, Debug, PartialEq)]
pub struct EventQuery {
    format: &'static str,

    /// Events on or after this time.
    pub start_time: Option<DateTime<Utc>>,
    /// Events on or before this time.
    pub end_time: Option<DateTime<Utc>>,
    /// Events updated after this time.
    pub updated_after: Option<DateTime<Utc>>,

    // Rectangle search, degrees.
    pub min_latitude: Option<f64>,
    pub min_longitude: Option<f64>,
    pub max_latitude: Option<f64>,
    pub max_longitude: Option<f64>,

    // Circle search.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Radius in degrees. Exclusive with `max_radius_km`.
    pub max_radius: Option<f64>,
    /// Radius in kilometres. Exclusive with `max_radius`.
    pub max_radius_km: Option<f64>,

    pub catalog: Option<Catalog>,
    pub contributor: Option<Contributor>,
    pub event_id: Option<String>,
    pub include_all_magnitudes: bool,
    pub include_all_origins: bool,
    pub include_deleted: bool,
    pub include_superseded: bool,
    /// Results per request, at most the service's `maxAllowed`.
    pub limit: Option<u32>,
    pub max_depth: Option<f64>,
    pub max_magnitude: Option<f64>,
    pub min_depth: Option<f64>,
    pub min_magnitude: Option<f64>,
    /// 1-based index of the first result.
    pub offset: Option<u32>,
    pub order_by: Option<OrderBy>,

    /// Upper bound on the records fetched by a paged query. Never sent.
    pub total_results: Option<u32>,

    // Extensions.
    pub alert_level: Option<AlertLevel>,
    pub event_type: Option<EventType>,
    pub max_cdi: Option<f64>,
    pub max_gap: Option<f64>,
    pub max_mmi: Option<f64>,
    pub max_sig: Option<u32>,
    pub min_cdi: Option<f64>,
    pub min_felt: Option<u32>,
    pub min_gap: Option<f64>,
    pub min_sig: Option<u32>,
    pub product_type: Option<ProductType>,
    pub product_code: Option<String>,
    pub review_status: Option<ReviewStatus>,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQuery {
    /// Creates a query with every filter unset.
    pub fn new() -> Self {
        Self {
            format: FORMAT_GEOJSON,
            start_time: None,
            end_time: None,
            updated_after: None,
            min_latitude: None,
            min_longitude: None,
            max_latitude: None,
            max_longitude: None,
            latitude: None,
            longitude: None,
            max_radius: None,
            max_radius_km: None,
            catalog: None,
            contributor: None,
            event_id: None,
            include_all_magnitudes: false,
            include_all_origins: false,
            include_deleted: false,
            include_superseded: false,
            limit: None,
            max_depth: None,
            max_magnitude: None,
            min_depth: None,
            min_magnitude: None,
            offset: None,
            order_by: None,
            total_results: None,
            alert_level: None,
            event_type: None,
            max_cdi: None,
            max_gap: None,
            max_mmi: None,
            max_sig: None,
            min_cdi: None,
            min_felt: None,
            min_gap: None,
            min_sig: None,
            product_type: None,
            product_code: None,
            review_status: None,
        }
    }

    /// Response format requested from the service. Always `geojson`.
    pub fn format(&self) -> &str {
        self.format
    }

    /// Encodes the set parameters as a query string with keys in ascending
    /// order. Identical queries always encode to identical strings.
    pub fn encode(&self) -> String {
        let mut pairs = self.pairs();
        pairs.sort_by_key(|(key, _)| *key);
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("format", self.format.to_string())];

        let times = [
            ("starttime", self.start_time),
            ("endtime", self.end_time),
            ("updatedafter", self.updated_after),
        ];
        for (key, time) in times {
            if let Some(time) = time {
                pairs.push((key, time.to_rfc3339_opts(SecondsFormat::Secs, true)));
            }
        }

        let decimals = [
            ("minlatitude", self.min_latitude),
            ("minlongitude", self.min_longitude),
            ("maxlatitude", self.max_latitude),
            ("maxlongitude", self.max_longitude),
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("maxradius", self.max_radius),
            ("maxradiuskm", self.max_radius_km),
            ("maxdepth", self.max_depth),
            ("maxmagnitude", self.max_magnitude),
            ("mindepth", self.min_depth),
            ("minmagnitude", self.min_magnitude),
            ("maxcdi", self.max_cdi),
            ("maxgap", self.max_gap),
            ("maxmmi", self.max_mmi),
            ("mincdi", self.min_cdi),
            ("mingap", self.min_gap),
        ];
        for (key, value) in decimals {
            // f64's Display is the shortest representation that round-trips.
            if let Some(value) = value.filter(|v| !v.is_nan()) {
                pairs.push((key, value.to_string()));
            }
        }

        let strings = [
            ("catalog", self.catalog.as_ref().map(Catalog::as_str)),
            ("contributor", self.contributor.as_ref().map(Contributor::as_str)),
            ("eventid", self.event_id.as_deref()),
            ("orderby", self.order_by.map(|o| o.as_str())),
            ("alertlevel", self.alert_level.map(|a| a.as_str())),
            ("eventtype", self.event_type.as_ref().map(EventType::as_str)),
            ("producttype", self.product_type.as_ref().map(ProductType::as_str)),
            ("productcode", self.product_code.as_deref()),
            ("reviewstatus", self.review_status.map(|r| r.as_str())),
        ];
        for (key, value) in strings {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                pairs.push((key, value.to_string()));
            }
        }

        let flags = [
            ("includeallmagnitudes", self.include_all_magnitudes),
            ("includeallorigins", self.include_all_origins),
            ("includedeleted", self.include_deleted),
            ("includesuperseded", self.include_superseded),
        ];
        for (key, flag) in flags {
            if flag {
                pairs.push((key, "true".to_string()));
            }
        }

        let integers = [
            ("limit", self.limit),
            ("offset", self.offset),
            ("maxsig", self.max_sig),
            ("minfelt", self.min_felt),
            ("minsig", self.min_sig),
        ];
        for (key, value) in integers {
            if let Some(value) = value.filter(|v| *v != 0) {
                pairs.push((key, value.to_string()));
            }
        }

        pairs
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }
    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }
    pub fn with_updated_after(mut self, updated_after: DateTime<Utc>) -> Self {
        self.updated_after = Some(updated_after);
        self
    }

    /// Sets all four bounds of a rectangle search.
    pub fn with_rectangle(
        mut self,
        min_latitude: f64,
        min_longitude: f64,
        max_latitude: f64,
        max_longitude: f64,
    ) -> Self {
        self.min_latitude = Some(min_latitude);
        self.min_longitude = Some(min_longitude);
        self.max_latitude = Some(max_latitude);
        self.max_longitude = Some(max_longitude);
        self
    }
    pub fn with_min_latitude(mut self, min_latitude: f64) -> Self {
        self.min_latitude = Some(min_latitude);
        self
    }
    pub fn with_min_longitude(mut self, min_longitude: f64) -> Self {
        self.min_longitude = Some(min_longitude);
        self
    }
    pub fn with_max_latitude(mut self, max_latitude: f64) -> Self {
        self.max_latitude = Some(max_latitude);
        self
    }
    pub fn with_max_longitude(mut self, max_longitude: f64) -> Self {
        self.max_longitude = Some(max_longitude);
        self
    }

    /// Sets the centre of a circle search.
    pub fn with_center(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
    pub fn with_max_radius(mut self, degrees: f64) -> Self {
        self.max_radius = Some(degrees);
        self
    }
    pub fn with_max_radius_km(mut self, km: f64) -> Self {
        self.max_radius_km = Some(km);
        self
    }

    pub fn with_catalog(mut self, catalog: impl Into<Catalog>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }
    pub fn with_contributor(mut self, contributor: impl Into<Contributor>) -> Self {
        self.contributor = Some(contributor.into());
        self
    }
    pub fn with_event_id(mut self, event_id: &str) -> Self {
        self.event_id = Some(event_id.to_string());
        self
    }
    pub fn with_include_all_magnitudes(mut self, include: bool) -> Self {
        self.include_all_magnitudes = include;
        self
    }
    pub fn with_include_all_origins(mut self, include: bool) -> Self {
        self.include_all_origins = include;
        self
    }
    pub fn with_include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }
    pub fn with_include_superseded(mut self, include: bool) -> Self {
        self.include_superseded = include;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }
    pub fn with_total_results(mut self, total_results: u32) -> Self {
        self.total_results = Some(total_results);
        self
    }

    pub fn with_min_depth(mut self, km: f64) -> Self {
        self.min_depth = Some(km);
        self
    }
    pub fn with_max_depth(mut self, km: f64) -> Self {
        self.max_depth = Some(km);
        self
    }
    pub fn with_min_magnitude(mut self, magnitude: f64) -> Self {
        self.min_magnitude = Some(magnitude);
        self
    }
    pub fn with_max_magnitude(mut self, magnitude: f64) -> Self {
        self.max_magnitude = Some(magnitude);
        self
    }

    pub fn with_alert_level(mut self, alert_level: AlertLevel) -> Self {
        self.alert_level = Some(alert_level);
        self
    }
    pub fn with_event_type(mut self, event_type: impl Into<EventType>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }
    pub fn with_min_cdi(mut self, cdi: f64) -> Self {
        self.min_cdi = Some(cdi);
        self
    }
    pub fn with_max_cdi(mut self, cdi: f64) -> Self {
        self.max_cdi = Some(cdi);
        self
    }
    pub fn with_max_mmi(mut self, mmi: f64) -> Self {
        self.max_mmi = Some(mmi);
        self
    }
    pub fn with_min_gap(mut self, degrees: f64) -> Self {
        self.min_gap = Some(degrees);
        self
    }
    pub fn with_max_gap(mut self, degrees: f64) -> Self {
        self.max_gap = Some(degrees);
        self
    }
    pub fn with_min_sig(mut self, sig: u32) -> Self {
        self.min_sig = Some(sig);
        self
    }
    pub fn with_max_sig(mut self, sig: u32) -> Self {
        self.max_sig = Some(sig);
        self
    }
    pub fn with_min_felt(mut self, felt: u32) -> Self {
        self.min_felt = Some(felt);
        self
    }
    pub fn with_product_type(mut self, product_type: impl Into<ProductType>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }
    pub fn with_product_code(mut self, product_code: &str) -> Self {
        self.product_code = Some(product_code.to_string());
        self
    }
    pub fn with_review_status(mut self, review_status: ReviewStatus) -> Self {
        self.review_status = Some(review_status);
        self
    }
}

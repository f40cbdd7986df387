use chrono::{TimeZone, Utc};
use usgs_earthquake::types::{Catalog, Contributor, EventType, ProductType};
use usgs_earthquake::{AlertLevel, EventQuery, OrderBy, ReviewStatus};

fn keys(encoded: &str) -> Vec<&str> {
    encoded
        .split('&')
        .map(|pair| pair.split('=').next().unwrap())
        .collect()
}

fn assert_sorted(encoded: &str) {
    let keys = keys(encoded);
    let mut sorted = keys.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(keys, sorted, "keys not strictly ascending in {}", encoded);
}

#[test]
fn empty_query_has_only_format() {
    assert_eq!(keys(&EventQuery::new().encode()), vec!["format"]);
}

#[test]
fn every_decimal_field_is_sent_only_when_set() {
    type Setter = fn(&mut EventQuery, Option<f64>);
    let fields: &[(&str, Setter)] = &[
        ("minlatitude", |q, v| q.min_latitude = v),
        ("minlongitude", |q, v| q.min_longitude = v),
        ("maxlatitude", |q, v| q.max_latitude = v),
        ("maxlongitude", |q, v| q.max_longitude = v),
        ("latitude", |q, v| q.latitude = v),
        ("longitude", |q, v| q.longitude = v),
        ("maxradius", |q, v| q.max_radius = v),
        ("maxradiuskm", |q, v| q.max_radius_km = v),
        ("mindepth", |q, v| q.min_depth = v),
        ("maxdepth", |q, v| q.max_depth = v),
        ("minmagnitude", |q, v| q.min_magnitude = v),
        ("maxmagnitude", |q, v| q.max_magnitude = v),
        ("mincdi", |q, v| q.min_cdi = v),
        ("maxcdi", |q, v| q.max_cdi = v),
        ("maxmmi", |q, v| q.max_mmi = v),
        ("mingap", |q, v| q.min_gap = v),
        ("maxgap", |q, v| q.max_gap = v),
    ];

    for (key, set) in fields {
        let mut q = EventQuery::new();
        set(&mut q, None);
        assert!(!keys(&q.encode()).contains(key), "{} sent while unset", key);

        set(&mut q, Some(0.0));
        let encoded = q.encode();
        assert!(
            encoded.contains(&format!("{}=0", key)),
            "{} missing for 0.0: {}",
            key,
            encoded
        );

        set(&mut q, Some(f64::NAN));
        assert!(!q.encode().contains("NaN"));
    }
}

#[test]
fn flags_only_sent_when_true() {
    let q = EventQuery::new()
        .with_include_all_magnitudes(true)
        .with_include_all_origins(false)
        .with_include_deleted(true)
        .with_include_superseded(false);
    assert_eq!(
        q.encode(),
        "format=geojson&includeallmagnitudes=true&includedeleted=true"
    );
    assert!(!q.encode().contains("false"));
}

#[test]
fn order_of_assignment_does_not_matter() {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    let a = EventQuery::new()
        .with_min_magnitude(2.5)
        .with_catalog(Catalog::US)
        .with_start_time(start)
        .with_limit(50)
        .with_review_status(ReviewStatus::Reviewed);
    let b = EventQuery::new()
        .with_review_status(ReviewStatus::Reviewed)
        .with_limit(50)
        .with_start_time(start)
        .with_catalog(Catalog::US)
        .with_min_magnitude(2.5);

    assert_eq!(a.encode(), b.encode());
    assert_sorted(&a.encode());
}

#[test]
fn fully_populated_query_is_sorted() {
    let t = Utc.with_ymd_and_hms(2020, 2, 3, 4, 5, 6).unwrap();
    let q = EventQuery::new()
        .with_start_time(t)
        .with_end_time(t)
        .with_updated_after(t)
        .with_rectangle(-10.0, -20.0, 10.0, 20.0)
        .with_center(1.0, 2.0)
        .with_max_radius(3.0)
        .with_max_radius_km(4.0)
        .with_catalog(Catalog::CI)
        .with_contributor(Contributor::CI)
        .with_event_id("ci12345")
        .with_include_all_magnitudes(true)
        .with_include_all_origins(true)
        .with_include_deleted(true)
        .with_include_superseded(true)
        .with_limit(10)
        .with_offset(11)
        .with_order_by(OrderBy::MagnitudeAsc)
        .with_min_depth(-1.0)
        .with_max_depth(700.0)
        .with_min_magnitude(1.0)
        .with_max_magnitude(9.5)
        .with_alert_level(AlertLevel::Orange)
        .with_event_type(EventType::EARTHQUAKE)
        .with_min_cdi(1.0)
        .with_max_cdi(12.0)
        .with_max_mmi(10.0)
        .with_min_gap(0.0)
        .with_max_gap(360.0)
        .with_min_sig(100)
        .with_max_sig(2000)
        .with_min_felt(5)
        .with_product_type(ProductType::SHAKEMAP)
        .with_product_code("ci12345")
        .with_review_status(ReviewStatus::Automatic);

    let encoded = q.encode();
    assert_sorted(&encoded);
    assert_eq!(keys(&encoded).len(), 39);
    assert_eq!(encoded, q.clone().encode());
}

#[test]
fn timestamps_are_utc_seconds() {
    let t = chrono::FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2019, 1, 2, 5, 4, 1)
        .unwrap()
        .with_timezone(&Utc);
    let q = EventQuery::new().with_start_time(t);
    assert_eq!(q.encode(), "format=geojson&starttime=2019-01-02T03%3A04%3A01Z");
}

#[test]
fn sub_second_precision_is_dropped() {
    let t = Utc.timestamp_millis_opt(1546398241250).unwrap();
    let q = EventQuery::new().with_end_time(t);
    assert_eq!(q.encode(), "endtime=2019-01-02T03%3A04%3A01Z&format=geojson");
}

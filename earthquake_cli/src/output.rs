use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use usgs_earthquake::types::Feature;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct EventRow {
    #[tabled(rename = "Time (UTC)")]
    #[serde(rename = "Time")]
    time: String,
    #[tabled(rename = "Magnitude")]
    #[serde(rename = "Magnitude")]
    magnitude: String,
    #[tabled(rename = "Place")]
    #[serde(rename = "Place")]
    place: String,
    #[tabled(rename = "Depth (km)")]
    #[serde(rename = "Depth")]
    depth: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
}

#[derive(Tabled, Serialize)]
struct NameRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

// -- Row builders --

fn build_event_rows(features: &[Feature]) -> Vec<EventRow> {
    features
        .iter()
        .map(|f| EventRow {
            time: f.properties.time.format("%Y-%m-%d %H:%M:%S").to_string(),
            magnitude: format_magnitude(f.properties.mag, f.properties.mag_type.as_deref()),
            place: f.properties.place.clone().unwrap_or_default(),
            depth: f.depth().map(|d| format!("{:.1}", d)).unwrap_or_default(),
            id: f.id.clone(),
        })
        .collect()
}

fn build_name_rows<T: AsRef<str>>(names: &[T]) -> Vec<NameRow> {
    names
        .iter()
        .map(|n| NameRow {
            name: n.as_ref().to_string(),
        })
        .collect()
}

// -- Events --

pub fn print_events(features: &[Feature], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_event_rows(features))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_event_rows(features));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(&features),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            write_event_csv(&mut wtr, features)?;
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Appends one page of events to `wtr`. The header is written with the first
/// row only, so one writer can be fed page after page.
pub fn write_event_csv<W: Write>(wtr: &mut csv::Writer<W>, features: &[Feature]) -> Result<()> {
    for row in build_event_rows(features) {
        wtr.serialize(row)?;
    }
    Ok(())
}

/// One compact JSON document per event.
pub fn print_json_lines(features: &[Feature]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for feature in features {
        serde_json::to_writer(&mut out, feature)?;
        writeln!(out)?;
    }
    Ok(())
}

// -- Names --

pub fn print_names<T: AsRef<str> + Serialize>(names: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_name_rows(names))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_name_rows(names));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(&names),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in build_name_rows(names) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_magnitude(mag: Option<f64>, mag_type: Option<&str>) -> String {
    match (mag, mag_type) {
        (Some(m), Some(t)) if !t.is_empty() => format!("{:.1} {}", m, t),
        (Some(m), _) => format!("{:.1}", m),
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usgs_earthquake::types::{Catalog, QueryResponse};

    fn load_features_fixture() -> Vec<Feature> {
        let json_str = include_str!("../../earthquake_api/tests/fixtures/query.json");
        let resp: QueryResponse = serde_json::from_str(json_str).unwrap();
        resp.features
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_format_magnitude() {
        assert_eq!(format_magnitude(Some(4.56), Some("mww")), "4.6 mww");
        assert_eq!(format_magnitude(Some(1.1), None), "1.1");
        assert_eq!(format_magnitude(Some(1.1), Some("")), "1.1");
        assert_eq!(format_magnitude(None, Some("md")), "");
    }

    #[test]
    fn test_build_event_rows_mapping() {
        let features = load_features_fixture();
        let rows = build_event_rows(&features);
        assert_eq!(rows.len(), 2);

        let row = &rows[0];
        assert_eq!(row.time, "2018-01-02 03:07:30");
        assert_eq!(row.magnitude, "1.1 md");
        assert_eq!(row.depth, "4.0");
        assert_eq!(row.id, "uw61362166");
    }

    #[test]
    fn test_build_event_rows_empty() {
        assert!(build_event_rows(&[]).is_empty());
    }

    #[test]
    fn test_build_name_rows() {
        let rows = build_name_rows(&[Catalog::US, Catalog::CI]);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["us", "ci"]);
    }

    fn csv_string(pages: &[&[Feature]]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for page in pages {
            write_event_csv(&mut wtr, page).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_csv_event_headers() {
        let features = load_features_fixture();
        let csv = csv_string(&[&features]);
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "Time,Magnitude,Place,Depth,ID");
    }

    #[test]
    fn test_csv_header_written_once_across_pages() {
        let features = load_features_fixture();
        let csv = csv_string(&[&features[..1], &features[1..]]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.iter().filter(|l| l.starts_with("Time,")).count(), 1);
    }

    #[test]
    fn test_markdown_event_structure() {
        let features = load_features_fixture();
        let mut table = Table::new(build_event_rows(&features));
        table.with(Style::markdown());
        let md = table.to_string();

        assert!(md.contains('|'));
        assert!(md.contains("---"));
        let header_line = md.lines().next().unwrap();
        assert!(header_line.contains("Time (UTC)"));
        assert!(header_line.contains("Magnitude"));
        assert!(header_line.contains("ID"));
    }

    #[test]
    fn test_json_features_serializable() {
        let features = load_features_fixture();
        let val = serde_json::to_value(&features).unwrap();
        assert_eq!(val.as_array().unwrap().len(), 2);
        assert_eq!(val[0]["properties"]["time"], 1514862450840_i64);
    }
}

use anyhow::Result;
use usgs_earthquake::Client;

use crate::output::{print_json, OutputFormat};

pub fn run(client: &Client, format: OutputFormat) -> Result<()> {
    let version = client.version()?;
    match format {
        OutputFormat::Json => print_json(&version),
        _ => println!("{}", version),
    }
    Ok(())
}

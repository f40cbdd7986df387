use anyhow::Result;
use clap::Args;
use usgs_earthquake::Client;

use super::filters::FilterArgs;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct CountArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

pub fn run(args: &CountArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let query = args.filters.to_query()?;
    let resp = client.count(&query)?;

    match format {
        OutputFormat::Json => print_json(&resp),
        _ => {
            println!("count: {}", resp.count);
            println!("maxAllowed: {}", resp.max_allowed);
        }
    }
    Ok(())
}

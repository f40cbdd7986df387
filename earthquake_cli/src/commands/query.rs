//! The `query` subcommand: fetches a single page of events.

use anyhow::Result;
use clap::Args;
use usgs_earthquake::{Client, OrderBy};

use super::filters::FilterArgs;
use crate::output::{print_events, OutputFormat};

#[derive(Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Maximum number of events to return
    #[arg(long, default_value = "20")]
    pub limit: u32,

    /// 1-based index of the first event
    #[arg(long)]
    pub offset: Option<u32>,

    /// Sort order: time, time-asc, magnitude, magnitude-asc
    #[arg(long)]
    pub order_by: Option<OrderBy>,
}

pub fn run(args: &QueryArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let mut query = args.filters.to_query()?.with_limit(args.limit);
    query.offset = args.offset;
    query.order_by = args.order_by;

    let resp = client.query(&query)?;

    eprintln!(
        "{} events ({})",
        resp.features.len(),
        resp.metadata.title
    );

    print_events(&resp.features, format)
}

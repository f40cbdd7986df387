//! The `fetch` subcommand: pages through every matching event, printing each
//! page as soon as it arrives.

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use usgs_earthquake::types::QueryResponse;
use usgs_earthquake::{Client, OrderBy};

use super::filters::FilterArgs;
use crate::output::{print_events, print_json_lines, write_event_csv, OutputFormat};

#[derive(Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Events per request (defaults to the service maximum)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Stop after this many events (defaults to all matching events)
    #[arg(long)]
    pub total: Option<u32>,

    /// Sort order: time, time-asc, magnitude, magnitude-asc
    #[arg(long)]
    pub order_by: Option<OrderBy>,
}

pub fn run(args: &FetchArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let mut query = args.filters.to_query()?;
    query.limit = args.page_size;
    query.total_results = args.total;
    query.order_by = args.order_by;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}] {spinner} {pos} events {msg}",
    )?);
    pb.set_message("counting...");

    let mut csv_writer = csv::Writer::from_writer(std::io::stdout());
    let mut pages = 0u32;

    client.query_paged(&query, |page: QueryResponse| -> Result<()> {
        pages += 1;
        pb.inc(page.features.len() as u64);
        pb.set_message(format!("(page {})", pages));
        pb.suspend(|| -> Result<()> {
            match format {
                OutputFormat::Csv => {
                    write_event_csv(&mut csv_writer, &page.features)?;
                    csv_writer.flush()?;
                    Ok(())
                }
                OutputFormat::Json => print_json_lines(&page.features),
                _ => print_events(&page.features, format),
            }
        })
    })?;

    pb.finish_and_clear();
    eprintln!("Fetched {} events in {} pages", pb.position(), pages);
    Ok(())
}

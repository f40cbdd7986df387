//! The `catalogs` and `contributors` subcommands.

use anyhow::Result;
use usgs_earthquake::Client;

use crate::output::{print_names, OutputFormat};

pub fn run_catalogs(client: &Client, format: OutputFormat) -> Result<()> {
    let list = client.catalogs()?;
    eprintln!("{} catalogs", list.catalogs.len());
    print_names(&list.catalogs, format)
}

pub fn run_contributors(client: &Client, format: OutputFormat) -> Result<()> {
    let list = client.contributors()?;
    eprintln!("{} contributors", list.contributors.len());
    print_names(&list.contributors, format)
}

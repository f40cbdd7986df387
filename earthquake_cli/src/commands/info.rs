use anyhow::Result;
use usgs_earthquake::Client;

use crate::output::print_json;

/// Always JSON: the five lists have nothing in common to tabulate.
pub fn run(client: &Client) -> Result<()> {
    let info = client.application_info()?;
    print_json(&info);
    Ok(())
}

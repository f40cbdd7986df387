mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use usgs_earthquake::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "quakes")]
#[command(about = "Query the USGS earthquake catalog")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the service version
    Version,
    /// List catalogs
    Catalogs,
    /// List contributors
    Contributors,
    /// Print the known catalogs, contributors, event, magnitude and product types
    Info,
    /// Count matching events
    Count(commands::count::CountArgs),
    /// Fetch one page of matching events
    Query(Box<commands::query::QueryArgs>),
    /// Fetch every matching event, page by page
    Fetch(Box<commands::fetch::FetchArgs>),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("usgs_earthquake=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let client = Client::from_config(ClientConfig::from_env())?;

    match &cli.command {
        Commands::Version => commands::version::run(&client, format)?,
        Commands::Catalogs => commands::names::run_catalogs(&client, format)?,
        Commands::Contributors => commands::names::run_contributors(&client, format)?,
        Commands::Info => commands::info::run(&client)?,
        Commands::Count(args) => commands::count::run(args, &client, format)?,
        Commands::Query(args) => commands::query::run(args, &client, format)?,
        Commands::Fetch(args) => commands::fetch::run(args, &client, format)?,
    }

    Ok(())
}

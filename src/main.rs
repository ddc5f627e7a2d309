mod cli;
mod config;
mod domain;
mod infra;
mod logging;
mod workflows;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{debug, info};

use cli::Cli;
use infra::anilist::AniListClient;
use workflows::chart;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose)?;

    // Defaults overlaid with whatever the user passed on the command line.
    let filter = cli.season_filter();
    debug!(?filter, "resolved season filter");

    let endpoint = config::graphql_endpoint();
    info!(
        endpoint = %endpoint,
        year = filter.year,
        season = filter.season.as_graphql(),
        "querying AniList"
    );

    let client = AniListClient::new(endpoint);

    let Some(page) = client.fetch_season(&filter)? else {
        bail!("no data returned from the AniList query");
    };

    let mut rows = chart::extract_rows(page.media);
    chart::sort_rows(&mut rows);
    chart::tabulate(&rows)?;

    Ok(())
}

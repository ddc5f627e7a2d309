use clap::Parser;

use crate::domain::models::{MediaFormat, MediaStatus, Season, SeasonFilter};

#[derive(Parser)]
#[command(name = "anichart-export")]
#[command(about = "Fetch one season of anime from AniList and copy the chart as a tab-separated table")]
#[command(after_help = "Example: anichart-export --format tv --year 2024 --season summer")]
pub struct Cli {
    /// Airing statuses to include (default: releasing, not-yet-released)
    #[arg(long = "status", value_enum)]
    pub status: Vec<MediaStatus>,

    /// Media formats to include (default: tv, movie, tv-short, ova, ona)
    #[arg(long = "format", value_enum)]
    pub format: Vec<MediaFormat>,

    /// Season year to filter by
    #[arg(long)]
    pub year: Option<i32>,

    /// Season to filter by
    #[arg(long, value_enum)]
    pub season: Option<Season>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Overlay any flags the user provided onto the default filter.
    pub fn season_filter(&self) -> SeasonFilter {
        let mut filter = SeasonFilter::default();

        if !self.status.is_empty() {
            filter.status = self.status.clone();
        }
        if !self.format.is_empty() {
            filter.format = self.format.clone();
        }
        if let Some(year) = self.year {
            filter.year = year;
        }
        if let Some(season) = self.season {
            filter.season = season;
        }

        filter
    }
}

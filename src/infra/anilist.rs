use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::models::SeasonFilter;

// The query requests more fields than the chart consumes so the same
// response can feed later processing.
const QUERY: &str = r#"
query GetMedia($status: [MediaStatus!], $format: [MediaFormat!], $season: MediaSeason, $year: Int) {
    Page {
        media(status_in: $status, format_in: $format, season: $season, seasonYear: $year) {
            title {
                romaji
                english
                native
            }
            id
            startDate {
                year
                month
                day
            }
            endDate {
                year
                month
                day
            }
            episodes
            seasonInt
            seasonYear
            season
            format
            status
            duration
            genres
            meanScore
            popularity
            trending
        }
    }
}
"#;

#[derive(Debug, Clone)]
pub struct AniListClient {
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: ResponseData,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "Page")]
    page: Page,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub media: Vec<Media>,
}

/// One media entry as AniList returns it. Every field except `id` can be
/// null, and the chart only reads `title` and `start_date`.
#[derive(Debug, Deserialize, Default)]
pub struct Media {
    pub id: u64,
    pub title: Option<Title>,
    #[serde(rename = "startDate")]
    pub start_date: Option<FuzzyDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<FuzzyDate>,
    pub episodes: Option<u32>,
    pub season: Option<String>,
    #[serde(rename = "seasonYear")]
    pub season_year: Option<i32>,
    pub format: Option<String>,
    pub status: Option<String>,
    pub duration: Option<u32>,
    pub genres: Option<Vec<String>>,
    #[serde(rename = "meanScore")]
    pub mean_score: Option<u32>,
    pub popularity: Option<u32>,
    pub trending: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Title {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

/// AniList dates are fuzzy: each component can be null independently.
#[derive(Debug, Deserialize, Default)]
pub struct FuzzyDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl AniListClient {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    /// Run the season query once.
    ///
    /// Only HTTP 200 carries usable data; any other status maps to
    /// `Ok(None)`. Transport failures and responses that do not match the
    /// GraphQL envelope bubble up as errors.
    pub fn fetch_season(&self, filter: &SeasonFilter) -> Result<Option<Page>> {
        let body = serde_json::json!({
            "query": QUERY,
            "variables": build_variables(filter),
        });

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .context("AniList request failed")?;

        let status = response.status();
        let text = response.text()?;
        debug!(status = %status, bytes = text.len(), "AniList response received");

        parse_response(status, &text)
    }
}

fn build_variables(filter: &SeasonFilter) -> serde_json::Value {
    let status: Vec<&str> = filter.status.iter().map(|s| s.as_graphql()).collect();
    let format: Vec<&str> = filter.format.iter().map(|f| f.as_graphql()).collect();

    serde_json::json!({
        "status": status,
        "format": format,
        "year": filter.year,
        "season": filter.season.as_graphql(),
    })
}

pub(crate) fn parse_response(status: StatusCode, body: &str) -> Result<Option<Page>> {
    if status != StatusCode::OK {
        warn!(status = %status, "AniList query returned no data");
        return Ok(None);
    }

    let parsed: GraphQlResponse =
        serde_json::from_str(body).context("failed to parse AniList response")?;

    Ok(Some(parsed.data.page))
}

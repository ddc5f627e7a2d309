use clap::ValueEnum;

/// Airing statuses accepted by the AniList `status_in` filter.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
}

impl MediaStatus {
    pub fn as_graphql(&self) -> &'static str {
        match self {
            MediaStatus::Finished => "FINISHED",
            MediaStatus::Releasing => "RELEASING",
            MediaStatus::NotYetReleased => "NOT_YET_RELEASED",
            MediaStatus::Cancelled => "CANCELLED",
            MediaStatus::Hiatus => "HIATUS",
        }
    }
}

/// Media formats accepted by the AniList `format_in` filter.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum MediaFormat {
    Tv,
    TvShort,
    Movie,
    Special,
    Ova,
    Ona,
    Music,
    Manga,
    Novel,
    OneShot,
}

impl MediaFormat {
    pub fn as_graphql(&self) -> &'static str {
        match self {
            MediaFormat::Tv => "TV",
            MediaFormat::TvShort => "TV_SHORT",
            MediaFormat::Movie => "MOVIE",
            MediaFormat::Special => "SPECIAL",
            MediaFormat::Ova => "OVA",
            MediaFormat::Ona => "ONA",
            MediaFormat::Music => "MUSIC",
            MediaFormat::Manga => "MANGA",
            MediaFormat::Novel => "NOVEL",
            MediaFormat::OneShot => "ONE_SHOT",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub fn as_graphql(&self) -> &'static str {
        match self {
            Season::Winter => "WINTER",
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Fall => "FALL",
        }
    }
}

/// The filter values one query runs with. Built once per invocation and
/// passed by reference, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SeasonFilter {
    pub status: Vec<MediaStatus>,
    pub format: Vec<MediaFormat>,
    pub year: i32,
    pub season: Season,
}

impl Default for SeasonFilter {
    fn default() -> Self {
        Self {
            status: vec![MediaStatus::Releasing, MediaStatus::NotYetReleased],
            format: vec![
                MediaFormat::Tv,
                MediaFormat::Movie,
                MediaFormat::TvShort,
                MediaFormat::Ova,
                MediaFormat::Ona,
            ],
            year: 2024,
            season: Season::Summer,
        }
    }
}

/// One line of the finished chart: romaji title, English title and the
/// formatted start date. Either title may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow {
    pub romaji: String,
    pub english: String,
    pub start_date: String,
}

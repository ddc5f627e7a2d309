use anyhow::Result;
use tracing::debug;

use crate::domain::models::ChartRow;
use crate::infra::anilist::{FuzzyDate, Media};
use crate::infra::clipboard;

/// Substituted whenever the start date is not fully known.
const FALLBACK_DATE: &str = "1.1.1999";

/// Extract one chart row per media entry, preserving input order. Entries
/// are never dropped; missing fields get their fallback values instead.
pub fn extract_rows(media: Vec<Media>) -> Vec<ChartRow> {
    let rows: Vec<ChartRow> = media.into_iter().map(extract_row).collect();
    debug!(rows = rows.len(), "extracted chart rows");
    rows
}

fn extract_row(entry: Media) -> ChartRow {
    // A missing title object and null title fields read the same.
    let title = entry.title.unwrap_or_default();

    ChartRow {
        romaji: title.romaji.unwrap_or_default(),
        english: title.english.unwrap_or_default(),
        start_date: format_start_date(entry.start_date.as_ref()),
    }
}

/// Day-first, no zero padding. A date only counts when all three
/// components are set; a partial date falls back entirely.
fn format_start_date(date: Option<&FuzzyDate>) -> String {
    match date {
        Some(FuzzyDate {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }) => format!("{day}.{month}.{year}"),
        _ => FALLBACK_DATE.to_string(),
    }
}

/// Sort by English title, case-sensitive. The sort is stable, and rows
/// with an empty English title end up first.
pub fn sort_rows(rows: &mut [ChartRow]) {
    rows.sort_by(|a, b| a.english.cmp(&b.english));
}

pub fn render_table(rows: &[ChartRow]) -> String {
    let mut table = String::new();
    for row in rows {
        table.push_str(&format!(
            "{} \t {} \t {} \n",
            row.romaji, row.english, row.start_date
        ));
    }
    table
}

/// Print the chart between separator lines, copy it to the clipboard and
/// report the entry count.
pub fn tabulate(rows: &[ChartRow]) -> Result<()> {
    println!("\n--------------------\n");

    let table = render_table(rows);
    println!("{table}");

    clipboard::copy(&table)?;

    println!("\n\n--------------------\n\n");
    println!("Elements: {}", rows.len());

    Ok(())
}

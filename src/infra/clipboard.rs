use anyhow::{Context, Result};
use arboard::Clipboard;

/// Place `text` on the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("failed to open the system clipboard")?;
    clipboard
        .set_text(text)
        .context("failed to copy the chart to the clipboard")?;
    Ok(())
}

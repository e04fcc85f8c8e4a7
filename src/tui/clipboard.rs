//! Clipboard helper for copying contact links
//!
//! Uses `arboard` for cross-platform support. The clipboard is opened fresh
//! for each copy so no handle is held while the TUI runs.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux, SSH session).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// The part of a link worth pasting: `mailto:` is dropped so an address
/// copies as an address
pub fn copy_text(href: &str) -> &str {
    href.strip_prefix("mailto:").unwrap_or(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_text_strips_mailto() {
        assert_eq!(copy_text("mailto:someone@example.com"), "someone@example.com");
        assert_eq!(copy_text("https://example.com"), "https://example.com");
    }
}

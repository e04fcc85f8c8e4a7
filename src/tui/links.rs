//! Opening project and contact links in the system handler

use anyhow::{bail, Context, Result};

/// Hand a link to the platform opener without waiting on it
pub fn open_link(href: &str) -> Result<()> {
    if !is_openable(href) {
        bail!("Refusing to open unsupported link: {}", href);
    }
    open::that_detached(href).with_context(|| format!("Failed to open {}", href))?;
    tracing::info!(href, "opened link");
    Ok(())
}

/// Only web and mail links leave the terminal
fn is_openable(href: &str) -> bool {
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| href.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CONTACT_LINKS, PROJECTS};

    #[test]
    fn test_bundled_links_are_openable() {
        for link in CONTACT_LINKS.iter() {
            assert!(is_openable(link.href), "{}", link.href);
        }
        for project in PROJECTS.iter() {
            assert!(is_openable(project.url), "{}", project.url);
        }
    }

    #[test]
    fn test_other_schemes_rejected() {
        assert!(!is_openable("file:///etc/passwd"));
        assert!(!is_openable("javascript:alert(1)"));
        assert!(open_link("ftp://example.com").is_err());
    }
}

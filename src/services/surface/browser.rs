use anyhow::Context;

use super::{Surface, WindowFeatures};

// The desktop browser picks its own window geometry, so popup features are
// only logged. A launch failure counts as a blocked popup.
#[derive(Debug, Default)]
pub struct BrowserSurface;

impl BrowserSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for BrowserSurface {
    fn open_popup(&self, url: &str, target: &str, features: &WindowFeatures) -> anyhow::Result<bool> {
        tracing::debug!(%url, %target, %features, "opening popup in system browser");
        match open::that_detached(url) {
            Ok(()) => Ok(true),
            Err(e) => {
                tracing::debug!(error = %e, "system browser refused popup");
                Ok(false)
            }
        }
    }

    fn open_tab(&self, url: &str) -> anyhow::Result<()> {
        open::that_detached(url).context("failed to open browser tab")
    }

    fn navigate(&self, url: &str) -> anyhow::Result<()> {
        // No current browsing context to replace; the browser picks the tab.
        open::that_detached(url).context("failed to navigate system browser")
    }
}

pub mod browser;
pub mod memory;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFeatures {
    pub width: u32,
    pub height: u32,
    pub scrollbars: bool,
    pub resizable: bool,
}

impl Default for WindowFeatures {
    fn default() -> Self {
        Self {
            width: 800,
            height: 700,
            scrollbars: true,
            resizable: true,
        }
    }
}

impl fmt::Display for WindowFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool| if on { "yes" } else { "no" };
        write!(
            f,
            "width={},height={},scrollbars={},resizable={}",
            self.width,
            self.height,
            flag(self.scrollbars),
            flag(self.resizable)
        )
    }
}

/// Browsing primitives of the host environment.
pub trait Surface: Send + Sync {
    /// Opens `url` in a separate, sized top-level surface named `target`.
    /// `Ok(false)` means the host refused to create it.
    fn open_popup(&self, url: &str, target: &str, features: &WindowFeatures) -> anyhow::Result<bool>;

    /// Brings the popup named `target` to the front. Called after every
    /// successful `open_popup`.
    fn focus(&self, _target: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn open_tab(&self, url: &str) -> anyhow::Result<()>;

    fn navigate(&self, url: &str) -> anyhow::Result<()>;
}

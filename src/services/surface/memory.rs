use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{Surface, WindowFeatures};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Popup {
        url: String,
        target: String,
        features: WindowFeatures,
    },
    Focus {
        target: String,
    },
    Tab {
        url: String,
    },
    Navigate {
        url: String,
    },
}

/// Records every call instead of touching a real browser. Clones share the
/// call log.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
    block_popups: Arc<AtomicBool>,
    fail_all: Arc<AtomicBool>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocking_popups() -> Self {
        let surface = Self::default();
        surface.block_popups.store(true, Ordering::SeqCst);
        surface
    }

    // popups blocked and every other call errors
    pub fn unavailable() -> Self {
        let surface = Self::blocking_popups();
        surface.fail_all.store(true, Ordering::SeqCst);
        surface
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Surface for MemorySurface {
    fn open_popup(&self, url: &str, target: &str, features: &WindowFeatures) -> anyhow::Result<bool> {
        self.record(SurfaceCall::Popup {
            url: url.to_string(),
            target: target.to_string(),
            features: *features,
        });
        Ok(!self.block_popups.load(Ordering::SeqCst))
    }

    fn focus(&self, target: &str) -> anyhow::Result<()> {
        self.record(SurfaceCall::Focus {
            target: target.to_string(),
        });
        Ok(())
    }

    fn open_tab(&self, url: &str) -> anyhow::Result<()> {
        self.record(SurfaceCall::Tab { url: url.to_string() });
        anyhow::ensure!(!self.fail_all.load(Ordering::SeqCst), "tab creation disabled");
        Ok(())
    }

    fn navigate(&self, url: &str) -> anyhow::Result<()> {
        self.record(SurfaceCall::Navigate { url: url.to_string() });
        anyhow::ensure!(!self.fail_all.load(Ordering::SeqCst), "navigation disabled");
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorPolicy, LinkError};
use crate::services::surface::{Surface, WindowFeatures};

pub const POPUP_TARGET: &str = "calendly-popup";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    Popup,
    Inline,
}

/// Hands `url` to the host surface. Host failures are only logged; the one
/// error that can come back is a propagated `DeliveryBlocked`, in which case
/// no fallback tab is opened.
pub fn deliver(
    surface: &dyn Surface,
    url: &str,
    mode: DeliveryMode,
    features: &WindowFeatures,
    policy: &ErrorPolicy,
) -> Result<(), LinkError> {
    match mode {
        DeliveryMode::Popup => {
            let opened = surface
                .open_popup(url, POPUP_TARGET, features)
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, %url, "popup creation failed");
                    false
                });
            if opened {
                tracing::info!(%url, "opened scheduling popup");
                if let Err(e) = surface.focus(POPUP_TARGET) {
                    tracing::warn!(error = %e, "could not focus popup");
                }
                return Ok(());
            }

            policy.handle(LinkError::DeliveryBlocked(url.to_string()))?;
            if let Err(e) = surface.open_tab(url) {
                tracing::error!(error = %e, %url, "fallback tab failed");
            }
        }
        DeliveryMode::Inline => {
            if let Err(e) = surface.navigate(url) {
                tracing::error!(error = %e, %url, "inline navigation failed");
            }
        }
    }

    Ok(())
}

// Target for an endpoint that failed to parse. Popup mode skips the sized
// window and goes straight to a plain tab.
pub fn deliver_raw(surface: &dyn Surface, raw: &str, mode: DeliveryMode) {
    let result = match mode {
        DeliveryMode::Popup => surface.open_tab(raw),
        DeliveryMode::Inline => surface.navigate(raw),
    };
    if let Err(e) = result {
        tracing::error!(error = %e, url = %raw, "raw endpoint delivery failed");
    }
}

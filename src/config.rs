use std::env;

use crate::errors::{Disposition, ErrorPolicy};
use crate::services::surface::WindowFeatures;

const ENDPOINT_PREFIX: &str = "BOOKING_URL_";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub admin_token: String,
    pub popup_width: u32,
    pub popup_height: u32,
    pub strict_endpoints: bool,
    pub allowed_origin: Option<String>,
    /// Intent name (lowercased) to endpoint, from `BOOKING_URL_<INTENT>`.
    pub endpoint_overrides: Vec<(String, String)>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::vars())
    }

    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let vars: Vec<(String, String)> = vars.into_iter().collect();
        let get = |key: &str| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        let mut endpoint_overrides: Vec<(String, String)> = vars
            .iter()
            .filter_map(|(k, v)| {
                k.strip_prefix(ENDPOINT_PREFIX)
                    .filter(|intent| !intent.is_empty() && !v.is_empty())
                    .map(|intent| (intent.to_lowercase(), v.clone()))
            })
            .collect();
        endpoint_overrides.sort();

        Self {
            port: get("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
            admin_token: get("ADMIN_TOKEN").unwrap_or_else(|| "changeme".to_string()),
            popup_width: get("POPUP_WIDTH").and_then(|v| v.parse().ok()).unwrap_or(800),
            popup_height: get("POPUP_HEIGHT").and_then(|v| v.parse().ok()).unwrap_or(700),
            strict_endpoints: get("STRICT_ENDPOINTS")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            allowed_origin: get("ALLOWED_ORIGIN").filter(|v| !v.is_empty()),
            endpoint_overrides,
        }
    }

    pub fn window_features(&self) -> WindowFeatures {
        WindowFeatures {
            width: self.popup_width,
            height: self.popup_height,
            ..WindowFeatures::default()
        }
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        let mut policy = ErrorPolicy::default();
        if self.strict_endpoints {
            policy.malformed_endpoint = Disposition::Propagate;
        }
        policy
    }
}

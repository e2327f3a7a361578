use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::errors::{ErrorPolicy, LinkError};
use crate::models::{default_intents, IntentPreset, LinkRequest};
use crate::services::composer;
use crate::services::delivery::{self, DeliveryMode};
use crate::services::surface::{Surface, WindowFeatures};

#[derive(Debug, Default)]
struct Registry {
    endpoints: HashMap<String, String>,
    presets: HashMap<String, IntentPreset>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntentSummary {
    pub intent: String,
    pub endpoint: String,
    pub campaign: String,
}

/// Intent registry plus the surface and policy used to deliver its links.
pub struct BookingLinks {
    registry: RwLock<Registry>,
    surface: Arc<dyn Surface>,
    features: WindowFeatures,
    policy: ErrorPolicy,
}

impl BookingLinks {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            registry: RwLock::new(Registry::default()),
            surface,
            features: WindowFeatures::default(),
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_defaults(surface: Arc<dyn Surface>) -> Self {
        let links = Self::new(surface);
        for (name, endpoint, preset) in default_intents() {
            links.register_intent(
                &name,
                &endpoint,
                &preset.campaign,
                (preset.answer_key.as_str(), preset.answer_label.as_str()),
            );
        }
        links
    }

    pub fn features(mut self, features: WindowFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds or replaces an intent. `answer` is the fixed custom answer as
    /// `(question key, label)`.
    pub fn register_intent(&self, name: &str, endpoint: &str, campaign: &str, answer: (&str, &str)) {
        let mut registry = self.registry.write().unwrap();
        registry.endpoints.insert(name.to_string(), endpoint.to_string());
        registry
            .presets
            .insert(name.to_string(), IntentPreset::new(campaign, answer.0, answer.1));
        tracing::debug!(intent = %name, %endpoint, "registered booking intent");
    }

    /// Merges `partial` into the endpoint table. Intents not named keep their
    /// endpoints; nothing is ever removed.
    pub fn update_endpoints<I, K, V>(&self, partial: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let updates: Vec<(String, String)> = partial
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut registry = self.registry.write().unwrap();
        for (name, endpoint) in updates {
            tracing::info!(intent = %name, %endpoint, "updating booking endpoint");
            registry.endpoints.insert(name, endpoint);
        }
    }

    pub fn endpoint(&self, name: &str) -> Option<String> {
        self.registry.read().unwrap().endpoints.get(name).cloned()
    }

    pub fn endpoints(&self) -> BTreeMap<String, String> {
        self.registry
            .read()
            .unwrap()
            .endpoints
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn intents(&self) -> Vec<IntentSummary> {
        let registry = self.registry.read().unwrap();
        let mut intents: Vec<IntentSummary> = registry
            .presets
            .iter()
            .filter_map(|(name, preset)| {
                registry.endpoints.get(name).map(|endpoint| IntentSummary {
                    intent: name.clone(),
                    endpoint: endpoint.clone(),
                    campaign: preset.campaign.clone(),
                })
            })
            .collect();
        intents.sort_by(|a, b| a.intent.cmp(&b.intent));
        intents
    }

    fn request_for(&self, name: &str) -> Result<LinkRequest, LinkError> {
        let registry = self.registry.read().unwrap();
        let preset = registry
            .presets
            .get(name)
            .ok_or_else(|| LinkError::UnknownIntent(name.to_string()))?;
        let endpoint = registry
            .endpoints
            .get(name)
            .ok_or_else(|| LinkError::UnknownIntent(name.to_string()))?;
        Ok(preset.to_request(endpoint))
    }

    pub fn link_for(&self, name: &str) -> Result<String, LinkError> {
        let request = self.request_for(name)?;
        composer::render(&request, &self.policy)
    }

    pub fn invoke(&self, name: &str) -> Result<(), LinkError> {
        self.invoke_with(name, DeliveryMode::Popup)
    }

    pub fn invoke_with(&self, name: &str, mode: DeliveryMode) -> Result<(), LinkError> {
        match self.request_for(name) {
            Ok(request) => self.open(&request, mode),
            Err(err) => self.policy.handle(err),
        }
    }

    /// Composes and delivers a caller-built request. An endpoint that fails
    /// to parse, when swallowed, goes to the surface as-is: popup mode opens
    /// it in a plain tab.
    pub fn open(&self, request: &LinkRequest, mode: DeliveryMode) -> Result<(), LinkError> {
        match composer::compose(request) {
            Ok(url) => delivery::deliver(self.surface.as_ref(), &url, mode, &self.features, &self.policy),
            Err(err) => {
                self.policy.handle(err)?;
                delivery::deliver_raw(self.surface.as_ref(), &request.endpoint, mode);
                Ok(())
            }
        }
    }
}

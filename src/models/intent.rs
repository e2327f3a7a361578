use serde::{Deserialize, Serialize};

use super::link_request::{AttributionFields, LinkRequest, PrefillFields};

const CALENDLY_BASE: &str = "https://calendly.com/your-username";

/// Fixed labeling for one booking intent. The endpoint lives in the
/// registry's endpoint table so it can be overridden on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntentPreset {
    pub campaign: String,
    pub answer_key: String,
    pub answer_label: String,
}

impl IntentPreset {
    pub fn new(campaign: &str, answer_key: &str, answer_label: &str) -> Self {
        Self {
            campaign: campaign.to_string(),
            answer_key: answer_key.to_string(),
            answer_label: answer_label.to_string(),
        }
    }

    pub fn to_request(&self, endpoint: &str) -> LinkRequest {
        LinkRequest::new(endpoint)
            .prefill(PrefillFields::default().with_answer(&self.answer_key, &self.answer_label))
            .attribution(AttributionFields::landing_page(&self.campaign))
    }
}

pub fn default_intents() -> Vec<(String, String, IntentPreset)> {
    [
        ("discovery_call", "discovery-call", "discovery_call", "call_type", "Discovery Call"),
        (
            "free_chatbot",
            "free-instagram-chatbot",
            "free_instagram_chatbot",
            "service_type",
            "Free Instagram Chatbot",
        ),
        ("demo", "demo-call", "demo_call", "call_type", "Demo Call"),
        ("consultation", "consultation", "consultation", "call_type", "Consultation"),
        ("strategy_call", "strategy-call", "strategy_call", "call_type", "Strategy Call"),
    ]
    .into_iter()
    .map(|(name, path, campaign, key, label)| {
        (
            name.to_string(),
            format!("{CALENDLY_BASE}/{path}"),
            IntentPreset::new(campaign, key, label),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_defaults_with_distinct_paths() {
        let intents = default_intents();
        assert_eq!(intents.len(), 5);

        let mut endpoints: Vec<_> = intents.iter().map(|(_, e, _)| e.clone()).collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), 5);

        let mut labels: Vec<_> = intents.iter().map(|(_, _, p)| p.answer_label.clone()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn test_free_chatbot_uses_service_type() {
        let intents = default_intents();
        let (_, endpoint, preset) = intents
            .iter()
            .find(|(name, _, _)| name == "free_chatbot")
            .unwrap();
        assert_eq!(endpoint, "https://calendly.com/your-username/free-instagram-chatbot");
        assert_eq!(preset.answer_key, "service_type");
        assert_eq!(preset.campaign, "free_instagram_chatbot");
    }

    #[test]
    fn test_to_request() {
        let preset = IntentPreset::new("demo_call", "call_type", "Demo Call");
        let req = preset.to_request("https://sched.example/demo");
        assert_eq!(req.endpoint, "https://sched.example/demo");
        let prefill = req.prefill.unwrap();
        assert_eq!(prefill.custom_answers.get("call_type").map(String::as_str), Some("Demo Call"));
        assert!(prefill.name.is_none());
        let utm = req.attribution.unwrap();
        assert_eq!(utm.campaign.as_deref(), Some("demo_call"));
    }
}

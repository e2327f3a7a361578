use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrefillFields {
    pub name: Option<String>,
    pub email: Option<String>,
    // sorted so composed URLs are stable
    #[serde(default)]
    pub custom_answers: BTreeMap<String, String>,
}

impl PrefillFields {
    pub fn with_answer(mut self, key: impl Into<String>, answer: impl Into<String>) -> Self {
        self.custom_answers.insert(key.into(), answer.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AttributionFields {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub content: Option<String>,
    pub term: Option<String>,
}

impl AttributionFields {
    pub fn landing_page(campaign: &str) -> Self {
        Self {
            source: Some("website".to_string()),
            medium: Some("landing_page".to_string()),
            campaign: Some(campaign.to_string()),
            content: None,
            term: None,
        }
    }

    pub fn params(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("utmSource", self.source.as_deref()),
            ("utmMedium", self.medium.as_deref()),
            ("utmCampaign", self.campaign.as_deref()),
            ("utmContent", self.content.as_deref()),
            ("utmTerm", self.term.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkRequest {
    pub endpoint: String,
    pub prefill: Option<PrefillFields>,
    pub attribution: Option<AttributionFields>,
}

impl LinkRequest {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            prefill: None,
            attribution: None,
        }
    }

    pub fn prefill(mut self, prefill: PrefillFields) -> Self {
        self.prefill = Some(prefill);
        self
    }

    pub fn attribution(mut self, attribution: AttributionFields) -> Self {
        self.attribution = Some(attribution);
        self
    }
}

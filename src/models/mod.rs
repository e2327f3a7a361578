pub mod intent;
pub mod link_request;

pub use intent::{default_intents, IntentPreset};
pub use link_request::{AttributionFields, LinkRequest, PrefillFields};

//! Flow Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackKind;

/// Per-form settings for a `WaitlistFlow`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Button label while a submission is in flight
    #[serde(default = "default_loading_label")]
    pub loading_label: String,

    /// How long an error message stays attached, in milliseconds
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u64,

    /// How long a success message stays attached, in milliseconds
    #[serde(default = "default_success_display_ms")]
    pub success_display_ms: u64,

    /// `source` field sent to the relay
    #[serde(default = "default_source")]
    pub source: String,

    /// `message` field sent to the relay
    #[serde(default = "default_message")]
    pub message: String,
}

fn default_loading_label() -> String {
    "Joining...".into()
}

const fn default_error_display_ms() -> u64 {
    3_000
}

const fn default_success_display_ms() -> u64 {
    5_000
}

fn default_source() -> String {
    "Compound Waitlist Landing Page".into()
}

fn default_message() -> String {
    "New waitlist signup from Compound landing page".into()
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            loading_label: default_loading_label(),
            error_display_ms: default_error_display_ms(),
            success_display_ms: default_success_display_ms(),
            source: default_source(),
            message: default_message(),
        }
    }
}

impl FlowConfig {
    /// Display time for a feedback message of the given kind
    pub const fn display_duration(&self, kind: FeedbackKind) -> Duration {
        match kind {
            FeedbackKind::Error => Duration::from_millis(self.error_display_ms),
            FeedbackKind::Success => Duration::from_millis(self.success_display_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_config_defaults() {
        let config = FlowConfig::default();
        assert_eq!(config.loading_label, "Joining...");
        assert_eq!(config.display_duration(FeedbackKind::Error), Duration::from_secs(3));
        assert_eq!(config.display_duration(FeedbackKind::Success), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: FlowConfig =
            serde_json::from_str(r#"{ "source": "Footer form" }"#).unwrap();
        assert_eq!(config.source, "Footer form");
        assert_eq!(config.message, "New waitlist signup from Compound landing page");
        assert_eq!(config.error_display_ms, 3_000);
    }
}

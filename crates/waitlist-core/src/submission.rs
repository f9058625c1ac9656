//! Submission Attempts
//!
//! An attempt exists from the moment a valid email puts the button into
//! `Loading` until the relay answers. Nothing about it is persisted.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::FlowConfig;
use crate::email::WaitlistEmail;

/// One in-flight signup
#[derive(Clone, Debug)]
pub struct SubmissionAttempt {
    pub email: WaitlistEmail,
    pub started_at: DateTime<Utc>,
}

impl SubmissionAttempt {
    pub fn new(email: WaitlistEmail) -> Self {
        Self {
            email,
            started_at: Utc::now(),
        }
    }

    /// Build the relay body for this attempt
    pub fn payload(&self, config: &FlowConfig) -> SubmissionPayload {
        SubmissionPayload {
            email: self.email.as_str().to_string(),
            timestamp: iso_timestamp(self.started_at),
            source: config.source.clone(),
            message: config.message.clone(),
        }
    }
}

/// JSON body posted to the relay
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub email: String,
    /// ISO-8601, UTC, millisecond precision
    pub timestamp: String,
    pub source: String,
    pub message: String,
}

/// `2026-10-19T08:30:00.000Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

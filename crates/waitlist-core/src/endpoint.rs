//! Submission Endpoint Strategy
//!
//! The relay that receives waitlist signups, behind a trait so the flow can
//! be driven against a real HTTP relay, a mock, or anything else.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use waitlist_core::endpoint::SubmissionEndpoint;
//!
//! let endpoint = FormRelayEndpoint::new(RelayConfig::default())?;
//! endpoint.submit(&payload).await?;
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, WaitlistError};
use crate::submission::SubmissionPayload;

/// Strategy trait for submission relays
///
/// `Ok(())` means the relay answered 2xx. Browser futures are not `Send`, so
/// the bound is relaxed on `wasm32`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SubmissionEndpoint: Send + Sync {
    /// Deliver one signup
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()>;

    /// Endpoint name for logs
    fn name(&self) -> &str;
}

/// Scripted result for `MockEndpoint`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockOutcome {
    Accept,
    Reject(u16),
    Unreachable,
}

/// In-memory endpoint for tests and offline demos.
///
/// Pops one scripted outcome per call and accepts once the script runs out.
#[derive(Default)]
pub struct MockEndpoint {
    script: Mutex<VecDeque<MockOutcome>>,
    received: Mutex<Vec<SubmissionPayload>>,
}

impl MockEndpoint {
    pub fn with_script(outcomes: impl IntoIterator<Item = MockOutcome>) -> Self {
        Self {
            script: Mutex::new(outcomes.into_iter().collect()),
            received: Mutex::default(),
        }
    }

    /// Payloads received so far
    pub fn received(&self) -> Vec<SubmissionPayload> {
        self.received.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SubmissionEndpoint for MockEndpoint {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()> {
        self.received.lock().unwrap().push(payload.clone());

        let outcome = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockOutcome::Accept);

        match outcome {
            MockOutcome::Accept => Ok(()),
            MockOutcome::Reject(status) => Err(WaitlistError::SubmissionRejected(status)),
            MockOutcome::Unreachable => Err(WaitlistError::Transport("connection refused".into())),
        }
    }

    fn name(&self) -> &str {
        "MockEndpoint"
    }
}

//! # waitlist-relay
//!
//! HTTP relay endpoints for waitlist signups.
//!
//! ## Endpoints
//!
//! - **FormRelay**: JSON `POST` to a Formspree-style form relay that forwards
//!   each submission to the operator's inbox
//!
//! ## Usage
//!
//! ```rust,ignore
//! use waitlist_relay::{FormRelayEndpoint, RelayConfig};
//!
//! let endpoint = FormRelayEndpoint::new(RelayConfig::default())?;
//! let flow = WaitlistFlow::builder()
//!     .endpoint(Arc::new(endpoint))
//!     .view(view)
//!     .scheduler(scheduler)
//!     .build()?;
//! ```

pub mod relay;

pub use relay::{FormRelayEndpoint, RelayConfig};

// Re-export core types for convenience
pub use waitlist_core::{Result, SubmissionEndpoint, SubmissionPayload, WaitlistError};

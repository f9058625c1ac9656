//! # waitlist-core
//!
//! Platform-agnostic waitlist submission flow: email validation, the submit
//! button state machine, feedback message lifecycle and optimistic counters.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       WaitlistFlow                            │
//! │  ┌────────────┐  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │ ButtonState│  │ FeedbackBoard│  │ SubmissionEndpoint   │  │
//! │  │ Idle/Load  │──│  + Scheduler │──│   (Strategy)         │  │
//! │  └────────────┘  └──────────────┘  └──────────────────────┘  │
//! │         │                │                                    │
//! │         └──── FormView ──┴──── CounterDisplay                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The flow never touches a DOM directly. The browser front-end (or a test)
//! supplies a `FormView`, a `Scheduler` and counter displays; the network
//! side is any `SubmissionEndpoint`.

pub mod button;
pub mod config;
pub mod counter;
pub mod email;
pub mod endpoint;
pub mod error;
pub mod feedback;
pub mod flow;
pub mod schedule;
pub mod submission;

pub use button::ButtonState;
pub use config::FlowConfig;
pub use counter::CounterDisplay;
pub use email::WaitlistEmail;
pub use endpoint::{MockEndpoint, MockOutcome, SubmissionEndpoint};
pub use error::{ErrorKind, Result, WaitlistError};
pub use feedback::{FeedbackBoard, FeedbackHandle, FeedbackKind, FeedbackMessage};
pub use flow::{FormView, WaitlistFlow};
pub use schedule::{ManualScheduler, Scheduler};
pub use submission::{SubmissionAttempt, SubmissionPayload};

//! Waitlist Submission Flow
//!
//! Drives one email input / submit button pair through
//! validate → loading → submit → resolved.
//!
//! Each form on a page gets its own `WaitlistFlow`, built from explicit
//! bindings. Flows share nothing, so several can have attempts in flight at
//! once. Everything runs on the UI thread: state sits in a `RefCell` that is
//! never borrowed across an `.await` or while calling into the view.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::button::ButtonState;
use crate::config::FlowConfig;
use crate::counter::{self, CounterDisplay};
use crate::email::WaitlistEmail;
use crate::endpoint::SubmissionEndpoint;
use crate::error::{Result, WaitlistError};
use crate::feedback::{
    FeedbackBoard, FeedbackHandle, FeedbackKind, FeedbackMessage, FAILURE_TEXT,
    INVALID_EMAIL_TEXT, SUCCESS_TEXT,
};
use crate::schedule::Scheduler;
use crate::submission::SubmissionAttempt;

/// The UI a flow renders into
pub trait FormView {
    /// Label currently shown on the submit button
    fn button_label(&self) -> String;

    /// Show `label`; `loading` also disables the button
    fn render_button(&self, label: &str, loading: bool);

    /// Attach, replace or (with `None`) remove the message of `kind`
    fn render_feedback(&self, kind: FeedbackKind, message: Option<&FeedbackMessage>);

    /// Tint the input border, or reset it
    fn render_tone(&self, tone: Option<FeedbackKind>);

    fn clear_email(&self);
}

#[derive(Default)]
struct FlowState {
    button: ButtonState,
    feedback: FeedbackBoard,
}

struct Shared {
    config: FlowConfig,
    view: Rc<dyn FormView>,
    endpoint: Arc<dyn SubmissionEndpoint>,
    scheduler: Rc<dyn Scheduler>,
    counters: Vec<Rc<dyn CounterDisplay>>,
    state: RefCell<FlowState>,
}

/// Submission flow for a single form. Cloning yields another handle to the
/// same flow.
#[derive(Clone)]
pub struct WaitlistFlow {
    shared: Rc<Shared>,
}

impl WaitlistFlow {
    pub fn builder() -> WaitlistFlowBuilder {
        WaitlistFlowBuilder::new()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.borrow().button.is_loading()
    }

    /// Message of `kind` currently attached to the input
    pub fn feedback(&self, kind: FeedbackKind) -> Option<FeedbackMessage> {
        self.shared.state.borrow().feedback.current(kind).cloned()
    }

    /// Validate and submit in one go
    pub async fn attempt_submit(&self, raw_email: &str) -> Result<()> {
        let attempt = self.begin(raw_email)?;
        self.submit(attempt).await
    }

    /// Synchronous half of a signup.
    ///
    /// On a valid email the button is already in `Loading` when this
    /// returns; hand the attempt to [`submit`](Self::submit). An invalid
    /// email shows an error and never reaches the network.
    pub fn begin(&self, raw_email: &str) -> Result<SubmissionAttempt> {
        if self.is_loading() {
            tracing::debug!("Signup ignored, submission already in flight");
            return Err(WaitlistError::AlreadySubmitting);
        }

        let email = match WaitlistEmail::parse(raw_email) {
            Ok(email) => email,
            Err(err) => {
                tracing::debug!(%err, "Rejected waitlist email");
                self.show(FeedbackKind::Error, INVALID_EMAIL_TEXT);
                return Err(err);
            }
        };

        let label = self.shared.view.button_label();
        self.shared.state.borrow_mut().button.start_loading(label)?;
        self.shared
            .view
            .render_button(&self.shared.config.loading_label, true);
        tracing::debug!(email = %email, "Waitlist button loading");

        Ok(SubmissionAttempt::new(email))
    }

    /// Send the attempt to the endpoint and resolve the UI.
    ///
    /// The button always leaves `Loading`, whichever way the relay answers.
    /// Failures are terminal for the attempt; the user resubmits by hand.
    pub async fn submit(&self, attempt: SubmissionAttempt) -> Result<()> {
        let payload = attempt.payload(&self.shared.config);
        let result = self.shared.endpoint.submit(&payload).await;

        self.restore_button();

        match result {
            Ok(()) => {
                self.show(FeedbackKind::Success, SUCCESS_TEXT);
                self.shared.view.clear_email();
                self.track_conversion(&attempt.email);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    endpoint = self.shared.endpoint.name(),
                    error = %err,
                    "Waitlist submission failed"
                );
                self.show(FeedbackKind::Error, FAILURE_TEXT);
                Err(err)
            }
        }
    }

    fn restore_button(&self) {
        let label = self.shared.state.borrow_mut().button.finish();
        if let Some(label) = label {
            self.shared.view.render_button(&label, false);
        }
    }

    fn show(&self, kind: FeedbackKind, text: &str) {
        let handle = self.shared.state.borrow_mut().feedback.show(kind, text);
        self.render_feedback(kind);

        let flow = Rc::downgrade(&self.shared);
        self.shared.scheduler.schedule(
            self.shared.config.display_duration(kind),
            Box::new(move || dismiss(&flow, handle)),
        );
    }

    fn render_feedback(&self, kind: FeedbackKind) {
        let (message, tone) = {
            let state = self.shared.state.borrow();
            (state.feedback.current(kind).cloned(), state.feedback.tone())
        };
        self.shared.view.render_feedback(kind, message.as_ref());
        self.shared.view.render_tone(tone);
    }

    fn track_conversion(&self, email: &WaitlistEmail) {
        tracing::info!(
            target: "waitlist::conversion",
            email = %email,
            endpoint = self.shared.endpoint.name(),
            "Waitlist signup"
        );

        let bumped = counter::bump_displays(&self.shared.counters);
        tracing::debug!(bumped, "Optimistic counter update");
    }
}

/// Timer body for a feedback message. Does nothing if the flow is gone or
/// the message was already replaced.
fn dismiss(flow: &Weak<Shared>, handle: FeedbackHandle) {
    let Some(shared) = flow.upgrade() else {
        return;
    };
    let flow = WaitlistFlow { shared };

    let removed = flow.shared.state.borrow_mut().feedback.dismiss(handle);
    if removed {
        flow.render_feedback(handle.kind);
    } else {
        let tone = flow.shared.state.borrow().feedback.tone();
        flow.shared.view.render_tone(tone);
    }
}

/// Builder for `WaitlistFlow`
pub struct WaitlistFlowBuilder {
    config: FlowConfig,
    view: Option<Rc<dyn FormView>>,
    endpoint: Option<Arc<dyn SubmissionEndpoint>>,
    scheduler: Option<Rc<dyn Scheduler>>,
    counters: Vec<Rc<dyn CounterDisplay>>,
}

impl Default for WaitlistFlowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitlistFlowBuilder {
    pub fn new() -> Self {
        Self {
            config: FlowConfig::default(),
            view: None,
            endpoint: None,
            scheduler: None,
            counters: Vec::new(),
        }
    }

    pub fn config(mut self, config: FlowConfig) -> Self {
        self.config = config;
        self
    }

    pub fn view(mut self, view: Rc<dyn FormView>) -> Self {
        self.view = Some(view);
        self
    }

    pub fn endpoint(mut self, endpoint: Arc<dyn SubmissionEndpoint>) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn scheduler(mut self, scheduler: Rc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn counters(mut self, displays: impl IntoIterator<Item = Rc<dyn CounterDisplay>>) -> Self {
        self.counters.extend(displays);
        self
    }

    pub fn build(self) -> Result<WaitlistFlow> {
        let view = self
            .view
            .ok_or_else(|| WaitlistError::Config("Form view is required".into()))?;
        let endpoint = self
            .endpoint
            .ok_or_else(|| WaitlistError::Config("Submission endpoint is required".into()))?;
        let scheduler = self
            .scheduler
            .ok_or_else(|| WaitlistError::Config("Scheduler is required".into()))?;

        Ok(WaitlistFlow {
            shared: Rc::new(Shared {
                config: self.config,
                view,
                endpoint,
                scheduler,
                counters: self.counters,
                state: RefCell::new(FlowState::default()),
            }),
        })
    }
}

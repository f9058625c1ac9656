//! Leptos bindings for the waitlist flow
//!
//! Every form owns a `FormSignals` bundle; the flow renders into it through
//! `SignalFormView`. Writes use `try_*` so a timer that fires after the form
//! was unmounted is a no-op.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use waitlist_core::{
    schedule::Task, CounterDisplay, FeedbackKind, FeedbackMessage, FormView, Scheduler,
    SubmissionEndpoint, WaitlistError, WaitlistFlow,
};

/// Relay shared by every form on the page
#[derive(Clone)]
pub struct SharedEndpoint(pub Arc<dyn SubmissionEndpoint>);

/// Counter displays bumped after a successful signup
#[derive(Clone, Default)]
pub struct PageCounters(pub Vec<RwSignal<String>>);

/// Reactive state of one form
#[derive(Clone, Copy)]
pub struct FormSignals {
    pub email: RwSignal<String>,
    pub label: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<FeedbackMessage>>,
    pub success: RwSignal<Option<FeedbackMessage>>,
    pub tone: RwSignal<Option<FeedbackKind>>,
}

impl FormSignals {
    pub fn new(button_label: &str) -> Self {
        Self {
            email: RwSignal::new(String::new()),
            label: RwSignal::new(button_label.to_string()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            tone: RwSignal::new(None),
        }
    }

    /// Inline style for the email input's border
    pub fn input_style(&self) -> String {
        self.tone
            .get()
            .map(|kind| format!("border-color: {}", kind.color()))
            .unwrap_or_default()
    }
}

pub struct SignalFormView(pub FormSignals);

impl FormView for SignalFormView {
    fn button_label(&self) -> String {
        self.0.label.try_get_untracked().unwrap_or_default()
    }

    fn render_button(&self, label: &str, loading: bool) {
        self.0.label.try_set(label.to_string());
        self.0.loading.try_set(loading);
    }

    fn render_feedback(&self, kind: FeedbackKind, message: Option<&FeedbackMessage>) {
        let slot = match kind {
            FeedbackKind::Error => self.0.error,
            FeedbackKind::Success => self.0.success,
        };
        slot.try_set(message.cloned());
    }

    fn render_tone(&self, tone: Option<FeedbackKind>) {
        self.0.tone.try_set(tone);
    }

    fn clear_email(&self) {
        self.0.email.try_set(String::new());
    }
}

/// `setTimeout`-backed scheduler
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}

#[derive(Clone, Copy)]
pub struct SignalCounter(pub RwSignal<String>);

impl CounterDisplay for SignalCounter {
    fn text(&self) -> String {
        self.0.try_get_untracked().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.try_set(text.to_string());
    }
}

/// Wire a flow to `signals` and the endpoint/counters in context
pub fn build_flow(signals: FormSignals) -> waitlist_core::Result<WaitlistFlow> {
    let endpoint = use_context::<SharedEndpoint>()
        .ok_or_else(|| WaitlistError::Config("No submission endpoint in context".into()))?;
    let counters = use_context::<PageCounters>().unwrap_or_default();

    WaitlistFlow::builder()
        .view(Rc::new(SignalFormView(signals)))
        .endpoint(endpoint.0)
        .scheduler(Rc::new(TimeoutScheduler))
        .counters(
            counters
                .0
                .into_iter()
                .map(|signal| Rc::new(SignalCounter(signal)) as Rc<dyn CounterDisplay>),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use waitlist_core::counter::bump_displays;

    use super::*;

    #[test]
    fn test_view_writes_signals() {
        let signals = FormSignals::new("Join Waitlist");
        let view = SignalFormView(signals);

        view.render_button("Joining...", true);
        assert_eq!(view.button_label(), "Joining...");
        assert!(signals.loading.get_untracked());

        signals.email.set("alice@example.com".into());
        view.clear_email();
        assert_eq!(signals.email.get_untracked(), "");

        view.render_tone(Some(FeedbackKind::Error));
        assert_eq!(signals.tone.get_untracked(), Some(FeedbackKind::Error));
    }

    #[test]
    fn test_feedback_goes_to_matching_slot() {
        let signals = FormSignals::new("Join Waitlist");
        let view = SignalFormView(signals);
        let message = FeedbackMessage {
            id: 7,
            kind: FeedbackKind::Success,
            text: "Successfully joined the waitlist!".into(),
        };

        view.render_feedback(FeedbackKind::Success, Some(&message));
        assert_eq!(signals.success.get_untracked(), Some(message));
        assert_eq!(signals.error.get_untracked(), None);

        view.render_feedback(FeedbackKind::Success, None);
        assert_eq!(signals.success.get_untracked(), None);
    }

    #[test]
    fn test_signal_counter_bumps() {
        let members = SignalCounter(RwSignal::new("1,234".into()));
        let share = SignalCounter(RwSignal::new("98%".into()));
        let displays: Vec<Rc<dyn CounterDisplay>> = vec![Rc::new(members), Rc::new(share)];

        assert_eq!(bump_displays(&displays), 1);
        assert_eq!(members.0.get_untracked(), "1,235");
        assert_eq!(share.0.get_untracked(), "98%");
    }
}

//! Feedback Messages
//!
//! Inline messages attached next to a form's email input. Each form keeps one
//! slot per kind: showing a new message of a kind replaces the old one, and
//! every message is released either by its own timer or by being replaced.
//!
//! Removal always targets a specific message through its `FeedbackHandle`.
//! A timer that fires after its message was superseded finds a different id
//! in the slot and leaves the newer message (and its input tone) alone.
//!
//! The input tone follows the most recent message still attached, so
//! dismissing an error while a success is showing turns the border green.

use serde::{Deserialize, Serialize};

pub const INVALID_EMAIL_TEXT: &str = "Please enter a valid email address";
pub const SUCCESS_TEXT: &str = "Successfully joined the waitlist!";
pub const FAILURE_TEXT: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Error,
    Success,
}

impl FeedbackKind {
    /// CSS class of the message element
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Error => "error-message",
            Self::Success => "success-message",
        }
    }

    /// Border and text colour used for this kind
    pub const fn color(self) -> &'static str {
        match self {
            Self::Error => "#ef4444",
            Self::Success => "#10b981",
        }
    }
}

/// A message currently (or formerly) attached to the input
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub id: u64,
    pub kind: FeedbackKind,
    pub text: String,
}

/// Identifies one specific message instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeedbackHandle {
    pub id: u64,
    pub kind: FeedbackKind,
}

/// Feedback attached to a single input
#[derive(Debug, Default)]
pub struct FeedbackBoard {
    next_id: u64,
    error: Option<FeedbackMessage>,
    success: Option<FeedbackMessage>,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message, replacing any existing message of the same kind
    pub fn show(&mut self, kind: FeedbackKind, text: impl Into<String>) -> FeedbackHandle {
        self.next_id += 1;
        let handle = FeedbackHandle { id: self.next_id, kind };
        *self.slot_mut(kind) = Some(FeedbackMessage {
            id: handle.id,
            kind,
            text: text.into(),
        });
        handle
    }

    /// Remove the message behind `handle` if it is still attached.
    ///
    /// Returns `true` when something was removed.
    pub fn dismiss(&mut self, handle: FeedbackHandle) -> bool {
        let slot = self.slot_mut(handle.kind);
        if slot.as_ref().is_some_and(|m| m.id == handle.id) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub const fn current(&self, kind: FeedbackKind) -> Option<&FeedbackMessage> {
        match kind {
            FeedbackKind::Error => self.error.as_ref(),
            FeedbackKind::Success => self.success.as_ref(),
        }
    }

    /// Kind currently tinting the input: that of the newest attached message
    pub fn tone(&self) -> Option<FeedbackKind> {
        [self.error.as_ref(), self.success.as_ref()]
            .into_iter()
            .flatten()
            .max_by_key(|m| m.id)
            .map(|m| m.kind)
    }

    const fn slot_mut(&mut self, kind: FeedbackKind) -> &mut Option<FeedbackMessage> {
        match kind {
            FeedbackKind::Error => &mut self.error,
            FeedbackKind::Success => &mut self.success,
        }
    }
}

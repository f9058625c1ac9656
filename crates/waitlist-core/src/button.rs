//! Submit Button State Machine
//!
//! `Idle → Loading → Idle`. The label shown before loading is captured on
//! every transition into `Loading` and handed back on the way out.

use crate::error::{Result, WaitlistError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Idle,
    Loading {
        original_label: String,
    },
}

impl ButtonState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Enter `Loading`, remembering `current_label`
    pub fn start_loading(&mut self, current_label: impl Into<String>) -> Result<()> {
        if self.is_loading() {
            return Err(WaitlistError::AlreadySubmitting);
        }
        *self = Self::Loading {
            original_label: current_label.into(),
        };
        Ok(())
    }

    /// Return to `Idle`, yielding the label to restore
    pub fn finish(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Loading { original_label } => Some(original_label),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_restores_label() {
        let mut state = ButtonState::default();
        state.start_loading("Join Waitlist").unwrap();
        assert!(state.is_loading());

        assert_eq!(state.finish().as_deref(), Some("Join Waitlist"));
        assert_eq!(state, ButtonState::Idle);
    }

    #[test]
    fn test_no_reentry_while_loading() {
        let mut state = ButtonState::default();
        state.start_loading("Join").unwrap();

        let err = state.start_loading("Joining...").unwrap_err();
        assert!(matches!(err, WaitlistError::AlreadySubmitting));
        assert_eq!(state.finish().as_deref(), Some("Join"));
    }

    #[test]
    fn test_finish_when_idle() {
        let mut state = ButtonState::Idle;
        assert_eq!(state.finish(), None);
    }
}

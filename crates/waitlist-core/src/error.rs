//! Error Types

use thiserror::Error;

use crate::feedback::{FAILURE_TEXT, INVALID_EMAIL_TEXT};

/// Result type alias for waitlist operations
pub type Result<T> = std::result::Result<T, WaitlistError>;

/// Waitlist error types
#[derive(Error, Debug)]
pub enum WaitlistError {
    /// Input did not have the `local@domain.tld` shape
    #[error("Invalid email format: {0:?}")]
    InvalidEmailFormat(String),

    /// Relay answered with a non-2xx status
    #[error("Submission rejected with HTTP status {0}")]
    SubmissionRejected(u16),

    /// Relay could not be reached or the request failed mid-flight
    #[error("Transport error: {0}")]
    Transport(String),

    /// A submission is already in flight for this form
    #[error("A submission is already in flight")]
    AlreadySubmitting,

    /// Flow or endpoint wired up incorrectly
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The user-visible error kinds.
///
/// Rejections and transport failures both collapse into `SubmissionFailed`;
/// the user is never told which one happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidEmailFormat,
    SubmissionFailed,
    /// Re-entry while loading; not surfaced in the UI
    Busy,
    /// Construction problem; not surfaced in the UI
    Config,
}

impl WaitlistError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEmailFormat(_) => ErrorKind::InvalidEmailFormat,
            Self::AlreadySubmitting => ErrorKind::Busy,
            Self::Config(_) => ErrorKind::Config,
            Self::SubmissionRejected(_) | Self::Transport(_) => ErrorKind::SubmissionFailed,
        }
    }

    /// Convert to the message shown next to the input, if any
    pub const fn user_message(&self) -> Option<&'static str> {
        match self.kind() {
            ErrorKind::InvalidEmailFormat => Some(INVALID_EMAIL_TEXT),
            ErrorKind::SubmissionFailed => Some(FAILURE_TEXT),
            ErrorKind::Busy | ErrorKind::Config => None,
        }
    }
}

use thiserror::Error;

use crate::constants::{FILL_ALL_FIELDS_ERROR, INVALID_CHARACTERS_ERROR, INVALID_EMAIL_ERROR};

/// Misuse of the attempt tracker. Only reachable through a programming error,
/// the orchestrator checks `can_spin` before every `begin_spin`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalStateError {
    #[error("a spin is already in progress")]
    SpinAlreadyInProgress,
    #[error("no attempts left")]
    NoAttemptsLeft,
    #[error("no spin in progress")]
    NotSpinning,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WheelConfigError {
    #[error("a wheel needs at least one segment")]
    NoSegments,
    #[error("winning segment {index} is outside a wheel of {segment_count} segments")]
    WinningSegmentOutOfRange { index: u32, segment_count: u32 },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionConfigError {
    #[error("a session needs at least one attempt")]
    NoAttempts,
    #[error("a spin needs at least one full rotation")]
    NoFullRotations,
}

/// Single failure signal for prize lookups. Transport errors, bad statuses and
/// malformed bodies all end up here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("prize lookup failed: {reason}")]
pub struct PrizeLookupError {
    pub reason: String,
}

impl PrizeLookupError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoginValidationError {
    #[error("empty field")]
    EmptyField,
    #[error("invalid email format")]
    InvalidEmailFormat,
    #[error("invalid characters")]
    InvalidCharacters,
}

impl LoginValidationError {
    /// Copy shown next to the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyField => FILL_ALL_FIELDS_ERROR,
            Self::InvalidEmailFormat => INVALID_EMAIL_ERROR,
            Self::InvalidCharacters => INVALID_CHARACTERS_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyField => "empty_field",
            Self::InvalidEmailFormat => "invalid_email_format",
            Self::InvalidCharacters => "invalid_characters",
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::constants::{winning_prize_message, NO_ATTEMPTS_LEFT, PRIZE_FETCH_ERROR, TRY_NEXT_TIME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl ResultMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Blank message used to wipe the process line when a spin starts.
    pub fn cleared() -> Self {
        Self::new("", MessageKind::Default)
    }

    pub fn try_next_time() -> Self {
        Self::new(TRY_NEXT_TIME, MessageKind::Error)
    }

    pub fn prize_won(prize: &str) -> Self {
        Self::new(winning_prize_message(prize), MessageKind::Success)
    }

    pub fn prize_unavailable() -> Self {
        Self::new(PRIZE_FETCH_ERROR, MessageKind::Error)
    }

    pub fn attempts_exhausted() -> Self {
        Self::new(NO_ATTEMPTS_LEFT, MessageKind::Success)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Where the session currently is. Replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    AwaitingLogin,
    Playing { attempts_left: u32, is_spinning: bool },
    SpinAnimating { attempts_left: u32, chosen_segment: u32 },
    Result { attempts_left: u32, message: ResultMessage },
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AwaitingLogin => "awaiting_login",
            Self::Playing { .. } => "playing",
            Self::SpinAnimating { .. } => "spin_animating",
            Self::Result { .. } => "result",
        }
    }

    pub fn attempts_left(&self) -> Option<u32> {
        match self {
            Self::AwaitingLogin => None,
            Self::Playing { attempts_left, .. }
            | Self::SpinAnimating { attempts_left, .. }
            | Self::Result { attempts_left, .. } => Some(*attempts_left),
        }
    }

    pub fn message(&self) -> Option<&ResultMessage> {
        match self {
            Self::Result { message, .. } => Some(message),
            _ => None,
        }
    }

    /// States the wheel is visible in and idle.
    pub(crate) fn is_on_wheel(&self) -> bool {
        matches!(self, Self::Playing { .. } | Self::Result { .. })
    }
}

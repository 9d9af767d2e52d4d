use crate::error::IllegalStateError;

/// Spin budget for one session plus the in-flight flag. The flag is the only
/// thing that keeps two spins from overlapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptTracker {
    remaining: u32,
    is_spinning: bool,
}

impl AttemptTracker {
    pub fn new(total: u32) -> Self {
        Self {
            remaining: total,
            is_spinning: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn can_spin(&self) -> bool {
        !self.is_spinning && self.remaining > 0
    }

    pub fn begin_spin(&mut self) -> Result<(), IllegalStateError> {
        if self.is_spinning {
            return Err(IllegalStateError::SpinAlreadyInProgress);
        }
        if self.remaining == 0 {
            return Err(IllegalStateError::NoAttemptsLeft);
        }
        self.is_spinning = true;
        Ok(())
    }

    pub fn complete_spin(&mut self) -> Result<(), IllegalStateError> {
        if !self.is_spinning {
            return Err(IllegalStateError::NotSpinning);
        }
        self.is_spinning = false;
        // begin_spin refuses to start with nothing left
        self.remaining -= 1;
        Ok(())
    }

    pub fn reset(&mut self, total: u32) {
        self.remaining = total;
        self.is_spinning = false;
    }
}

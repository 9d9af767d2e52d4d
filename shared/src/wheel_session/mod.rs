//! Session core for the prize wheel: attempt bookkeeping, spin resolution and
//! the state machine tying them to the presentation layer.

mod attempts;
mod boundary;
mod orchestrator;
mod resolver;
mod state;

#[cfg(test)]
mod test_support;

pub use attempts::AttemptTracker;
pub use boundary::{Pacer, PrizeClient, WheelView};
pub use orchestrator::{SessionOrchestrator, SpinReport};
pub use resolver::SpinResolver;
pub use state::{MessageKind, ResultMessage, SessionState};

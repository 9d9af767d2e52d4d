//! Seams between the session core and the outside world. The browser app
//! implements these with Yew and gloo; tests use scripted fakes.

use std::future::Future;
use std::time::Duration;

use crate::error::PrizeLookupError;

use super::state::ResultMessage;

pub trait WheelView {
    /// Draws the wheel screen from scratch.
    fn render(&self, attempts_left: u32, is_spinning: bool, message: Option<&ResultMessage>);

    fn update_spin_control(&self, attempts_left: u32, is_spinning: bool);

    fn show_message(&self, message: &ResultMessage);

    /// Turns the wheel clockwise by `rotation_degrees`. Completes once, after
    /// the rotation has visibly settled.
    fn run_spin(&self, rotation_degrees: f64) -> impl Future<Output = ()>;

    fn clear(&self);
}

pub trait PrizeClient {
    fn fetch_prize(&self) -> impl Future<Output = Result<String, PrizeLookupError>>;
}

/// Timer used for pacing and timeouts.
pub trait Pacer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

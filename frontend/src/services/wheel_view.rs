use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use gloo_render::request_animation_frame;
use shared::wheel_session::{ResultMessage, WheelView};
use yew::prelude::*;

use crate::components::wheel_utils::{animated_rotation, spin_progress};

/// Resolves on the next animation frame with its timestamp in milliseconds.
async fn next_frame() -> Option<f64> {
    let (tx, rx) = oneshot::channel();
    // Dropping the handle cancels the frame, keep it until the frame fires
    let _frame = request_animation_frame(move |timestamp| {
        let _ = tx.send(timestamp);
    });
    rx.await.ok()
}

/// Setters for the state the wheel screen renders from.
#[derive(Clone)]
pub struct WheelHandles {
    pub visible: UseStateSetter<bool>,
    pub attempts_left: UseStateSetter<u32>,
    pub is_spinning: UseStateSetter<bool>,
    pub message: UseStateSetter<ResultMessage>,
    pub rotation: UseStateSetter<f64>,
}

/// Drives the Yew wheel screen on behalf of the session.
pub struct YewWheelView {
    handles: WheelHandles,
    spin_duration: Duration,
    resting_angle: Rc<Cell<f64>>,
}

impl YewWheelView {
    pub fn new(handles: WheelHandles, spin_duration: Duration) -> Self {
        Self {
            handles,
            spin_duration,
            resting_angle: Rc::new(Cell::new(0.0)),
        }
    }
}

impl WheelView for YewWheelView {
    fn render(&self, attempts_left: u32, is_spinning: bool, message: Option<&ResultMessage>) {
        self.handles.attempts_left.set(attempts_left);
        self.handles.is_spinning.set(is_spinning);
        self.handles
            .message
            .set(message.cloned().unwrap_or_else(ResultMessage::cleared));
        self.handles.rotation.set(self.resting_angle.get());
        self.handles.visible.set(true);
    }

    fn update_spin_control(&self, attempts_left: u32, is_spinning: bool) {
        self.handles.attempts_left.set(attempts_left);
        self.handles.is_spinning.set(is_spinning);
    }

    fn show_message(&self, message: &ResultMessage) {
        self.handles.message.set(message.clone());
    }

    fn run_spin(&self, rotation_degrees: f64) -> impl Future<Output = ()> {
        let rotation = self.handles.rotation.clone();
        let resting_angle = self.resting_angle.clone();
        let duration_ms = self.spin_duration.as_secs_f64() * 1000.0;

        async move {
            let from = resting_angle.get();
            let mut started = None;
            while let Some(timestamp) = next_frame().await {
                let start = *started.get_or_insert(timestamp);
                let progress = spin_progress(timestamp - start, duration_ms);
                rotation.set(animated_rotation(from, rotation_degrees, progress));
                if progress >= 1.0 {
                    break;
                }
            }

            // Re-base so the next spin starts from a small angle
            let settled = rotation_degrees.rem_euclid(360.0);
            resting_angle.set(settled);
            rotation.set(settled);
            log::debug!("wheel settled at {:.1} degrees", settled);
        }
    }

    fn clear(&self) {
        self.handles.visible.set(false);
        self.handles.is_spinning.set(false);
        self.handles.message.set(ResultMessage::cleared());
        self.resting_angle.set(0.0);
        self.handles.rotation.set(0.0);
    }
}

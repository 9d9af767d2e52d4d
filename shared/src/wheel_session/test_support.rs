//! Scripted collaborators for driving a session without a browser or clock.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future;

use crate::error::PrizeLookupError;
use crate::shared_wheel_game::SegmentRng;

use super::boundary::{Pacer, PrizeClient, WheelView};
use super::state::ResultMessage;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Render { attempts_left: u32, is_spinning: bool, message: Option<ResultMessage> },
    SpinControl { attempts_left: u32, is_spinning: bool },
    Message(ResultMessage),
    Spin(f64),
    Clear,
}

#[derive(Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
    gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
}

impl RecordingView {
    /// The next `run_spin` stays parked until the returned sender fires.
    pub fn hold_next_spin(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    /// Non-blank messages in display order.
    pub fn messages(&self) -> Vec<ResultMessage> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Message(message) if !message.is_empty() => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn spins(&self) -> Vec<f64> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Spin(rotation) => Some(*rotation),
                _ => None,
            })
            .collect()
    }
}

impl WheelView for RecordingView {
    fn render(&self, attempts_left: u32, is_spinning: bool, message: Option<&ResultMessage>) {
        self.events.borrow_mut().push(ViewEvent::Render {
            attempts_left,
            is_spinning,
            message: message.cloned(),
        });
    }

    fn update_spin_control(&self, attempts_left: u32, is_spinning: bool) {
        self.events
            .borrow_mut()
            .push(ViewEvent::SpinControl { attempts_left, is_spinning });
    }

    fn show_message(&self, message: &ResultMessage) {
        self.events.borrow_mut().push(ViewEvent::Message(message.clone()));
    }

    fn run_spin(&self, rotation_degrees: f64) -> impl Future<Output = ()> {
        self.events.borrow_mut().push(ViewEvent::Spin(rotation_degrees));
        let gate = self.gates.borrow_mut().pop_front();
        async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
        }
    }

    fn clear(&self) {
        self.events.borrow_mut().push(ViewEvent::Clear);
    }
}

#[derive(Clone)]
enum Lookup {
    Prize(String),
    Fail,
    Hang,
}

pub struct FakePrizeClient {
    lookup: Lookup,
    calls: Cell<u32>,
}

impl FakePrizeClient {
    pub fn prize(prize: &str) -> Self {
        Self::with(Lookup::Prize(prize.to_string()))
    }

    pub fn failing() -> Self {
        Self::with(Lookup::Fail)
    }

    pub fn hanging() -> Self {
        Self::with(Lookup::Hang)
    }

    fn with(lookup: Lookup) -> Self {
        Self {
            lookup,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl PrizeClient for FakePrizeClient {
    fn fetch_prize(&self) -> impl Future<Output = Result<String, PrizeLookupError>> {
        self.calls.set(self.calls.get() + 1);
        let lookup = self.lookup.clone();
        async move {
            match lookup {
                Lookup::Prize(prize) => Ok(prize),
                Lookup::Fail => Err(PrizeLookupError::new("status 500")),
                Lookup::Hang => future::pending().await,
            }
        }
    }
}

/// Every sleep completes immediately; durations are recorded.
#[derive(Default)]
pub struct InstantPacer {
    sleeps: RefCell<Vec<Duration>>,
}

impl InstantPacer {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

impl Pacer for InstantPacer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        self.sleeps.borrow_mut().push(duration);
        future::ready(())
    }
}

pub struct ScriptedSegments(pub VecDeque<u32>);

impl ScriptedSegments {
    pub fn new(segments: impl IntoIterator<Item = u32>) -> Self {
        Self(segments.into_iter().collect())
    }
}

impl SegmentRng for ScriptedSegments {
    fn next_segment(&mut self, _segment_count: u32) -> u32 {
        self.0.pop_front().expect("script ran out of segments")
    }
}

use std::future::Future;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use shared::wheel_session::Pacer;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooPacer;

impl Pacer for GlooPacer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        TimeoutFuture::new(duration.as_millis().min(u32::MAX as u128) as u32)
    }
}

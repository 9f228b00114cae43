use gloo_timers::callback::Timeout;

use crate::presentation::Scheduler;

/// One-shot `setTimeout` tasks that are never cancelled
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

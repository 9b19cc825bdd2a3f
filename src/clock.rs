//! clock.rs
//!
//! Source of "now" for the render loop. The decomposition core never
//! reads the clock itself; the loop samples it once per tick and passes
//! the instant in, so tests can drive the core with fixed instants.

use chrono::{Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the host's local calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

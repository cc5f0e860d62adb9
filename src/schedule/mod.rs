//! Deferred work.
//!
//! A mismatched pair stays face up for a while before it is turned back.
//! That delay is modelled as an explicit task in a [`Scheduler`] rather than
//! a hidden timer callback:
//!
//! - queued tasks are dropped together with [`Scheduler::cancel_all`]
//! - it never blocks the caller
//! - it runs when its owner polls with the current [`Clock`] time, or when
//!   an async driver sleeps until the deadline
//!
//! Three clocks are provided: [`SystemClock`] for real time, [`TokioClock`]
//! for tokio's (pausable) time and [`ManualClock`] for tests that step time
//! by hand.

mod clock;
mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use scheduler::{ScheduledTask, Scheduler, TaskId};

//! `mm1-sim`: next-event engine for the M/M/1 queue.
//!
//! # Event loop
//!
//! ```text
//! reset()
//! next_arrival   = 0 + Exp(X)
//! next_departure = Idle
//! while now < total_time:
//!   if next_arrival < next_departure  (strict; Idle never wins)
//!     ① Arrival:   occupancy += 1; idle server starts service at once
//!                  (wait = 0), otherwise the customer joins the FIFO;
//!                  schedule the next arrival.
//!   else
//!     ② Departure: occupancy -= 1; the FIFO head starts service and its
//!                  wait is resolved; schedule the next departure or go Idle.
//!   record (now, kind, occupancy)
//! drop the synthetic first gap and any unresolved waits
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mm1_sim::QueueBuilder;
//!
//! let mut queue = QueueBuilder::new(1.1, 1.0).seed(42).build()?;
//! let summary = queue.simulate(6_000.0)?;
//! let timeline = queue.get_queue_timeline(60.0);
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod queue;


pub use builder::QueueBuilder;
pub use error::{SimError, SimResult};
pub use event::{EventKind, EventRecord, NextDeparture, QueueSample};
pub use observer::{NoopObserver, SimObserver};
pub use queue::{Mm1Queue, QueueTimeline, RunSummary};

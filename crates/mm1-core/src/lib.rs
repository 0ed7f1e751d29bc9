//! `mm1-core`: foundational types for the `mm1` queue simulator.
//!
//! This crate is a dependency of every other `mm1-*` crate.  It intentionally
//! has no `mm1-*` dependencies and minimal external ones (`rand`,
//! `rand_distr` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`time`]    | `SimTime`, `SimClock`                                 |
//! | [`config`]  | `QueueConfig` (means, optional seed)                  |
//! | [`rng`]     | `VariateSource` trait, `ExpSource`                    |
//! | [`error`]   | `QueueError`, `QueueResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `QueueConfig`, `SimTime`.|

pub mod config;
pub mod error;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::QueueConfig;
pub use error::{QueueError, QueueResult};
pub use rng::{ExpSource, VariateSource};
pub use time::{SimClock, SimTime};

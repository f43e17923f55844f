//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Reaper: sweeps expired entries out of an [`ExpiringCache`](crate::cache::ExpiringCache)

mod reaper;

pub use reaper::ReaperHandle;
pub(crate) use reaper::spawn_reaper;

//! Cache Module
//!
//! Provides the in-memory response cache with interval-based expiry.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ExpiringCache;
pub(crate) use store::WeakExpiringCache;

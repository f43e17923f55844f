//! Cache Entry Module
//!
//! Defines a single cached response body stamped with its creation time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A raw response body and the instant it was stored.
///
/// Entries are never mutated in place. Re-adding a key replaces the whole
/// entry, so the timestamp always belongs to the value next to it.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// When the entry was added
    pub created_at: Instant,
    /// The stored bytes
    pub value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    // == Age ==
    /// Returns how long ago the entry was created, as seen from `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `interval` at `now`.
    ///
    /// The comparison is strict: an entry whose age equals the interval
    /// exactly is still live and survives the sweep.
    pub fn is_expired(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) > interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(b"payload".to_vec());

        assert_eq!(entry.value, b"payload");
        assert!(entry.created_at <= Instant::now());
    }

    #[test]
    fn test_entry_fresh_is_not_expired() {
        let entry = CacheEntry::new(b"v".to_vec());

        assert!(!entry.is_expired(Instant::now(), Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expired_after_interval() {
        let entry = CacheEntry::new(b"v".to_vec());
        let later = entry.created_at + Duration::from_millis(101);

        assert!(entry.is_expired(later, Duration::from_millis(100)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(b"v".to_vec());
        let exactly = entry.created_at + Duration::from_millis(100);

        // Age equal to the interval is not yet expired
        assert!(!entry.is_expired(exactly, Duration::from_millis(100)));
    }

    #[test]
    fn test_age_saturates_for_earlier_instant() {
        let entry = CacheEntry::new(b"v".to_vec());
        let before = entry.created_at - Duration::from_millis(1);

        assert_eq!(entry.age(before), Duration::ZERO);
    }
}

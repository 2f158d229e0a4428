//! Single-entry snapshot cache with a fixed time-to-live.
//!
//! The whole attendance log is one entry. It is served while younger than
//! the TTL and dropped as soon as a write succeeds.

use crate::models::AttendanceLog;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing has been loaded yet.
    Empty,
    /// A snapshot exists and is younger than the TTL.
    Fresh,
    /// The snapshot expired or was invalidated.
    Stale,
}

#[derive(Debug)]
pub struct SnapshotCache {
    ttl: Duration,
    entry: Option<(Instant, AttendanceLog)>,
    invalidated: bool,
}

impl SnapshotCache {
    /// A zero TTL disables caching: every lookup misses.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: None,
            invalidated: false,
        }
    }

    pub fn state(&self, now: Instant) -> CacheState {
        match &self.entry {
            None if self.invalidated => CacheState::Stale,
            None => CacheState::Empty,
            Some((stored_at, _)) => {
                if now.saturating_duration_since(*stored_at) < self.ttl {
                    CacheState::Fresh
                } else {
                    CacheState::Stale
                }
            }
        }
    }

    /// The cached snapshot, if still fresh.
    pub fn get(&self, now: Instant) -> Option<&AttendanceLog> {
        match self.state(now) {
            CacheState::Fresh => self.entry.as_ref().map(|(_, log)| log),
            _ => None,
        }
    }

    pub fn put(&mut self, now: Instant, log: AttendanceLog) {
        self.entry = Some((now, log));
        self.invalidated = false;
    }

    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            self.invalidated = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceRecord;

    fn sample() -> AttendanceLog {
        AttendanceLog::new(vec![AttendanceRecord {
            name: "Alice".into(),
            timestamp: "2024-01-01 09:00:00".into(),
        }])
    }

    #[test]
    fn transitions_empty_fresh_stale() {
        let t0 = Instant::now();
        let mut cache = SnapshotCache::new(Duration::from_secs(60));
        assert_eq!(cache.state(t0), CacheState::Empty);

        cache.put(t0, sample());
        assert_eq!(cache.state(t0 + Duration::from_secs(59)), CacheState::Fresh);
        assert_eq!(cache.get(t0 + Duration::from_secs(59)), Some(&sample()));

        assert_eq!(cache.state(t0 + Duration::from_secs(60)), CacheState::Stale);
        assert!(cache.get(t0 + Duration::from_secs(60)).is_none());
    }

    #[test]
    fn invalidate_makes_entry_stale_immediately() {
        let t0 = Instant::now();
        let mut cache = SnapshotCache::new(Duration::from_secs(600));
        cache.put(t0, sample());
        cache.invalidate();
        assert_eq!(cache.state(t0), CacheState::Stale);
        assert!(cache.get(t0).is_none());

        cache.put(t0, AttendanceLog::default());
        assert_eq!(cache.state(t0), CacheState::Fresh);
    }

    #[test]
    fn zero_ttl_never_serves() {
        let t0 = Instant::now();
        let mut cache = SnapshotCache::new(Duration::ZERO);
        cache.put(t0, sample());
        assert!(cache.get(t0).is_none());
    }
}

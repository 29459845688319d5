use chrono::{DateTime, Duration, Local};

use crate::models::ReferenceRecord;

/// How long a loaded reference table stays fresh. The upstream spreadsheet
/// is regenerated on a multi-week cycle.
pub const DEFAULT_REFERENCE_TTL_DAYS: i64 = 21;

/// Time source for the cache, so tests can drive expiry with a manual
/// clock instead of sleeping.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Bounded-lifetime cache for the reference table: an explicit object with
/// a load timestamp and an explicit invalidate operation, rather than
/// hidden process-wide memoization.
#[derive(Clone, Debug)]
pub struct ReferenceCache<C = SystemClock> {
    ttl: Duration,
    clock: C,
    entry: Option<CacheEntry>,
}

#[derive(Clone, Debug)]
struct CacheEntry {
    loaded_at: DateTime<Local>,
    records: Vec<ReferenceRecord>,
}

impl ReferenceCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl Default for ReferenceCache {
    fn default() -> Self {
        Self::new(Duration::days(DEFAULT_REFERENCE_TTL_DAYS))
    }
}

impl<C: Clock> ReferenceCache<C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            entry: None,
        }
    }

    /// The cached records, if a load happened within the TTL window.
    pub fn fresh(&self) -> Option<&[ReferenceRecord]> {
        let entry = self.entry.as_ref()?;
        if self.clock.now() - entry.loaded_at < self.ttl {
            Some(&entry.records)
        } else {
            None
        }
    }

    pub fn store(&mut self, records: Vec<ReferenceRecord>) {
        self.entry = Some(CacheEntry {
            loaded_at: self.clock.now(),
            records,
        });
    }

    /// Explicit refresh: drops the entry so the next access reloads.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use chrono::{DateTime, Duration, Local};
    use rust_decimal::Decimal;

    use crate::{
        data::cache::{Clock, ReferenceCache},
        models::ReferenceRecord,
    };

    #[derive(Clone)]
    struct ManualClock(Rc<Cell<DateTime<Local>>>);

    impl ManualClock {
        fn new() -> Self {
            Self(Rc::new(Cell::new(Local::now())))
        }

        fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            self.0.get()
        }
    }

    fn sample_records() -> Vec<ReferenceRecord> {
        vec![ReferenceRecord::new(
            "Acme Advisors".to_string(),
            "BUIGX".to_string(),
            Decimal::ONE,
            Decimal::ONE,
            Decimal::ZERO,
            Decimal::ZERO,
        )]
    }

    #[test]
    fn starts_empty() {
        let cache = ReferenceCache::with_clock(Duration::days(21), ManualClock::new());
        assert!(cache.fresh().is_none());
    }

    #[test]
    fn stays_fresh_within_the_ttl_window() {
        let clock = ManualClock::new();
        let mut cache = ReferenceCache::with_clock(Duration::days(21), clock.clone());

        cache.store(sample_records());
        clock.advance(Duration::days(20));

        assert_eq!(cache.fresh().map(|r| r.len()), Some(1));
    }

    #[test]
    fn expires_after_the_ttl_window() {
        let clock = ManualClock::new();
        let mut cache = ReferenceCache::with_clock(Duration::days(21), clock.clone());

        cache.store(sample_records());
        clock.advance(Duration::days(22));

        assert!(cache.fresh().is_none());
    }

    #[test]
    fn invalidate_forces_the_next_access_to_reload() {
        let clock = ManualClock::new();
        let mut cache = ReferenceCache::with_clock(Duration::days(21), clock.clone());

        cache.store(sample_records());
        cache.invalidate();

        assert!(cache.fresh().is_none());
    }

    #[test]
    fn storing_again_restarts_the_window() {
        let clock = ManualClock::new();
        let mut cache = ReferenceCache::with_clock(Duration::days(21), clock.clone());

        cache.store(sample_records());
        clock.advance(Duration::days(20));
        cache.store(sample_records());
        clock.advance(Duration::days(20));

        assert!(cache.fresh().is_some());
    }
}

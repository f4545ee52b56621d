//! Time sources, so code depending on the current time can be tested

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Unix timestamp the mock clock starts at (2020-09-17T21:46:40Z)
pub const MOCK_START_TIMESTAMP: i64 = 1_600_379_200;

#[derive(Debug, Error, PartialEq)]
pub enum TimeSourceError {
    #[error("Invalid time scale: {0} (must be finite and non-negative)")]
    InvalidScale(f64),
}

pub trait TimeSource: Send + Sync {
    /// Current time. It might be frozen, but should never go back.
    fn now(&self) -> DateTime<Utc>;

    /// Convert an interval of this source into real time, e.g. for timers.
    fn real_time_interval_from(&self, interval: Duration) -> Duration;
}

/// The regular, real time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTimeSource;

impl DefaultTimeSource {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource for DefaultTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn real_time_interval_from(&self, interval: Duration) -> Duration {
        interval
    }
}

/// Time source for tests: "now" is set externally and intervals can be scaled.
#[derive(Debug)]
pub struct MockTimeSource {
    now: Mutex<DateTime<Utc>>,
    scale: f64,
}

impl Default for MockTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(DateTime::from_timestamp(MOCK_START_TIMESTAMP, 0).unwrap_or_default()),
            scale: 1.0,
        }
    }

    pub fn with_scale(scale: f64) -> Result<Self, TimeSourceError> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(TimeSourceError::InvalidScale(scale));
        }
        Ok(Self {
            scale,
            ..Self::new()
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Override what "now" means for the code under test.
    pub fn set_now(&self, now: DateTime<Utc>) {
        *self.lock_now() = now;
    }

    /// Move "now" forward, stopping at the latest representable time.
    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.lock_now();
        *now = now
            .checked_add_signed(by.max(TimeDelta::zero()))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
    }

    fn lock_now(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.lock_now()
    }

    fn real_time_interval_from(&self, interval: Duration) -> Duration {
        Duration::try_from_secs_f64(interval.as_secs_f64() * self.scale).unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[test]
    fn mock_starts_at_fixed_time() {
        let source = MockTimeSource::new();

        assert_eq!(
            source.now(),
            Utc.with_ymd_and_hms(2020, 9, 17, 21, 46, 40).unwrap()
        );
    }

    #[test]
    fn mock_now_is_frozen_until_changed() {
        let source = MockTimeSource::new();
        let first = source.now();

        assert_eq!(source.now(), first);

        let later = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        source.set_now(later);
        assert_eq!(source.now(), later);
    }

    #[test]
    fn mock_advance_never_goes_back() {
        let source = MockTimeSource::new();
        let start = source.now();

        source.advance(TimeDelta::seconds(90));
        assert_eq!(source.now(), start + TimeDelta::seconds(90));

        source.advance(TimeDelta::seconds(-30));
        assert_eq!(source.now(), start + TimeDelta::seconds(90));
    }

    #[rstest]
    #[case(1.0, Duration::from_secs(10), Duration::from_secs(10))]
    #[case(0.5, Duration::from_secs(10), Duration::from_secs(5))]
    #[case(0.0, Duration::from_secs(10), Duration::ZERO)]
    #[case(3.0, Duration::from_millis(100), Duration::from_millis(300))]
    fn mock_scales_intervals(
        #[case] scale: f64,
        #[case] interval: Duration,
        #[case] expected: Duration,
    ) {
        let source = MockTimeSource::with_scale(scale).unwrap();
        assert_eq!(source.real_time_interval_from(interval), expected);
    }

    #[test]
    fn mock_advance_saturates_instead_of_overflowing() {
        let source = MockTimeSource::new();

        source.advance(TimeDelta::MAX);
        assert_eq!(source.now(), DateTime::<Utc>::MAX_UTC);

        source.advance(TimeDelta::seconds(1));
        assert_eq!(source.now(), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn mock_scaling_saturates_instead_of_overflowing() {
        let source = MockTimeSource::with_scale(1e300).unwrap();

        assert_eq!(
            source.real_time_interval_from(Duration::from_secs(10)),
            Duration::MAX
        );
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn mock_rejects_invalid_scale(#[case] scale: f64) {
        assert!(matches!(
            MockTimeSource::with_scale(scale),
            Err(TimeSourceError::InvalidScale(_))
        ));
    }

    #[test]
    fn default_source_is_real_time() {
        let source = DefaultTimeSource::new();
        let before = Utc::now();
        let now = source.now();

        assert!(now >= before);
        assert_eq!(
            source.real_time_interval_from(Duration::from_secs(3)),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn time_sources_are_usable_as_trait_objects() {
        let sources: Vec<Box<dyn TimeSource>> =
            vec![Box::new(DefaultTimeSource), Box::new(MockTimeSource::new())];

        assert!(sources.iter().all(|source| source.now().timestamp() > 0));
    }
}

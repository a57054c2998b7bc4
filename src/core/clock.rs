use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};

/// Source of the current instant.
///
/// The compiler never reads ambient time: the view asks its clock once per
/// redraw and passes the resulting date down.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Frozen instant, for tests and reproducible renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Noon UTC of `date`.
    ///
    /// Only offsets from -12h up to (excluding) +12h see `date` as today;
    /// use [`FixedClock::at_local_date`] for offsets beyond that.
    #[must_use]
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc())
    }

    /// Noon of `date` at `offset`, so `today_at(clock, offset)` is `date`.
    #[must_use]
    pub fn at_local_date(date: NaiveDate, offset: FixedOffset) -> Self {
        let noon = Self::at_date(date).instant;
        let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
        Self::new(noon.checked_sub_signed(shift).unwrap_or(noon))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Calendar date of the clock's current instant at `offset`.
#[must_use]
pub fn today_at(clock: &dyn Clock, offset: FixedOffset) -> NaiveDate {
    clock.now().with_timezone(&offset).date_naive()
}

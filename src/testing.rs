//! Helpers shared by unit tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// A clock frozen at noon local time on a fixed date
pub(crate) struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub(crate) fn on(year: i32, month: u32, day: u32) -> Self {
        let noon = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap();
        Self(Local.from_local_datetime(&noon).earliest().unwrap())
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.0.date_naive()
    }

    pub(crate) fn in_days(&self, days: i64) -> NaiveDate {
        self.today() + chrono::Duration::days(days)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

//! Business-day calendar convention.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Next business day strictly after `date`, rolling weekends forward to
/// Monday. Exchange holidays are not modelled; callers with a holiday
/// calendar should pass an explicit next trading date instead.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    let mut next = date + Duration::days(1);
    while matches!(next.weekday(), Weekday::Sat | Weekday::Sun) {
        next += Duration::days(1);
    }
    next
}

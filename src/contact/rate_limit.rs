//! Per-day submission cap for the unauthenticated contact form.
//!
//! A plain threshold counter over server-stored timestamps — not a
//! sliding window or token bucket. The count resets implicitly at UTC
//! midnight.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};

use crate::store::ContactStore;

use super::ContactError;

/// Maximum contact submissions per (email, UTC calendar day) pair.
pub const MAX_MESSAGES_PER_DAY: usize = 3;

/// Check the daily limit for `email` (already lowercased) at `now`.
///
/// Counts existing submissions within `[00:00:00.000, 23:59:59.999]` of
/// `now`'s UTC calendar day; at [`MAX_MESSAGES_PER_DAY`] the new
/// submission is rejected before anything is written.
pub fn check_daily_limit(
    store: &(impl ContactStore + ?Sized),
    email: &str,
    now: DateTime<Utc>,
) -> Result<(), ContactError> {
    let (day_start, day_end) = utc_day_bounds(now);
    let count = store.count_messages_between(email, day_start, day_end)?;
    if count >= MAX_MESSAGES_PER_DAY {
        tracing::warn!(email, count, "contact submission rejected: daily limit");
        return Err(ContactError::DailyLimitReached);
    }
    Ok(())
}

/// `[00:00:00.000, 23:59:59.999]` of the UTC calendar day containing `at`.
pub fn utc_day_bounds(at: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let day = at.date_naive();
    let start = Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN));
    let end = Utc.from_utc_datetime(
        &day.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid time")),
    );
    (start, end)
}

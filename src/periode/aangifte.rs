//! The quarterly BTW filing clock.
//!
//! The Belastingdienst opens a filing window in the month after each
//! quarter closes. The schedule here is the hardcoded quarterly one used
//! by the dashboard clock: January, April, July and October, first day
//! through last day of the month. This is intentionally separate from the
//! simplified 4-week trend bucketing in the parent module.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An upcoming (or currently open) filing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingWindow {
    /// First day filing is possible.
    pub start: NaiveDate,
    /// Last day to file.
    pub end: NaiveDate,
    /// Days until the window opens; 0 once it is open.
    pub days_until_open: i64,
}

/// Filing months and their last day: Jan 31, Apr 30, Jul 31, Oct 31.
const WINDOWS: [(u32, u32); 4] = [(1, 31), (4, 30), (7, 31), (10, 31)];

/// The next filing window on or after `today`.
///
/// A window still counts as "next" until its last day has passed; after
/// October 31 the clock rolls over to January of the following year.
pub fn next_filing_window(today: NaiveDate) -> FilingWindow {
    let year = today.year();
    let candidate = WINDOWS
        .iter()
        .map(|&(month, last_day)| window(year, month, last_day))
        .find(|(_, end)| today <= *end)
        .unwrap_or_else(|| window(year + 1, WINDOWS[0].0, WINDOWS[0].1));

    let (start, end) = candidate;
    let days = (start - today).num_days();
    FilingWindow {
        start,
        end,
        days_until_open: days.max(0),
    }
}

fn window(year: i32, month: u32, last_day: u32) -> (NaiveDate, NaiveDate) {
    // Valid by construction: the schedule is a fixed table
    let start = NaiveDate::from_ymd_opt(year, month, 1).expect("valid schedule date");
    let end = NaiveDate::from_ymd_opt(year, month, last_day).expect("valid schedule date");
    (start, end)
}

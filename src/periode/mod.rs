//! Period aggregation for the BTW dashboard.
//!
//! Buckets purchase and sales invoices into exactly four trailing periods
//! ending at "now" and sums BTW per bucket: `inkoop_btw` (recoverable),
//! `verkoop_btw` (payable) and `net_btw = verkoop − inkoop` (positive =
//! owed to the Belastingdienst, negative = refund due).
//!
//! Raw per-invoice BTW values are summed first and each bucket sum is
//! rounded once (sum-then-round) — rounding per invoice and then summing
//! would drift by cents on larger administrations.
//!
//! # Example
//!
//! ```
//! use btwboek::periode::{btw_trend, Granularity};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
//! let trend = btw_trend(now, &[], &[], Granularity::Quarter);
//! assert_eq!(trend.len(), 4);
//! assert_eq!(trend[3].label, "Q3 2026");
//! ```

mod aangifte;

pub use aangifte::{FilingWindow, next_filing_window};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Invoice, btw_amount_raw, round_cents};

/// Bucket granularity for the trend view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// ISO-8601 week of year.
    Week,
    /// Calendar month.
    Month,
    /// Simplified 4-week bookkeeping period: `ceil(week / 4)`.
    /// Not the official aangifte calendar — see [`aangifte`] for that.
    FourWeekPeriod,
    /// Calendar quarter.
    Quarter,
    /// Calendar year.
    Year,
}

/// Number of trailing buckets in the trend, most recent last.
pub const TREND_BUCKETS: usize = 4;

/// One bucket of the BTW trend, ready for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBtw {
    /// Display label, e.g. "Week 34", "mrt 2026", "Q1 2026".
    pub label: String,
    /// Recoverable BTW over purchase invoices in this bucket.
    pub inkoop_btw: Decimal,
    /// Payable BTW over sales invoices in this bucket.
    pub verkoop_btw: Decimal,
    /// `verkoop_btw − inkoop_btw`, rounded independently.
    pub net_btw: Decimal,
}

/// Dutch short month names, index 0 = januari.
const NL_MONTHS: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// ISO-8601 week of year (the week containing the year's first Thursday
/// is week 1).
pub fn week_number(date: NaiveDate) -> i64 {
    date.iso_week().week() as i64
}

/// Simplified 4-week bookkeeping period: `ceil(week / 4)`, so weeks 1–4 →
/// periode 1, weeks 5–8 → periode 2, and so on.
pub fn period_number(date: NaiveDate) -> i64 {
    (week_number(date) + 3) / 4
}

/// Calendar quarter, 1-based.
pub fn quarter_number(date: NaiveDate) -> i32 {
    (date.month0() / 3) as i32 + 1
}

/// Bucket the two invoice collections into exactly [`TREND_BUCKETS`]
/// trailing periods anchored at `now`, oldest bucket first.
///
/// An invoice lands in a bucket when its invoice date falls in the same
/// (unit, year) pair as the bucket's target — at most one bucket per pass.
/// Invoices outside the window are ignored.
pub fn btw_trend(
    now: NaiveDate,
    purchases: &[Invoice],
    sales: &[Invoice],
    granularity: Granularity,
) -> Vec<PeriodBtw> {
    (0..TREND_BUCKETS)
        .rev()
        .map(|back| {
            let target = BucketTarget::resolve(now, granularity, back as i32);
            let inkoop = raw_btw_sum(purchases, &target);
            let verkoop = raw_btw_sum(sales, &target);
            PeriodBtw {
                label: target.label(),
                inkoop_btw: round_cents(inkoop),
                verkoop_btw: round_cents(verkoop),
                net_btw: round_cents(verkoop - inkoop),
            }
        })
        .collect()
}

fn raw_btw_sum(invoices: &[Invoice], target: &BucketTarget) -> Decimal {
    invoices
        .iter()
        .filter(|inv| target.contains(inv.invoice_date))
        .map(|inv| btw_amount_raw(inv.amount, inv.rate.fraction(), inv.mode))
        .sum()
}

/// Resolved target of one trend bucket: the (unit, year) pair an invoice
/// date is tested against.
enum BucketTarget {
    /// Week numbers can go non-positive near the start of a year; such
    /// buckets simply never match an invoice (membership also requires the
    /// anchor's calendar year).
    Week { week: i64, year: i32 },
    Month { month: u32, year: i32 },
    FourWeek { period: i64, year: i32 },
    Quarter { quarter: i32, year: i32 },
    Year { year: i32 },
}

impl BucketTarget {
    /// The bucket `back` periods before the one containing `now`.
    fn resolve(now: NaiveDate, granularity: Granularity, back: i32) -> Self {
        match granularity {
            Granularity::Week => Self::Week {
                week: week_number(now) - back as i64,
                year: now.year(),
            },
            Granularity::Month => {
                // 0-based month arithmetic with year borrow
                let mut month0 = now.month0() as i32 - back;
                let mut year = now.year();
                if month0 < 0 {
                    month0 += 12;
                    year -= 1;
                }
                Self::Month {
                    month: month0 as u32 + 1,
                    year,
                }
            }
            Granularity::FourWeekPeriod => Self::FourWeek {
                period: period_number(now) - back as i64,
                year: now.year(),
            },
            Granularity::Quarter => {
                let mut quarter = quarter_number(now) - back;
                let mut year = now.year();
                if quarter <= 0 {
                    quarter += 4;
                    year -= 1;
                }
                Self::Quarter { quarter, year }
            }
            Granularity::Year => Self::Year {
                year: now.year() - back,
            },
        }
    }

    fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Week { week, year } => week_number(date) == week && date.year() == year,
            Self::Month { month, year } => date.month() == month && date.year() == year,
            Self::FourWeek { period, year } => {
                period_number(date) == period && date.year() == year
            }
            Self::Quarter { quarter, year } => {
                quarter_number(date) == quarter && date.year() == year
            }
            Self::Year { year } => date.year() == year,
        }
    }

    fn label(&self) -> String {
        match *self {
            Self::Week { week, .. } => format!("Week {week}"),
            Self::Month { month, year } => {
                format!("{} {year}", NL_MONTHS[month as usize - 1])
            }
            Self::FourWeek { period, .. } => format!("Periode {period}"),
            Self::Quarter { quarter, year } => format!("Q{quarter} {year}"),
            Self::Year { year } => year.to_string(),
        }
    }
}

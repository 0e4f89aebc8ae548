//! Excel export of the invoice administration.
//!
//! Produces one workbook with a worksheet per invoice direction, columns
//! matching the dashboard export mapping, and a filename that embeds the
//! exported date range.

mod excel;

pub use excel::*;

//! # btwboek
//!
//! Bookkeeping library for Dutch sole proprietors and small businesses:
//! purchase/sales invoice administration, BTW (VAT) calculation, period
//! aggregation for the BTW dashboard, and spreadsheet export.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! BTW rates are the closed Dutch set: 0%, 9%, 21%, or "vrijgesteld"
//! (exempt, computed as 0%).
//!
//! ## Quick Start
//!
//! ```rust
//! use btwboek::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("F-2026-017", NaiveDate::from_ymd_opt(2026, 3, 12).unwrap())
//!     .counterparty("Coolblue B.V.")
//!     .description("Werklaptop")
//!     .amount(dec!(121.00))
//!     .rate(BtwRate::Standard)
//!     .mode(AmountMode::InclBtw)
//!     .payment_status(PaymentStatus::Paid)
//!     .build()
//!     .unwrap();
//!
//! // 121.00 incl. 21% → 21.00 BTW, 100.00 net
//! assert_eq!(invoice.btw(), dec!(21.00));
//! assert_eq!(split(invoice.amount, invoice.rate.fraction(), invoice.mode).net, dec!(100.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, BTW calculator, draft lines, period aggregation, stores |
//! | `export` | Excel workbook export (`rust_xlsxwriter`) |
//! | `contact` | Contact intake: daily rate limit + email verification tokens |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod periode;

#[cfg(feature = "core")]
pub mod store;

#[cfg(feature = "contact")]
pub mod contact;

#[cfg(feature = "export")]
pub mod export;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

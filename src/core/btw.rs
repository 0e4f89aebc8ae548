//! The BTW calculator: pure conversions between gross, net, and BTW.
//!
//! Rounding is commercial half-up (midpoint away from zero) to the cent,
//! applied once at the edge of each computation. Aggregations that must not
//! accumulate cent drift sum the *raw* values first and round the sum —
//! see [`crate::periode`].

use rust_decimal::Decimal;

use super::types::AmountMode;

/// The BTW portion of `amount`, unrounded.
///
/// - `rate` is a fraction in `[0, 1)`, e.g. `0.21` — not a percentage.
/// - Rate 0 → BTW 0, regardless of mode.
/// - Inclusive: `amount × rate / (1 + rate)` (BTW backed out of the gross).
/// - Exclusive: `amount × rate` (BTW added on top of the net).
///
/// Negative amounts pass through unchanged; rejecting them is the job of
/// [`validate_invoice`](super::validate_invoice), not the calculator.
pub fn btw_amount_raw(amount: Decimal, rate: Decimal, mode: AmountMode) -> Decimal {
    if rate.is_zero() {
        return Decimal::ZERO;
    }
    match mode {
        AmountMode::InclBtw => amount * rate / (Decimal::ONE + rate),
        AmountMode::ExclBtw => amount * rate,
    }
}

/// The BTW portion of `amount`, rounded half-up to the cent.
pub fn btw_amount(amount: Decimal, rate: Decimal, mode: AmountMode) -> Decimal {
    round_cents(btw_amount_raw(amount, rate, mode))
}

/// A net/BTW/gross triple that reconstructs consistently:
/// `net + btw == gross`, all rounded to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BtwSplit {
    pub net: Decimal,
    pub btw: Decimal,
    pub gross: Decimal,
}

/// Split an entered amount into net, BTW, and gross.
///
/// Inclusive mode: the amount *is* the gross, net is derived.
/// Exclusive mode: the amount *is* the net, gross is derived.
pub fn split(amount: Decimal, rate: Decimal, mode: AmountMode) -> BtwSplit {
    let btw = btw_amount(amount, rate, mode);
    match mode {
        AmountMode::InclBtw => BtwSplit {
            net: amount - btw,
            btw,
            gross: amount,
        },
        AmountMode::ExclBtw => BtwSplit {
            net: amount,
            btw,
            gross: amount + btw,
        },
    }
}

/// Round a Decimal to the cent using half-up (commercial rounding).
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Coerce a user-entered amount string to a Decimal, treating anything
/// unparseable as zero. Accepts a comma as decimal separator ("12,50").
///
/// Form inputs arrive as free text; an empty or garbled field must produce
/// a zero amount, not an error (spec'd form behavior).
pub fn parse_amount(input: &str) -> Decimal {
    let normalized = input.trim().replace(',', ".");
    normalized.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

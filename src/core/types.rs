use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Dutch BTW rate — a closed set, nothing else is accepted in the forms.
///
/// "Vrijgesteld" (exempt) is distinct from the 0% rate for display and
/// reporting, but computes identically (BTW = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BtwRate {
    /// 0% — zero-rated supplies.
    Zero,
    /// 9% — reduced rate (food, books, repairs, ...).
    Low,
    /// 21% — standard rate.
    Standard,
    /// Vrijgesteld — exempt from BTW, computes as 0.
    Exempt,
}

impl BtwRate {
    /// The rate as a decimal fraction in `[0, 1)` — e.g. 21% → `0.21`.
    pub fn fraction(&self) -> Decimal {
        match self {
            Self::Zero | Self::Exempt => Decimal::ZERO,
            Self::Low => dec!(0.09),
            Self::Standard => dec!(0.21),
        }
    }

    /// Parse from the stored fraction. A stored `0` is read as the 0% rate;
    /// exemption is not recoverable from the fraction alone.
    pub fn from_fraction(fraction: Decimal) -> Option<Self> {
        if fraction == Decimal::ZERO {
            Some(Self::Zero)
        } else if fraction == dec!(0.09) {
            Some(Self::Low)
        } else if fraction == dec!(0.21) {
            Some(Self::Standard)
        } else {
            None
        }
    }

    /// Display label as shown in the forms and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Zero => "0%",
            Self::Low => "9%",
            Self::Standard => "21%",
            Self::Exempt => "Vrijgesteld",
        }
    }
}

/// Whether the entered total amount already includes BTW.
///
/// Mandatory before any BTW can be computed — a draft without a mode
/// reports zero calculated BTW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountMode {
    /// Amount is gross — BTW is backed out of it.
    #[serde(rename = "incl")]
    InclBtw,
    /// Amount is net — BTW is added on top.
    #[serde(rename = "excl")]
    ExclBtw,
}

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Open,
    PartiallyPaid,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Betaald",
            Self::Open => "Open",
            Self::PartiallyPaid => "Deels betaald",
        }
    }
}

/// Which account the invoice was (or will be) paid from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentAccount {
    Business,
    Private,
}

impl PaymentAccount {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Business => "Zakelijke rekening",
            Self::Private => "Privérekening",
        }
    }
}

/// Invoice direction — selects the persisted collection and whether the
/// counterparty is a supplier (leverancier) or customer (klant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceKind {
    /// Purchase invoice — input BTW, generally recoverable.
    Inkoop,
    /// Sales invoice — output BTW, generally payable.
    Verkoop,
}

impl InvoiceKind {
    /// Counterparty column label ("Leverancier" / "Klant").
    pub fn counterparty_label(&self) -> &'static str {
        match self {
            Self::Inkoop => "Leverancier",
            Self::Verkoop => "Klant",
        }
    }
}

/// User-entered invoice fields, before the store assigns identity and audit
/// timestamps. Built via [`InvoiceBuilder`](super::InvoiceBuilder).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvoice {
    /// Invoice number as printed on the document. User-assigned, not
    /// guaranteed globally unique.
    pub number: String,
    /// Invoice date (factuurdatum).
    pub invoice_date: NaiveDate,
    /// Supplier or customer name, free text or drawn from the saved list.
    pub counterparty: Option<String>,
    /// Free-text description (omschrijving).
    pub description: Option<String>,
    /// Total amount as entered — gross or net depending on `mode`.
    pub amount: Decimal,
    /// BTW rate.
    pub rate: BtwRate,
    /// Whether `amount` includes BTW.
    pub mode: AmountMode,
    /// Payment date (betaaldatum), if known.
    pub payment_date: Option<NaiveDate>,
    pub payment_status: PaymentStatus,
    pub payment_account: PaymentAccount,
    /// User-defined filter label (own taxonomy, e.g. a project name).
    pub filter_label: Option<String>,
}

impl NewInvoice {
    /// The BTW portion of this payload, rounded to the cent.
    pub fn btw(&self) -> Decimal {
        super::btw_amount(self.amount, self.rate.fraction(), self.mode)
    }
}

/// A persisted purchase or sales invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Store-assigned identifier.
    pub id: String,
    pub number: String,
    pub invoice_date: NaiveDate,
    pub counterparty: Option<String>,
    pub description: Option<String>,
    pub amount: Decimal,
    pub rate: BtwRate,
    pub mode: AmountMode,
    pub payment_date: Option<NaiveDate>,
    pub payment_status: PaymentStatus,
    pub payment_account: PaymentAccount,
    pub filter_label: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Invoice {
    /// The BTW portion of this invoice, rounded to the cent.
    pub fn btw(&self) -> Decimal {
        super::btw_amount(self.amount, self.rate.fraction(), self.mode)
    }

    /// Apply new field values (full-row replace), keeping identity and
    /// `created_at`. The store sets `updated_at` on save.
    pub fn apply(&mut self, fields: NewInvoice) {
        self.number = fields.number;
        self.invoice_date = fields.invoice_date;
        self.counterparty = fields.counterparty;
        self.description = fields.description;
        self.amount = fields.amount;
        self.rate = fields.rate;
        self.mode = fields.mode;
        self.payment_date = fields.payment_date;
        self.payment_status = fields.payment_status;
        self.payment_account = fields.payment_account;
        self.filter_label = fields.filter_label;
    }
}

/// User-scoped lookup entity: a filter label from the user's own taxonomy.
/// Append-only from the forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterLabel {
    pub id: String,
    pub name: String,
}

/// User-scoped lookup entity: a saved supplier or customer.
/// Append-only from the forms ("+" next to the counterparty select).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessPartner {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_fractions() {
        assert_eq!(BtwRate::Zero.fraction(), Decimal::ZERO);
        assert_eq!(BtwRate::Exempt.fraction(), Decimal::ZERO);
        assert_eq!(BtwRate::Low.fraction(), dec!(0.09));
        assert_eq!(BtwRate::Standard.fraction(), dec!(0.21));
    }

    #[test]
    fn rate_from_fraction_roundtrip() {
        assert_eq!(BtwRate::from_fraction(dec!(0.21)), Some(BtwRate::Standard));
        assert_eq!(BtwRate::from_fraction(dec!(0.09)), Some(BtwRate::Low));
        // 0 is ambiguous between Zero and Exempt — reads as Zero
        assert_eq!(BtwRate::from_fraction(Decimal::ZERO), Some(BtwRate::Zero));
        assert_eq!(BtwRate::from_fraction(dec!(0.19)), None);
    }

    #[test]
    fn labels() {
        assert_eq!(BtwRate::Exempt.label(), "Vrijgesteld");
        assert_eq!(PaymentStatus::PartiallyPaid.label(), "Deels betaald");
        assert_eq!(InvoiceKind::Inkoop.counterparty_label(), "Leverancier");
        assert_eq!(InvoiceKind::Verkoop.counterparty_label(), "Klant");
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::BoekError;
use super::types::*;
use super::validation;

/// Builder for constructing valid invoice payloads.
///
/// ```
/// use btwboek::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("F-2026-001", NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
///     .counterparty("Coolblue B.V.")
///     .amount(dec!(121.00))
///     .rate(BtwRate::Standard)
///     .mode(AmountMode::InclBtw)
///     .build()
///     .unwrap();
/// ```
pub struct InvoiceBuilder {
    number: String,
    invoice_date: NaiveDate,
    counterparty: Option<String>,
    description: Option<String>,
    amount: Decimal,
    rate: BtwRate,
    mode: AmountMode,
    payment_date: Option<NaiveDate>,
    payment_status: PaymentStatus,
    payment_account: PaymentAccount,
    filter_label: Option<String>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, invoice_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            invoice_date,
            counterparty: None,
            description: None,
            amount: Decimal::ZERO,
            rate: BtwRate::Standard,
            mode: AmountMode::InclBtw,
            payment_date: None,
            payment_status: PaymentStatus::Open,
            payment_account: PaymentAccount::Business,
            filter_label: None,
        }
    }

    pub fn counterparty(mut self, name: impl Into<String>) -> Self {
        self.counterparty = Some(name.into());
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn rate(mut self, rate: BtwRate) -> Self {
        self.rate = rate;
        self
    }

    pub fn mode(mut self, mode: AmountMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn payment_date(mut self, date: NaiveDate) -> Self {
        self.payment_date = Some(date);
        self
    }

    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = status;
        self
    }

    pub fn payment_account(mut self, account: PaymentAccount) -> Self {
        self.payment_account = account;
        self
    }

    pub fn filter_label(mut self, label: impl Into<String>) -> Self {
        self.filter_label = Some(label.into());
        self
    }

    /// Build the payload, running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<NewInvoice, BoekError> {
        let invoice = self.assemble();
        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BoekError::Validation(msg));
        }
        Ok(invoice)
    }

    /// Build without validation — useful for tests or importing external data.
    pub fn build_unchecked(self) -> NewInvoice {
        self.assemble()
    }

    fn assemble(self) -> NewInvoice {
        NewInvoice {
            number: self.number,
            invoice_date: self.invoice_date,
            counterparty: self.counterparty,
            description: self.description,
            amount: self.amount,
            rate: self.rate,
            mode: self.mode,
            payment_date: self.payment_date,
            payment_status: self.payment_status,
            payment_account: self.payment_account,
            filter_label: self.filter_label,
        }
    }
}

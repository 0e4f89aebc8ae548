use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::NewInvoice;

/// Validate user-entered invoice fields.
/// Returns all validation errors found (not just the first).
pub fn validate_invoice(invoice: &NewInvoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "factuurnummer must not be empty",
        ));
    }
    if invoice.number.len() > 100 {
        errors.push(ValidationError::new(
            "number",
            "factuurnummer cannot exceed 100 characters",
        ));
    }

    // Negative amounts are rejected here, not in the calculator —
    // the calculator stays total and pure.
    if invoice.amount < Decimal::ZERO {
        errors.push(ValidationError::new(
            "amount",
            "amount must not be negative",
        ));
    }
    if invoice.amount.scale() > 2 {
        errors.push(ValidationError::new(
            "amount",
            "amount cannot have more than 2 decimal places",
        ));
    }

    match &invoice.counterparty {
        None => errors.push(ValidationError::new(
            "counterparty",
            "leverancier/klant is required",
        )),
        Some(name) if name.trim().is_empty() => errors.push(ValidationError::new(
            "counterparty",
            "leverancier/klant must not be empty",
        )),
        _ => {}
    }

    if let Some(paid) = invoice.payment_date {
        if paid < invoice.invoice_date {
            errors.push(ValidationError::new(
                "payment_date",
                "betaaldatum cannot be before the invoice date",
            ));
        }
    }

    if let Some(label) = &invoice.filter_label {
        if label.len() > 100 {
            errors.push(ValidationError::new(
                "filter_label",
                "label cannot exceed 100 characters",
            ));
        }
    }

    errors
}

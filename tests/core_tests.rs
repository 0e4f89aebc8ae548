use btwboek::core::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// --- BTW calculator ---

#[test]
fn reference_examples() {
    // amount=121.00, rate=0.21, inclusive → BTW=21.00, net=100.00
    let s = split(dec!(121.00), dec!(0.21), AmountMode::InclBtw);
    assert_eq!(s.btw, dec!(21.00));
    assert_eq!(s.net, dec!(100.00));

    // amount=100.00, rate=0.21, exclusive → BTW=21.00, gross=121.00
    let s = split(dec!(100.00), dec!(0.21), AmountMode::ExclBtw);
    assert_eq!(s.btw, dec!(21.00));
    assert_eq!(s.gross, dec!(121.00));

    // rate=0 (any mode) → BTW=0.00 regardless of amount
    assert_eq!(btw_amount(dec!(5000), dec!(0), AmountMode::InclBtw), dec!(0));
    assert_eq!(btw_amount(dec!(5000), dec!(0), AmountMode::ExclBtw), dec!(0));
}

#[test]
fn exempt_computes_as_zero() {
    let inv = InvoiceBuilder::new("F-1", date(2026, 3, 1))
        .counterparty("Huisarts")
        .amount(dec!(85.00))
        .rate(BtwRate::Exempt)
        .mode(AmountMode::InclBtw)
        .build()
        .unwrap();
    assert_eq!(inv.btw(), dec!(0));
}

#[test]
fn awkward_inclusive_amounts_round_to_the_cent() {
    // 99.99 incl. 21%: 99.99 * 0.21/1.21 = 17.3536... → 17.35
    assert_eq!(
        btw_amount(dec!(99.99), dec!(0.21), AmountMode::InclBtw),
        dec!(17.35)
    );
    // 10.00 incl. 9%: 10 * 0.09/1.09 = 0.8256... → 0.83
    assert_eq!(
        btw_amount(dec!(10.00), dec!(0.09), AmountMode::InclBtw),
        dec!(0.83)
    );
}

// --- Builder & validation ---

#[test]
fn builder_produces_valid_payload() {
    let inv = InvoiceBuilder::new("F-2026-001", date(2026, 3, 12))
        .counterparty("Coolblue B.V.")
        .description("Werklaptop")
        .amount(dec!(121.00))
        .rate(BtwRate::Standard)
        .mode(AmountMode::InclBtw)
        .payment_date(date(2026, 3, 20))
        .payment_status(PaymentStatus::Paid)
        .payment_account(PaymentAccount::Business)
        .filter_label("hardware")
        .build()
        .unwrap();
    assert_eq!(inv.number, "F-2026-001");
    assert_eq!(inv.btw(), dec!(21.00));
    assert!(validate_invoice(&inv).is_empty());
}

#[test]
fn builder_collects_all_validation_errors() {
    let err = InvoiceBuilder::new("", date(2026, 3, 12))
        .amount(dec!(-5.00))
        .build()
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("number"));
    assert!(msg.contains("amount"));
    assert!(msg.contains("counterparty"));
}

#[test]
fn build_unchecked_skips_validation() {
    let inv = InvoiceBuilder::new("", date(2026, 3, 12))
        .amount(dec!(-5.00))
        .build_unchecked();
    assert_eq!(inv.amount, dec!(-5.00));
}

// --- Draft lines ---

#[test]
fn draft_flattens_into_insert_totals() {
    let mut draft = InvoiceDraft::new();
    draft.set_mode(AmountMode::InclBtw);
    draft.add_line(dec!(121.00), BtwRate::Standard).unwrap();
    draft.add_line(dec!(54.50), BtwRate::Low).unwrap();

    let totals = draft.totals();
    assert_eq!(totals.total_amount, dec!(175.50));
    // 21.00 + 4.50
    assert_eq!(totals.total_btw, dec!(25.50));
}

#[test]
fn recompute_is_idempotent() {
    let mut draft = InvoiceDraft::new();
    draft.set_mode(AmountMode::ExclBtw);
    draft.add_line(dec!(333.33), BtwRate::Standard).unwrap();
    let first = draft.totals();
    draft.set_mode(AmountMode::ExclBtw);
    draft.set_mode(AmountMode::ExclBtw);
    assert_eq!(draft.totals(), first);
}

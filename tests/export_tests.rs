#![cfg(feature = "export")]

use btwboek::core::*;
use btwboek::export::*;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn invoice(number: &str, y: i32, m: u32, d: u32, amount: Decimal) -> Invoice {
    Invoice {
        id: number.to_string(),
        number: number.to_string(),
        invoice_date: date(y, m, d),
        counterparty: Some("Coolblue B.V.".into()),
        description: Some("Werklaptop".into()),
        amount,
        rate: BtwRate::Standard,
        mode: AmountMode::InclBtw,
        payment_date: Some(date(y, m, d)),
        payment_status: PaymentStatus::Paid,
        payment_account: PaymentAccount::Business,
        filter_label: Some("hardware".into()),
        created_at: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
        updated_at: None,
    }
}

#[test]
fn row_mapping_matches_export_columns() {
    let range = ExportRange::new(date(2026, 1, 1), date(2026, 12, 31)).unwrap();
    let rows = export_rows(&[invoice("F-1", 2026, 3, 12, dec!(121.00))], range);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.number, "F-1");
    assert_eq!(row.date, date(2026, 3, 12));
    assert_eq!(row.counterparty, "Coolblue B.V.");
    assert_eq!(row.description, "Werklaptop");
    assert_eq!(row.amount, dec!(121.00));
    assert_eq!(row.rate, "21%");
    assert_eq!(row.mode, "incl");
    assert_eq!(row.btw, dec!(21.00));
    assert_eq!(row.payment_status, "Betaald");
    assert_eq!(row.payment_account, "Zakelijke rekening");
    assert_eq!(row.filter_label, "hardware");
}

#[test]
fn missing_optionals_become_empty_cells() {
    let range = ExportRange::new(date(2026, 1, 1), date(2026, 12, 31)).unwrap();
    let mut inv = invoice("F-1", 2026, 3, 12, dec!(121.00));
    inv.counterparty = None;
    inv.description = None;
    inv.filter_label = None;
    let rows = export_rows(&[inv], range);
    assert_eq!(rows[0].counterparty, "");
    assert_eq!(rows[0].description, "");
    assert_eq!(rows[0].filter_label, "");
}

#[test]
fn end_date_is_inclusive() {
    let range = ExportRange::new(date(2026, 1, 1), date(2026, 3, 31)).unwrap();
    let rows = export_rows(
        &[
            invoice("F-1", 2026, 3, 31, dec!(121.00)),
            invoice("F-2", 2026, 4, 1, dec!(121.00)),
        ],
        range,
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].number, "F-1");
}

#[test]
fn workbook_with_both_directions_saves() {
    let range = ExportRange::new(date(2026, 1, 1), date(2026, 12, 31)).unwrap();
    let purchases = vec![invoice("F-1", 2026, 3, 12, dec!(121.00))];
    let sales = vec![
        invoice("V-1", 2026, 3, 15, dec!(242.00)),
        invoice("V-2", 2026, 5, 1, dec!(60.50)),
    ];
    let mut workbook = build_btw_workbook(&purchases, &sales, range).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();
    // xlsx files are zip archives
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn empty_administration_still_yields_a_workbook() {
    let range = ExportRange::new(date(2026, 1, 1), date(2026, 12, 31)).unwrap();
    let mut workbook = build_btw_workbook(&[], &[], range).unwrap();
    assert!(!workbook.save_to_buffer().unwrap().is_empty());
}

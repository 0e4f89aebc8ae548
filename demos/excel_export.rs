use btwboek::core::*;
use btwboek::export::*;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn invoice(number: &str, y: i32, m: u32, d: u32, counterparty: &str, amount: rust_decimal::Decimal) -> Invoice {
    Invoice {
        id: number.to_string(),
        number: number.to_string(),
        invoice_date: date(y, m, d),
        counterparty: Some(counterparty.to_string()),
        description: Some("Demo".into()),
        amount,
        rate: BtwRate::Standard,
        mode: AmountMode::InclBtw,
        payment_date: None,
        payment_status: PaymentStatus::Open,
        payment_account: PaymentAccount::Business,
        filter_label: None,
        created_at: Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap(),
        updated_at: None,
    }
}

fn main() {
    let purchases = vec![
        invoice("L-2026-014", 2026, 5, 12, "Coolblue B.V.", dec!(847.00)),
        invoice("L-2026-019", 2026, 6, 3, "KPN Zakelijk", dec!(54.45)),
    ];
    let sales = vec![
        invoice("F-2026-031", 2026, 6, 20, "Bakkerij Jansen", dec!(1210.00)),
        invoice("F-2026-032", 2026, 7, 8, "Café De Hoek", dec!(605.00)),
    ];

    let range = ExportRange::new(date(2026, 1, 1), date(2026, 8, 23)).expect("valid range");
    let file_name = export_file_name(range);

    println!("Exporting {} inkoop and {} verkoop invoices", purchases.len(), sales.len());
    println!("Range: {} t/m {}", range.from, range.to);

    let path = std::env::temp_dir().join(&file_name);
    match write_btw_workbook(&path, &purchases, &sales, range) {
        Ok(()) => println!("Written: {}", path.display()),
        Err(e) => eprintln!("Export failed: {e}"),
    }
}

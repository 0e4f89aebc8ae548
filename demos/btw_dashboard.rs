use btwboek::core::*;
use btwboek::periode::*;
use btwboek::store::*;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() {
    let mut store = MemoryStore::new();
    let session = Session::new("demo-user");
    // Fixed clock so the demo data always lands in the trend window
    let now = Utc.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap();
    let today = now.date_naive();

    // A few months of purchase invoices
    let purchases = [
        ("L-2026-014", date(2026, 5, 12), "Coolblue B.V.", dec!(847.00)),
        ("L-2026-019", date(2026, 6, 3), "KPN Zakelijk", dec!(54.45)),
        ("L-2026-027", date(2026, 8, 5), "Bol.com", dec!(121.00)),
    ];
    for (number, invoice_date, supplier, amount) in purchases {
        let payload = InvoiceBuilder::new(number, invoice_date)
            .counterparty(supplier)
            .amount(amount)
            .rate(BtwRate::Standard)
            .mode(AmountMode::InclBtw)
            .payment_status(PaymentStatus::Paid)
            .payment_account(PaymentAccount::Business)
            .build()
            .expect("demo invoice should be valid");
        store
            .insert_invoice(&session, InvoiceKind::Inkoop, payload, now)
            .expect("insert");
    }

    // And some sales
    let sales = [
        ("F-2026-031", date(2026, 6, 20), "Bakkerij Jansen", dec!(1210.00)),
        ("F-2026-032", date(2026, 7, 8), "Café De Hoek", dec!(605.00)),
        ("F-2026-033", date(2026, 8, 14), "Bakkerij Jansen", dec!(2420.00)),
    ];
    for (number, invoice_date, customer, amount) in sales {
        let payload = InvoiceBuilder::new(number, invoice_date)
            .counterparty(customer)
            .amount(amount)
            .rate(BtwRate::Standard)
            .mode(AmountMode::InclBtw)
            .payment_status(PaymentStatus::Open)
            .build()
            .expect("demo invoice should be valid");
        store
            .insert_invoice(&session, InvoiceKind::Verkoop, payload, now)
            .expect("insert");
    }

    let inkoop = store.list_invoices(&session, InvoiceKind::Inkoop).expect("list");
    let verkoop = store.list_invoices(&session, InvoiceKind::Verkoop).expect("list");

    println!("=== BTW per invoice ===\n");
    for inv in inkoop.iter().chain(&verkoop) {
        println!(
            "  {:<12} {} {:<16} {:>10} ({}, {}) → BTW {:>8}",
            inv.number,
            inv.invoice_date,
            inv.counterparty.as_deref().unwrap_or("—"),
            inv.amount,
            inv.rate.label(),
            match inv.mode {
                AmountMode::InclBtw => "incl",
                AmountMode::ExclBtw => "excl",
            },
            inv.btw(),
        );
    }

    for granularity in [Granularity::Month, Granularity::Quarter] {
        println!("\n=== Trend ({granularity:?}) ===\n");
        let trend = btw_trend(today, &inkoop, &verkoop, granularity);
        for bucket in &trend {
            println!(
                "  {:<10} inkoop {:>8}  verkoop {:>8}  netto {:>8}",
                bucket.label, bucket.inkoop_btw, bucket.verkoop_btw, bucket.net_btw
            );
        }
    }

    println!("\n=== Aangifte ===\n");
    let window = next_filing_window(today);
    println!("  Next filing window: {} — {}", window.start, window.end);
    if window.days_until_open == 0 {
        println!("  Open now — file your return!");
    } else {
        println!("  Opens in {} days", window.days_until_open);
    }
}

use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Color, ExcelDateTime, Format, Workbook, Worksheet, XlsxError};
use thiserror::Error;

use crate::core::{Invoice, InvoiceKind};

/// Errors from workbook generation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    /// The export range is inverted (from after to).
    #[error("invalid export range: {0}")]
    Range(String),
}

/// Inclusive calendar date range of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ExportRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, ExportError> {
        if from > to {
            return Err(ExportError::Range(format!("{from} is after {to}")));
        }
        Ok(Self { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Export filename with the date range embedded:
/// `BTW_Export_2026-01-01_tot_2026-08-23.xlsx`.
pub fn export_file_name(range: ExportRange) -> String {
    format!("BTW_Export_{}_tot_{}.xlsx", range.from, range.to)
}

/// One row of the export sheet — a pure projection of an invoice, so the
/// column mapping is testable without touching a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub number: String,
    pub date: NaiveDate,
    pub counterparty: String,
    pub description: String,
    pub amount: Decimal,
    /// Display form of the rate, e.g. "21%" or "Vrijgesteld".
    pub rate: &'static str,
    /// "incl" / "excl".
    pub mode: &'static str,
    pub btw: Decimal,
    pub payment_status: &'static str,
    pub payment_account: &'static str,
    pub filter_label: String,
}

/// Project the invoices falling inside `range` onto export rows,
/// newest-first input order preserved.
pub fn export_rows(invoices: &[Invoice], range: ExportRange) -> Vec<ExportRow> {
    invoices
        .iter()
        .filter(|inv| range.contains(inv.invoice_date))
        .map(|inv| ExportRow {
            number: inv.number.clone(),
            date: inv.invoice_date,
            counterparty: inv.counterparty.clone().unwrap_or_default(),
            description: inv.description.clone().unwrap_or_default(),
            amount: inv.amount,
            rate: inv.rate.label(),
            mode: match inv.mode {
                crate::core::AmountMode::InclBtw => "incl",
                crate::core::AmountMode::ExclBtw => "excl",
            },
            btw: inv.btw(),
            payment_status: inv.payment_status.label(),
            payment_account: inv.payment_account.label(),
            filter_label: inv.filter_label.clone().unwrap_or_default(),
        })
        .collect()
}

/// Build the export workbook: "Inkoop Facturen" and "Verkoop Facturen"
/// sheets with the invoices inside `range`.
pub fn build_btw_workbook(
    purchases: &[Invoice],
    sales: &[Invoice],
    range: ExportRange,
) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();

    let inkoop_rows = export_rows(purchases, range);
    write_sheet(
        workbook.add_worksheet(),
        "Inkoop Facturen",
        InvoiceKind::Inkoop,
        &inkoop_rows,
    )?;

    let verkoop_rows = export_rows(sales, range);
    write_sheet(
        workbook.add_worksheet(),
        "Verkoop Facturen",
        InvoiceKind::Verkoop,
        &verkoop_rows,
    )?;

    tracing::debug!(
        inkoop = inkoop_rows.len(),
        verkoop = verkoop_rows.len(),
        "export workbook built"
    );
    Ok(workbook)
}

/// Build and save the workbook to `path`.
pub fn write_btw_workbook(
    path: &Path,
    purchases: &[Invoice],
    sales: &[Invoice],
    range: ExportRange,
) -> Result<(), ExportError> {
    let mut workbook = build_btw_workbook(purchases, sales, range)?;
    workbook.save(path)?;
    Ok(())
}

fn write_sheet(
    sheet: &mut Worksheet,
    name: &str,
    kind: InvoiceKind,
    rows: &[ExportRow],
) -> Result<(), ExportError> {
    sheet.set_name(name)?;

    let header = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x1A2433));
    let money = Format::new().set_num_format("€ #,##0.00");
    let date = Format::new().set_num_format("yyyy-mm-dd");

    let columns = [
        "Factuur Nummer",
        "Datum",
        kind.counterparty_label(),
        "Omschrijving",
        "Totaal Bedrag",
        "BTW %",
        "Incl/Excl BTW",
        "BTW Bedrag",
        "Betaal Status",
        "Betaal Account",
        "Filter Label",
    ];
    for (col, title) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, &row.number)?;
        sheet.write_datetime_with_format(r, 1, &excel_date(row.date)?, &date)?;
        sheet.write_string(r, 2, &row.counterparty)?;
        sheet.write_string(r, 3, &row.description)?;
        sheet.write_number_with_format(r, 4, decimal_to_f64(row.amount), &money)?;
        sheet.write_string(r, 5, row.rate)?;
        sheet.write_string(r, 6, row.mode)?;
        sheet.write_number_with_format(r, 7, decimal_to_f64(row.btw), &money)?;
        sheet.write_string(r, 8, row.payment_status)?;
        sheet.write_string(r, 9, row.payment_account)?;
        sheet.write_string(r, 10, &row.filter_label)?;
    }

    sheet.set_column_width(0, 16)?;
    sheet.set_column_width(1, 12)?;
    sheet.set_column_width(2, 24)?;
    sheet.set_column_width(3, 32)?;
    for col in 4..=10u16 {
        sheet.set_column_width(col, 14)?;
    }
    Ok(())
}

fn excel_date(date: NaiveDate) -> Result<ExcelDateTime, ExportError> {
    use chrono::Datelike;
    Ok(ExcelDateTime::from_ymd(
        date.year() as u16,
        date.month() as u8,
        date.day() as u8,
    )?)
}

/// Cell values are IEEE doubles in the xlsx format; amounts are already
/// rounded to the cent, so this conversion is exact for any realistic sum.
fn decimal_to_f64(value: Decimal) -> f64 {
    use rust_decimal::prelude::ToPrimitive;
    value.to_f64().unwrap_or(0.0)
}

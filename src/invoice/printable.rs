use serde::Serialize;
use std::path::{Path, PathBuf};

use super::preview::{display_date, words_or_dash};
use crate::calc::format_money;
use crate::document::{BankDetails, Client, Company, InvoiceState};
use crate::error::Result;
use crate::pdf::generate_pdf;

/// A row of the printed item table, already formatted
#[derive(Debug, Serialize)]
pub struct PrintableRow {
    pub quantity: String,
    pub description: String,
    pub hsn_code: String,
    pub from_date: String,
    pub to_date: String,
    pub days: String,
    pub rate: String,
    pub amount: String,
}

/// Complete invoice data for PDF generation
#[derive(Debug, Serialize)]
pub struct PrintableInvoice {
    pub title: String,
    pub number: String,
    pub date: String,
    pub company: Company,
    pub client: Client,
    pub bank: BankDetails,
    pub terms: String,
    pub rows: Vec<PrintableRow>,
    pub subtotal: String,
    pub sgst_rate: String,
    pub sgst_amount: String,
    pub cgst_rate: String,
    pub cgst_amount: String,
    pub igst_rate: String,
    pub igst_amount: String,
    pub cartage: String,
    pub grand_total: String,
    pub amount_in_words: String,
}

impl PrintableInvoice {
    pub fn from_state(state: &InvoiceState) -> Self {
        let symbol = &state.currency_symbol;
        let totals = state.totals();

        let rows = state
            .items
            .iter()
            .map(|item| PrintableRow {
                quantity: item.quantity.to_string(),
                description: item.description.clone(),
                hsn_code: item.hsn_code.clone(),
                from_date: display_date(item.from_date),
                to_date: display_date(item.to_date),
                days: item.day_span().map(|d| d.to_string()).unwrap_or_default(),
                rate: item.rate.to_string(),
                amount: format_money(item.amount(), symbol),
            })
            .collect();

        Self {
            title: state.title.clone(),
            number: state.number.clone(),
            date: display_date(state.date),
            company: state.company.clone(),
            client: state.client.clone(),
            bank: state.bank.clone(),
            terms: state.terms.clone(),
            rows,
            subtotal: format_money(totals.subtotal, symbol),
            sgst_rate: state.sgst_rate.to_string(),
            sgst_amount: format_money(totals.sgst_amount, symbol),
            cgst_rate: state.cgst_rate.to_string(),
            cgst_amount: format_money(totals.cgst_amount, symbol),
            igst_rate: state.igst_rate.to_string(),
            igst_amount: format_money(totals.igst_amount, symbol),
            cartage: format_money(totals.cartage, symbol),
            grand_total: format_money(totals.grand_total, symbol),
            amount_in_words: words_or_dash(&totals),
        }
    }
}

/// Default PDF location: the document path with a `.pdf` extension
pub fn default_pdf_path(document: &Path) -> PathBuf {
    document.with_extension("pdf")
}

/// Print an invoice to PDF and return where it was written
pub fn print_invoice(state: &InvoiceState, output_path: &Path) -> Result<PathBuf> {
    let data = PrintableInvoice::from_state(state);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    generate_pdf(&data, output_path)?;

    tracing::info!(path = %output_path.display(), number = %state.number, "printed invoice");
    Ok(output_path.to_path_buf())
}

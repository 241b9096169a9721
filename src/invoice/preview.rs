use chrono::NaiveDate;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::calc::{format_money, Charges, InvoiceTotals};
use crate::document::{InvoiceState, ItemId};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "QTY")]
    quantity: String,
    #[tabled(rename = "ITEMS")]
    description: String,
    #[tabled(rename = "HSN")]
    hsn_code: String,
    #[tabled(rename = "FROM")]
    from: String,
    #[tabled(rename = "TO")]
    to: String,
    #[tabled(rename = "DAYS")]
    days: String,
    #[tabled(rename = "RATE")]
    rate: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

/// Per-row figures in the JSON summary
#[derive(Debug, Serialize)]
pub struct ItemSummary {
    pub id: ItemId,
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64,
    pub days: Option<i64>,
}

/// Machine-readable view of an invoice and its derived figures
#[derive(Debug, Serialize)]
pub struct InvoiceSummary {
    pub number: String,
    pub date: String,
    pub currency_symbol: String,
    pub items: Vec<ItemSummary>,
    pub charges: Charges,
    pub totals: InvoiceTotals,
    pub amount_in_words: Option<String>,
}

impl InvoiceSummary {
    pub fn from_state(state: &InvoiceState) -> Self {
        let totals = state.totals();
        Self {
            number: state.number.clone(),
            date: display_date(state.date),
            currency_symbol: state.currency_symbol.clone(),
            items: state
                .items
                .iter()
                .map(|item| ItemSummary {
                    id: item.id,
                    description: item.description.clone(),
                    quantity: item.quantity,
                    rate: item.rate,
                    amount: item.amount(),
                    days: item.day_span(),
                })
                .collect(),
            charges: state.charges(),
            amount_in_words: totals.amount_in_words(),
            totals,
        }
    }
}

pub(crate) fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Words line shown under the table; "-" when the total is negative.
pub(crate) fn words_or_dash(totals: &InvoiceTotals) -> String {
    totals.amount_in_words().unwrap_or_else(|| "-".to_string())
}

/// Render the invoice as plain text for the terminal
pub fn render_preview(state: &InvoiceState) -> String {
    let symbol = &state.currency_symbol;
    let totals = state.totals();
    let mut out = String::new();

    out.push_str(&format!("{}\n", state.title));
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("{}\n", state.company.name));
    for line in state.company.address.lines() {
        out.push_str(&format!("{line}\n"));
    }
    out.push_str(&format!("GSTIN No.: {}\n", state.company.gstin));
    if !state.company.phone.is_empty() {
        out.push_str(&format!("Phone:     {}\n", state.company.phone.replace('\n', ", ")));
    }
    out.push_str(&format!("Invoice No. {}    Dated: {}\n", state.number, display_date(state.date)));
    out.push_str(&format!("{}\n", "-".repeat(60)));
    out.push_str(&format!("Recipient: {}\n", state.client.name));
    for line in state.client.address.lines() {
        out.push_str(&format!("           {line}\n"));
    }
    out.push_str(&format!("GSTIN:     {}\n", state.client.gstin));
    out.push_str(&format!("Delivery:  {}\n", state.client.delivery_address));
    out.push('\n');

    if state.items.is_empty() {
        out.push_str("No line items.\n");
    } else {
        let rows: Vec<ItemRow> = state
            .items
            .iter()
            .map(|item| ItemRow {
                id: item.id.to_string(),
                quantity: item.quantity.to_string(),
                description: item.description.clone(),
                hsn_code: item.hsn_code.clone(),
                from: display_date(item.from_date),
                to: display_date(item.to_date),
                days: item.day_span().map(|d| d.to_string()).unwrap_or_default(),
                rate: item.rate.to_string(),
                amount: format_money(item.amount(), symbol),
            })
            .collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        out.push_str(&format!("{table}\n"));
    }
    out.push('\n');

    let lines = [
        ("Total".to_string(), totals.subtotal),
        (format!("SGST @ {}%", state.sgst_rate), totals.sgst_amount),
        (format!("CGST @ {}%", state.cgst_rate), totals.cgst_amount),
        (format!("IGST @ {}%", state.igst_rate), totals.igst_amount),
        ("Cartage".to_string(), totals.cartage),
        ("G. TOTAL".to_string(), totals.grand_total),
    ];
    for (label, value) in lines {
        out.push_str(&format!("{:<16}{:>16}\n", label, format_money(value, symbol)));
    }
    out.push('\n');
    out.push_str(&format!("Amount in words: {}\n", words_or_dash(&totals)));

    if !state.bank.bank_name.is_empty() || !state.bank.account_number.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n", state.bank.account_holder));
        out.push_str(&format!("Bank Name: {}\n", state.bank.bank_name));
        out.push_str(&format!("A/C No.:   {}\n", state.bank.account_number));
        out.push_str(&format!("IFSC Code: {}\n", state.bank.ifsc_code));
    }
    if !state.terms.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n", state.terms));
    }
    out.push_str(&format!("\nFor {}", state.company.name));

    out
}

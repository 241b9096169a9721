use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::edit::{Edit, InvoiceField};
use super::item::{blank_date, coerce_number, lenient_number, ItemId, LineItem};
use super::party::{BankDetails, Client, Company};
use crate::calc::{compute_totals, parse_date, Charges, InvoiceTotals};
use crate::error::{InvoiceError, Result};

/// The editable invoice.
///
/// Updates never mutate in place: each `with_*`/`apply` call returns a new
/// state, so callers can keep the previous one around. Totals are not stored;
/// call [`InvoiceState::totals`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceState {
    pub title: String,
    pub number: String,
    #[serde(with = "blank_date")]
    pub date: Option<NaiveDate>,
    pub currency_symbol: String,
    #[serde(deserialize_with = "lenient_number")]
    pub sgst_rate: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub cgst_rate: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub igst_rate: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub cartage: f64,
    pub terms: String,
    pub company: Company,
    pub client: Client,
    pub bank: BankDetails,
    pub items: Vec<LineItem>,
}

impl Default for InvoiceState {
    fn default() -> Self {
        Self {
            title: "GST Invoice".to_string(),
            number: String::new(),
            date: None,
            currency_symbol: "₹".to_string(),
            sgst_rate: 0.0,
            cgst_rate: 0.0,
            igst_rate: 0.0,
            cartage: 0.0,
            terms: String::new(),
            company: Company::default(),
            client: Client::default(),
            bank: BankDetails::default(),
            items: Vec::new(),
        }
    }
}

impl InvoiceState {
    /// Empty invoice dated `today` with a single blank row.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: Some(today),
            ..Self::default()
        }
        .with_item_added()
    }

    /// A filled-in example: a timber rental bill with IGST at 18%.
    pub fn sample() -> Self {
        let july_1 = NaiveDate::from_ymd_opt(2023, 7, 1);
        let july_31 = NaiveDate::from_ymd_opt(2023, 7, 31);
        let rows = [
            ("Prop 3x2", 3000.0, 1.20),
            ("Prop 2x2", 2700.0, 1.10),
            ("Standard 3 mtr", 845.0, 26.59),
        ];

        let items = rows
            .iter()
            .enumerate()
            .map(|(i, (description, quantity, rate))| LineItem {
                description: description.to_string(),
                hsn_code: "9954".to_string(),
                quantity: *quantity,
                rate: *rate,
                from_date: july_1,
                to_date: july_31,
                ..LineItem::new(ItemId(i as u64 + 1))
            })
            .collect();

        Self {
            title: "GST Invoice".to_string(),
            number: "279".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 8, 21),
            currency_symbol: "₹".to_string(),
            sgst_rate: 0.0,
            cgst_rate: 0.0,
            igst_rate: 18.0,
            cartage: 0.0,
            terms: "The bill is not paid within 8 days of presentation, interest @ 24% per annum will be charged.\n\
                    In case of any objection in amount please return the bill with in eight days of the receipt otherwise it will be treated as accepted."
                .to_string(),
            company: Company {
                name: "BALA JEE TIMBER".to_string(),
                address: "Plot No. 11&12 Shuttering Market Vill. Sanouli, Old Ambala Road\n\
                          Zirakpur, Distt. Mohali, Punjab-140603"
                    .to_string(),
                gstin: "03AARFB9110B1ZX".to_string(),
                phone: "M. 9466053608\n7534807429".to_string(),
            },
            client: Client {
                name: "VS & V Communication Pvt. Ltd.".to_string(),
                address: "Mata Sadan Chowk, Jwalather Handwa".to_string(),
                gstin: "05AARCV9746J1Z...".to_string(),
                delivery_address: "Doon Hospital Gate No. 4 Dehradun".to_string(),
            },
            bank: BankDetails {
                account_holder: "BALA JEE TIMBER".to_string(),
                bank_name: "AXIS Bank, Rohtak".to_string(),
                account_number: "917020045984632".to_string(),
                ifsc_code: "UTIB0000204".to_string(),
            },
            items,
        }
    }

    /// Id for the next new row: one past the largest id in use.
    pub fn next_item_id(&self) -> ItemId {
        let max = self.items.iter().map(|item| item.id.0).max().unwrap_or(0);
        ItemId(max + 1)
    }

    pub fn item(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Copy with a fresh blank row appended.
    pub fn with_item_added(&self) -> Self {
        let id = self.next_item_id();
        let mut next = self.clone();
        next.items.push(LineItem::new(id));
        tracing::debug!(%id, "added line item");
        next
    }

    /// Copy without the row `id`. Unknown ids leave the items as they are.
    pub fn with_item_removed(&self, id: ItemId) -> Self {
        let mut next = self.clone();
        next.items.retain(|item| item.id != id);
        let removed = next.items.len() != self.items.len();
        tracing::debug!(%id, removed, "removed line item");
        next
    }

    /// Copy with one field set from form text. Numeric fields are coerced,
    /// date fields must be blank or `YYYY-MM-DD`.
    pub fn apply(&self, edit: &Edit, value: &str) -> Result<Self> {
        let mut next = self.clone();
        match *edit {
            Edit::Invoice(field) => next.set(field, value)?,
            Edit::Item(id, field) => {
                let item = next
                    .items
                    .iter_mut()
                    .find(|item| item.id == id)
                    .ok_or(InvoiceError::ItemNotFound(id.0))?;
                item.set(field, value)?;
            }
        }
        tracing::debug!(?edit, value, "applied edit");
        Ok(next)
    }

    fn set(&mut self, field: InvoiceField, value: &str) -> Result<()> {
        let text = value.to_string();
        match field {
            InvoiceField::Title => self.title = text,
            InvoiceField::Number => self.number = text,
            InvoiceField::Date => self.date = parse_date(value)?,
            InvoiceField::CurrencySymbol => self.currency_symbol = text,
            InvoiceField::SgstRate => self.sgst_rate = coerce_number(value),
            InvoiceField::CgstRate => self.cgst_rate = coerce_number(value),
            InvoiceField::IgstRate => self.igst_rate = coerce_number(value),
            InvoiceField::Cartage => self.cartage = coerce_number(value),
            InvoiceField::Terms => self.terms = text,
            InvoiceField::CompanyName => self.company.name = text,
            InvoiceField::CompanyAddress => self.company.address = text,
            InvoiceField::CompanyGstin => self.company.gstin = text,
            InvoiceField::CompanyPhone => self.company.phone = text,
            InvoiceField::ClientName => self.client.name = text,
            InvoiceField::ClientAddress => self.client.address = text,
            InvoiceField::ClientGstin => self.client.gstin = text,
            InvoiceField::DeliveryAddress => self.client.delivery_address = text,
            InvoiceField::BankAccountHolder => self.bank.account_holder = text,
            InvoiceField::BankName => self.bank.bank_name = text,
            InvoiceField::AccountNumber => self.bank.account_number = text,
            InvoiceField::IfscCode => self.bank.ifsc_code = text,
        }
        Ok(())
    }

    pub fn charges(&self) -> Charges {
        Charges {
            sgst_rate: self.sgst_rate,
            cgst_rate: self.cgst_rate,
            igst_rate: self.igst_rate,
            cartage: self.cartage,
        }
    }

    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(&self.items, self.charges())
    }

    /// Reject documents where two rows share an id.
    pub(crate) fn check_item_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(InvoiceError::DuplicateItemId(item.id.0));
            }
        }
        Ok(())
    }
}

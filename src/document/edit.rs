use std::str::FromStr;

use super::item::ItemId;
use crate::error::{InvoiceError, Result};

/// Editable top-level invoice fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceField {
    Title,
    Number,
    Date,
    CurrencySymbol,
    SgstRate,
    CgstRate,
    IgstRate,
    Cartage,
    Terms,
    CompanyName,
    CompanyAddress,
    CompanyGstin,
    CompanyPhone,
    ClientName,
    ClientAddress,
    ClientGstin,
    DeliveryAddress,
    BankAccountHolder,
    BankName,
    AccountNumber,
    IfscCode,
}

/// Editable line item fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Description,
    HsnCode,
    Quantity,
    Rate,
    FromDate,
    ToDate,
}

const INVOICE_KEYS: &[(&str, InvoiceField)] = &[
    ("title", InvoiceField::Title),
    ("number", InvoiceField::Number),
    ("date", InvoiceField::Date),
    ("currency_symbol", InvoiceField::CurrencySymbol),
    ("sgst_rate", InvoiceField::SgstRate),
    ("cgst_rate", InvoiceField::CgstRate),
    ("igst_rate", InvoiceField::IgstRate),
    ("cartage", InvoiceField::Cartage),
    ("terms", InvoiceField::Terms),
    ("company.name", InvoiceField::CompanyName),
    ("company.address", InvoiceField::CompanyAddress),
    ("company.gstin", InvoiceField::CompanyGstin),
    ("company.phone", InvoiceField::CompanyPhone),
    ("client.name", InvoiceField::ClientName),
    ("client.address", InvoiceField::ClientAddress),
    ("client.gstin", InvoiceField::ClientGstin),
    ("client.delivery_address", InvoiceField::DeliveryAddress),
    ("bank.account_holder", InvoiceField::BankAccountHolder),
    ("bank.bank_name", InvoiceField::BankName),
    ("bank.account_number", InvoiceField::AccountNumber),
    ("bank.ifsc_code", InvoiceField::IfscCode),
];

const ITEM_KEYS: &[(&str, ItemField)] = &[
    ("description", ItemField::Description),
    ("hsn_code", ItemField::HsnCode),
    ("quantity", ItemField::Quantity),
    ("rate", ItemField::Rate),
    ("from_date", ItemField::FromDate),
    ("to_date", ItemField::ToDate),
];

impl FromStr for InvoiceField {
    type Err = InvoiceError;

    fn from_str(key: &str) -> Result<Self> {
        INVOICE_KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, field)| *field)
            .ok_or_else(|| InvoiceError::UnknownField(key.to_string()))
    }
}

impl FromStr for ItemField {
    type Err = InvoiceError;

    fn from_str(key: &str) -> Result<Self> {
        ITEM_KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, field)| *field)
            .ok_or_else(|| InvoiceError::UnknownField(key.to_string()))
    }
}

/// Target of a single field edit.
///
/// Keys are either a top-level field (`igst_rate`, `company.name`) or an item
/// field addressed by id (`items.2.rate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Invoice(InvoiceField),
    Item(ItemId, ItemField),
}

impl FromStr for Edit {
    type Err = InvoiceError;

    fn from_str(key: &str) -> Result<Self> {
        let key = key.trim();
        if let Some(rest) = key.strip_prefix("items.") {
            let (id, field) = rest
                .split_once('.')
                .ok_or_else(|| InvoiceError::UnknownField(key.to_string()))?;
            let id: u64 = id
                .parse()
                .map_err(|_| InvoiceError::UnknownField(key.to_string()))?;
            let field: ItemField = field
                .parse()
                .map_err(|_| InvoiceError::UnknownField(key.to_string()))?;
            return Ok(Edit::Item(ItemId(id), field));
        }
        key.parse().map(Edit::Invoice)
    }
}

/// Parse `key=value`. The value may be empty and may itself contain '='.
pub fn parse_assignment(input: &str) -> Result<(Edit, String)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| InvoiceError::InvalidEdit(input.to_string()))?;
    if key.trim().is_empty() {
        return Err(InvoiceError::InvalidEdit(input.to_string()));
    }
    Ok((key.parse::<Edit>()?, value.to_string()))
}

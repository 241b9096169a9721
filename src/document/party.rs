use serde::{Deserialize, Serialize};

/// The issuing company, printed in the invoice header
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub gstin: String,
    pub phone: String,
}

/// Recipient of the invoice and where the goods go
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Client {
    pub name: String,
    pub address: String,
    pub gstin: String,
    pub delivery_address: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BankDetails {
    pub account_holder: String,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc_code: String,
}

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::edit::ItemField;
use crate::calc::{inclusive_day_span, parse_date};
use crate::error::Result;

/// Identifier of a line item, unique within one invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One billable row on the invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hsn_code: String,
    #[serde(default = "default_quantity", deserialize_with = "lenient_number")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rate: f64,
    #[serde(default, with = "blank_date")]
    pub from_date: Option<NaiveDate>,
    #[serde(default, with = "blank_date")]
    pub to_date: Option<NaiveDate>,
}

fn default_quantity() -> f64 {
    1.0
}

impl LineItem {
    /// A fresh row: quantity 1, rate 0, everything else blank.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            description: String::new(),
            hsn_code: String::new(),
            quantity: default_quantity(),
            rate: 0.0,
            from_date: None,
            to_date: None,
        }
    }

    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }

    pub fn day_span(&self) -> Option<i64> {
        inclusive_day_span(self.from_date, self.to_date)
    }

    pub(crate) fn set(&mut self, field: ItemField, value: &str) -> Result<()> {
        match field {
            ItemField::Description => self.description = value.to_string(),
            ItemField::HsnCode => self.hsn_code = value.to_string(),
            ItemField::Quantity => self.quantity = coerce_number(value),
            ItemField::Rate => self.rate = coerce_number(value),
            ItemField::FromDate => self.from_date = parse_date(value)?,
            ItemField::ToDate => self.to_date = parse_date(value)?,
        }
        Ok(())
    }
}

/// Numeric form input: blank, non-numeric or non-finite text becomes 0.
pub fn coerce_number(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Accept a TOML number or a string, coercing strings like form input.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) if n.is_finite() => n,
        NumberOrText::Number(_) => 0.0,
        NumberOrText::Text(text) => coerce_number(&text),
    })
}

/// Optional dates stored as `"YYYY-MM-DD"` or `""`.
pub(crate) mod blank_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::calc::parse_date;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_date(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("26.59"), 26.59);
        assert_eq!(coerce_number(" 18 "), 18.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("-2.5"), -2.5);
    }

    #[test]
    fn test_new_item_defaults() {
        let item = LineItem::new(ItemId(4));
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.rate, 0.0);
        assert_eq!(item.amount(), 0.0);
        assert_eq!(item.day_span(), None);
    }
}

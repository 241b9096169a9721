use serde::Serialize;

use super::words::number_to_words;
use crate::document::LineItem;

/// Tax rates (in percent) and the flat cartage fee applied to an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Charges {
    pub sgst_rate: f64,
    pub cgst_rate: f64,
    pub igst_rate: f64,
    pub cartage: f64,
}

/// Derived invoice totals. Never stored; recompute from the items instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub sgst_amount: f64,
    pub cgst_amount: f64,
    pub igst_amount: f64,
    pub cartage: f64,
    pub grand_total: f64,
}

impl InvoiceTotals {
    /// Grand total rounded to whole rupees, if it can be spelled out.
    pub fn rounded_grand_total(&self) -> Option<u64> {
        let rounded = self.grand_total.round();
        if !rounded.is_finite() || rounded < 0.0 {
            return None;
        }
        Some(rounded as u64)
    }

    pub fn amount_in_words(&self) -> Option<String> {
        self.rounded_grand_total().map(number_to_words)
    }
}

/// Tax on `subtotal` at `rate` percent.
pub fn tax_amount(subtotal: f64, rate: f64) -> f64 {
    if rate == 0.0 {
        return 0.0;
    }
    subtotal * (rate / 100.0)
}

/// Compute subtotal, the three GST amounts and the grand total.
pub fn compute_totals(items: &[LineItem], charges: Charges) -> InvoiceTotals {
    // Explicit fold from +0.0: `Iterator::sum` starts at -0.0 for floats,
    // which would print an empty invoice as "-0.00".
    let subtotal = items
        .iter()
        .map(LineItem::amount)
        .fold(0.0, |acc, amount| acc + amount);

    let sgst_amount = tax_amount(subtotal, charges.sgst_rate);
    let cgst_amount = tax_amount(subtotal, charges.cgst_rate);
    let igst_amount = tax_amount(subtotal, charges.igst_rate);
    let grand_total = subtotal + sgst_amount + cgst_amount + igst_amount + charges.cartage;

    tracing::trace!(items = items.len(), subtotal, grand_total, "computed totals");

    InvoiceTotals {
        subtotal,
        sgst_amount,
        cgst_amount,
        igst_amount,
        cartage: charges.cartage,
        grand_total,
    }
}

/// Symbol-prefixed amount with two decimals.
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    // Keep "-0.00" off the page
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}{:.2}", currency_symbol, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals_with_grand(grand_total: f64) -> InvoiceTotals {
        InvoiceTotals {
            subtotal: grand_total,
            sgst_amount: 0.0,
            cgst_amount: 0.0,
            igst_amount: 0.0,
            cartage: 0.0,
            grand_total,
        }
    }

    #[test]
    fn test_rounded_grand_total() {
        assert_eq!(totals_with_grand(34260.769).rounded_grand_total(), Some(34261));
        assert_eq!(totals_with_grand(10.5).rounded_grand_total(), Some(11));
        assert_eq!(totals_with_grand(-0.4).rounded_grand_total(), Some(0));
        assert_eq!(totals_with_grand(-3.0).rounded_grand_total(), None);
        assert_eq!(totals_with_grand(f64::NAN).rounded_grand_total(), None);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(29034.55, "₹"), "₹29034.55");
        assert_eq!(format_money(-0.0, "₹"), "₹0.00");
        assert_eq!(format_money(5226.219, "Rs. "), "Rs. 5226.22");
    }

    #[test]
    fn test_zero_rate_is_exactly_zero() {
        assert_eq!(tax_amount(-120.0, 0.0).to_bits(), 0.0f64.to_bits());
    }
}

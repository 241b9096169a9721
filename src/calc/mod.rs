//! Pure derived calculations: totals, amount in words and date spans.

mod days;
mod totals;
mod words;

pub use days::{day_span_label, inclusive_day_span, parse_date};
pub use totals::{compute_totals, format_money, tax_amount, Charges, InvoiceTotals};
pub use words::number_to_words;

use chrono::NaiveDate;

use crate::error::{InvoiceError, Result};

/// Inclusive number of days from `from` to `to`.
///
/// Returns `None` when either date is missing or `to` is before `from`.
/// The same date on both ends counts as one day.
pub fn inclusive_day_span(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<i64> {
    let (from, to) = (from?, to?);
    if to < from {
        return None;
    }
    Some((to - from).num_days() + 1)
}

/// Day span as shown in the invoice table: the count, or nothing.
pub fn day_span_label(from: Option<NaiveDate>, to: Option<NaiveDate>) -> String {
    inclusive_day_span(from, to)
        .map(|days| days.to_string())
        .unwrap_or_default()
}

/// Parse a form date. Blank input means "no date".
pub fn parse_date(input: &str) -> Result<Option<NaiveDate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| InvoiceError::InvalidDate(input.to_string()))
}

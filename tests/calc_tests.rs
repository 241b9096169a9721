use chrono::NaiveDate;
use gst_invoice::calc::{compute_totals, inclusive_day_span, number_to_words, Charges};
use gst_invoice::document::{ItemId, LineItem};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn item(id: u64, quantity: f64, rate: f64) -> LineItem {
    LineItem {
        quantity,
        rate,
        ..LineItem::new(ItemId(id))
    }
}

fn timber_items() -> Vec<LineItem> {
    vec![
        item(1, 3000.0, 1.20),
        item(2, 2700.0, 1.10),
        item(3, 845.0, 26.59),
    ]
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

// ── Totals ──────────────────────────────────────────────────────────────────

#[test]
fn test_empty_invoice_totals_are_zero() {
    let totals = compute_totals(&[], Charges::default());
    assert_eq!(totals.subtotal, 0.0);
    assert_eq!(totals.sgst_amount, 0.0);
    assert_eq!(totals.cgst_amount, 0.0);
    assert_eq!(totals.igst_amount, 0.0);
    assert_eq!(totals.grand_total, 0.0);
    assert!(totals.subtotal.is_sign_positive());
}

#[test]
fn test_subtotal_sums_quantity_times_rate() {
    let totals = compute_totals(&timber_items(), Charges::default());
    assert_close(totals.subtotal, 29038.55);
    assert_close(totals.grand_total, 29038.55);
}

#[test]
fn test_igst_on_subtotal() {
    let charges = Charges {
        igst_rate: 18.0,
        ..Charges::default()
    };
    let totals = compute_totals(&timber_items(), charges);
    assert_close(totals.igst_amount, 5226.939);
    assert_eq!(totals.sgst_amount, 0.0);
    assert_eq!(totals.cgst_amount, 0.0);
    assert_close(totals.grand_total, 34265.489);
    assert_eq!(totals.rounded_grand_total(), Some(34265));
}

#[test]
fn test_split_gst_and_cartage() {
    let charges = Charges {
        sgst_rate: 9.0,
        cgst_rate: 9.0,
        igst_rate: 0.0,
        cartage: 500.0,
    };
    let totals = compute_totals(&[item(1, 10.0, 100.0)], charges);
    assert_close(totals.subtotal, 1000.0);
    assert_close(totals.sgst_amount, 90.0);
    assert_close(totals.cgst_amount, 90.0);
    assert_close(totals.cartage, 500.0);
    assert_close(totals.grand_total, 1680.0);
}

#[test]
fn test_negative_rates_are_accepted() {
    let charges = Charges {
        igst_rate: -10.0,
        ..Charges::default()
    };
    let totals = compute_totals(&[item(1, 1.0, 200.0)], charges);
    assert_close(totals.igst_amount, -20.0);
    assert_close(totals.grand_total, 180.0);
}

#[test]
fn test_totals_are_bit_identical_across_calls() {
    let charges = Charges {
        sgst_rate: 2.5,
        cgst_rate: 2.5,
        igst_rate: 18.0,
        cartage: 123.45,
    };
    let items = timber_items();
    let first = compute_totals(&items, charges);
    let second = compute_totals(&items, charges);
    assert_eq!(first.subtotal.to_bits(), second.subtotal.to_bits());
    assert_eq!(first.igst_amount.to_bits(), second.igst_amount.to_bits());
    assert_eq!(first.grand_total.to_bits(), second.grand_total.to_bits());
    assert_eq!(first, second);
}

#[test]
fn test_negative_grand_total_has_no_words() {
    let charges = Charges {
        cartage: -50.0,
        ..Charges::default()
    };
    let totals = compute_totals(&[item(1, 1.0, 10.0)], charges);
    assert_eq!(totals.rounded_grand_total(), None);
    assert_eq!(totals.amount_in_words(), None);
}

// ── Words ───────────────────────────────────────────────────────────────────

#[test]
fn test_zero_has_no_only_suffix() {
    assert_eq!(number_to_words(0), "Zero");
}

#[test]
fn test_small_numbers() {
    assert_eq!(number_to_words(1), "One Only");
    assert_eq!(number_to_words(11), "Eleven Only");
    assert_eq!(number_to_words(19), "Nineteen Only");
    assert_eq!(number_to_words(20), "Twenty Only");
    assert_eq!(number_to_words(45), "Forty Five Only");
    assert_eq!(number_to_words(100), "One Hundred Only");
    assert_eq!(number_to_words(110), "One Hundred Ten Only");
}

#[test]
fn test_indian_groups() {
    assert_eq!(
        number_to_words(29035),
        "Twenty Nine Thousand Thirty Five Only"
    );
    assert_eq!(number_to_words(100000), "One Lakh Only");
    assert_eq!(number_to_words(10000000), "One Crore Only");
    assert_eq!(
        number_to_words(34265),
        "Thirty Four Thousand Two Hundred Sixty Five Only"
    );
    assert_eq!(
        number_to_words(12_34_56_789),
        "Twelve Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred Eighty Nine Only"
    );
}

#[test]
fn test_zero_groups_are_omitted() {
    assert_eq!(number_to_words(10_00_001), "Ten Lakh One Only");
    assert_eq!(number_to_words(2_00_00_000), "Two Crore Only");
    assert_eq!(number_to_words(1_000), "One Thousand Only");
}

#[test]
fn test_upper_range() {
    assert_eq!(
        number_to_words(999_999_999_999),
        "Ninety Nine Thousand Nine Hundred Ninety Nine Crore \
         Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine Only"
    );
}

// ── Day span ────────────────────────────────────────────────────────────────

#[test]
fn test_full_month_is_inclusive() {
    assert_eq!(inclusive_day_span(date(2023, 7, 1), date(2023, 7, 31)), Some(31));
}

#[test]
fn test_same_day_counts_as_one() {
    assert_eq!(inclusive_day_span(date(2023, 7, 1), date(2023, 7, 1)), Some(1));
}

#[test]
fn test_end_before_start_is_empty() {
    assert_eq!(inclusive_day_span(date(2023, 7, 31), date(2023, 7, 1)), None);
}

#[test]
fn test_missing_date_is_empty() {
    assert_eq!(inclusive_day_span(None, date(2023, 7, 1)), None);
    assert_eq!(inclusive_day_span(date(2023, 7, 1), None), None);
    assert_eq!(inclusive_day_span(None, None), None);
}

#[test]
fn test_span_across_year_and_leap_day() {
    assert_eq!(inclusive_day_span(date(2023, 12, 31), date(2024, 1, 1)), Some(2));
    assert_eq!(inclusive_day_span(date(2024, 1, 1), date(2024, 12, 31)), Some(366));
}

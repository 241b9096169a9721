//! Property-based tests for the calculation engine.

use chrono::{Duration, NaiveDate};
use gst_invoice::calc::{compute_totals, inclusive_day_span, number_to_words, Charges};
use gst_invoice::document::{ItemId, LineItem};
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Quantities and rates as typed on an invoice: up to two decimals.
fn arb_decimal(max_cents: i64) -> impl Strategy<Value = f64> {
    (0..max_cents).prop_map(|cents| cents as f64 / 100.0)
}

fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec((arb_decimal(1_000_000), arb_decimal(10_000_000)), 0..8).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (quantity, rate))| LineItem {
                    quantity,
                    rate,
                    ..LineItem::new(ItemId(i as u64 + 1))
                })
                .collect()
        },
    )
}

fn arb_charges() -> impl Strategy<Value = Charges> {
    (
        arb_decimal(3_000),
        arb_decimal(3_000),
        arb_decimal(3_000),
        arb_decimal(1_000_000),
    )
        .prop_map(|(sgst_rate, cgst_rate, igst_rate, cartage)| Charges {
            sgst_rate,
            cgst_rate,
            igst_rate,
            cartage,
        })
}

proptest! {
    #[test]
    fn words_are_well_formed(amount in 1u64..1_000_000_000_000) {
        let words = number_to_words(amount);
        prop_assert!(words.ends_with(" Only"));
        prop_assert!(!words.contains("  "));
        prop_assert!(!words.contains("Zero"));
        prop_assert!(!words.starts_with(' '));
        prop_assert!(words.split(' ').all(|w| w.chars().next().is_some_and(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn words_name_every_nonzero_group(amount in 1u64..1_000_000_000_000) {
        let words = number_to_words(amount);
        prop_assert_eq!(words.contains("Crore"), amount >= 10_000_000);
        prop_assert_eq!(words.contains("Lakh"), (amount % 10_000_000) / 100_000 > 0);
    }

    #[test]
    fn totals_are_pure(items in arb_items(), charges in arb_charges()) {
        let first = compute_totals(&items, charges);
        let second = compute_totals(&items, charges);
        prop_assert_eq!(first.subtotal.to_bits(), second.subtotal.to_bits());
        prop_assert_eq!(first.grand_total.to_bits(), second.grand_total.to_bits());
    }

    #[test]
    fn grand_total_adds_up(items in arb_items(), charges in arb_charges()) {
        let t = compute_totals(&items, charges);
        let expected = t.subtotal + t.sgst_amount + t.cgst_amount + t.igst_amount + charges.cartage;
        prop_assert_eq!(t.grand_total.to_bits(), expected.to_bits());
        prop_assert!(t.grand_total >= t.subtotal);
    }

    #[test]
    fn zero_rates_add_no_tax(items in arb_items()) {
        let t = compute_totals(&items, Charges::default());
        prop_assert_eq!(t.sgst_amount, 0.0);
        prop_assert_eq!(t.cgst_amount, 0.0);
        prop_assert_eq!(t.igst_amount, 0.0);
        prop_assert_eq!(t.grand_total, t.subtotal);
    }

    #[test]
    fn day_span_is_inclusive(offset in 0i64..20_000, len in 0i64..2_000) {
        let from = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset);
        let to = from + Duration::days(len);
        prop_assert_eq!(inclusive_day_span(Some(from), Some(to)), Some(len + 1));
        if len > 0 {
            prop_assert_eq!(inclusive_day_span(Some(to), Some(from)), None);
        }
    }
}

/// Words for 0..=19. Zero maps to "" so "Twenty" never becomes "Twenty Zero".
const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Convert a whole rupee amount to English words using Indian grouping
/// (crore, lakh, thousand, hundred), followed by " Only".
///
/// `0` renders as `"Zero"` without the suffix. Callers round the amount and
/// check it is non-negative before calling.
///
/// ```
/// use gst_invoice::number_to_words;
///
/// assert_eq!(number_to_words(29035), "Twenty Nine Thousand Thirty Five Only");
/// assert_eq!(number_to_words(100000), "One Lakh Only");
/// ```
pub fn number_to_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero".to_string();
    }

    let words = group_words(amount);
    let collapsed = words.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{collapsed} Only")
}

/// Crore, lakh and thousand cascade without the suffix.
fn group_words(mut amount: u64) -> String {
    let mut out = String::new();

    let crore = amount / CRORE;
    amount %= CRORE;
    if crore > 0 {
        // Counts of 1,000 crore and up reuse the cascade instead of overflowing
        // the hundreds table.
        let count = if crore > 999 {
            group_words(crore)
        } else {
            hundreds_words(crore)
        };
        out.push_str(&count);
        out.push_str(" Crore ");
    }

    let lakh = amount / LAKH;
    amount %= LAKH;
    if lakh > 0 {
        out.push_str(&hundreds_words(lakh));
        out.push_str(" Lakh ");
    }

    let thousand = amount / THOUSAND;
    amount %= THOUSAND;
    if thousand > 0 {
        out.push_str(&hundreds_words(thousand));
        out.push_str(" Thousand ");
    }

    if amount > 0 {
        out.push_str(&hundreds_words(amount));
    }

    out
}

/// Words for a value in 0..=999.
fn hundreds_words(mut n: u64) -> String {
    let mut out = String::new();

    if n > 99 {
        out.push_str(ONES[(n / 100) as usize]);
        out.push_str(" Hundred ");
        n %= 100;
    }

    if n > 19 {
        out.push_str(TENS[(n / 10) as usize]);
        out.push(' ');
        out.push_str(ONES[(n % 10) as usize]);
    } else {
        out.push_str(ONES[n as usize]);
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundreds_words() {
        assert_eq!(hundreds_words(0), "");
        assert_eq!(hundreds_words(7), "Seven");
        assert_eq!(hundreds_words(13), "Thirteen");
        assert_eq!(hundreds_words(40), "Forty");
        assert_eq!(hundreds_words(99), "Ninety Nine");
        assert_eq!(hundreds_words(305), "Three Hundred Five");
        assert_eq!(hundreds_words(999), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn test_large_crore_count() {
        assert_eq!(
            number_to_words(1_500_000_000),
            "One Hundred Fifty Crore Only"
        );
        assert_eq!(
            number_to_words(10_000_000_000),
            "One Thousand Crore Only"
        );
    }
}

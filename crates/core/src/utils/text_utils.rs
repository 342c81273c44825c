//! Free-text extraction and display formatting.
//!
//! Upstream records carry prices and lot sizes as prose ("₹430 to ₹450 per share",
//! "33 shares"). These helpers pull numbers out of such text and format amounts the
//! way Indian readers expect them (`₹1,48,500`).

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{MISSING_VALUE, RUPEE};

lazy_static! {
    /// First signed decimal number. ASCII digits only; `\d` would also match
    /// other Unicode digit scripts that `f64` cannot parse.
    static ref SIGNED_NUMBER_REGEX: Regex =
        Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").expect("Invalid regex pattern");

    /// Unsigned decimal numbers; hyphens in "430-450" are separators, not signs
    static ref NUMBER_REGEX: Regex =
        Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("Invalid regex pattern");

    /// Trailing "IPO" word, any case
    static ref IPO_SUFFIX_REGEX: Regex =
        Regex::new(r"(?i)\s*\bipo\s*$").expect("Invalid regex pattern");
}

/// Returns the first number in `text`, after removing thousands separators.
///
/// `None` when the text is missing or contains no number.
pub fn parse_first_number(text: Option<&str>) -> Option<f64> {
    let cleaned = text?.replace(',', "");
    SIGNED_NUMBER_REGEX
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Returns the first two numbers in `text` (low and high of a price band).
///
/// No ordering check is made between the two. A single number yields
/// `(Some(n), None)`; callers treat that as "band unknown, show the raw text".
pub fn parse_two_numbers(text: Option<&str>) -> (Option<f64>, Option<f64>) {
    let Some(text) = text else {
        return (None, None);
    };
    let cleaned = text.replace(',', "");
    let mut numbers = NUMBER_REGEX
        .find_iter(&cleaned)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite());
    (numbers.next(), numbers.next())
}

/// Joins entries with ", " after trimming, dropping empties and repeats.
/// First-seen order is kept.
pub fn join_unique<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        let value = item.as_ref().trim();
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.to_string()) {
            unique.push(value.to_string());
        }
    }
    unique.join(", ")
}

/// "Acme Ltd IPO" -> "Acme Ltd". Titles without the suffix are only trimmed.
pub fn strip_ipo_suffix(title: &str) -> String {
    IPO_SUFFIX_REGEX.replace(title.trim(), "").trim().to_string()
}

/// Formats a number with Indian digit grouping: 1234567.5 -> "12,34,567.5".
///
/// Rounded to two decimals, trailing zero decimals dropped. Values too large to count
/// in paise read as "-".
pub fn format_indian_number(value: f64) -> String {
    let scaled = (value.abs() * 100.0).round();
    if !scaled.is_finite() || scaled >= u64::MAX as f64 {
        return MISSING_VALUE.to_string();
    }

    let cents = scaled as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    match fraction {
        0 => format!("{}{}", sign, grouped),
        f if f % 10 == 0 => format!("{}{}.{}", sign, grouped, f / 10),
        f => format!("{}{}.{:02}", sign, grouped, f),
    }
}

/// Rupee amount with Indian grouping: 148500.0 -> "₹1,48,500".
pub fn format_inr(amount: f64) -> String {
    let grouped = format_indian_number(amount.abs());
    if grouped == MISSING_VALUE {
        return grouped;
    }
    if amount < 0.0 {
        format!("-{}{}", RUPEE, grouped)
    } else {
        format!("{}{}", RUPEE, grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_number() {
        assert_eq!(parse_first_number(Some("33 shares")), Some(33.0));
        assert_eq!(parse_first_number(Some("Lot of 1,200 shares")), Some(1200.0));
        assert_eq!(parse_first_number(Some("Change -2.5 today")), Some(-2.5));
        assert_eq!(parse_first_number(Some("₹10 each")), Some(10.0));
        assert_eq!(parse_first_number(Some("TBA")), None);
        assert_eq!(parse_first_number(Some("")), None);
        assert_eq!(parse_first_number(None), None);
    }

    #[test]
    fn test_parse_two_numbers() {
        assert_eq!(
            parse_two_numbers(Some("₹430 to ₹450 per share")),
            (Some(430.0), Some(450.0))
        );
        assert_eq!(
            parse_two_numbers(Some("₹1,250 to ₹1,450")),
            (Some(1250.0), Some(1450.0))
        );
        assert_eq!(
            parse_two_numbers(Some("₹95-₹100")),
            (Some(95.0), Some(100.0))
        );
        assert_eq!(parse_two_numbers(Some("₹108 per share")), (Some(108.0), None));
        assert_eq!(parse_two_numbers(Some("To be announced")), (None, None));
        assert_eq!(parse_two_numbers(None), (None, None));
    }

    #[test]
    fn test_parse_two_numbers_does_not_reorder() {
        assert_eq!(
            parse_two_numbers(Some("₹450 to ₹430")),
            (Some(450.0), Some(430.0))
        );
    }

    #[test]
    fn test_join_unique() {
        assert_eq!(join_unique(["NSE", "BSE", "NSE", ""]), "NSE, BSE");
        assert_eq!(join_unique([" NSE ", "NSE"]), "NSE");
        assert_eq!(join_unique(Vec::<String>::new()), "");
    }

    #[test]
    fn test_strip_ipo_suffix() {
        assert_eq!(strip_ipo_suffix("Acme Ltd IPO"), "Acme Ltd");
        assert_eq!(strip_ipo_suffix("Acme Ltd ipo  "), "Acme Ltd");
        assert_eq!(strip_ipo_suffix("Acme Ltd"), "Acme Ltd");
        assert_eq!(strip_ipo_suffix("Shipo Industries"), "Shipo Industries");
        assert_eq!(strip_ipo_suffix("Hipo"), "Hipo");
        assert_eq!(strip_ipo_suffix("IPO"), "");
    }

    #[test]
    fn test_format_indian_number() {
        assert_eq!(format_indian_number(0.0), "0");
        assert_eq!(format_indian_number(999.0), "999");
        assert_eq!(format_indian_number(14850.0), "14,850");
        assert_eq!(format_indian_number(148500.0), "1,48,500");
        assert_eq!(format_indian_number(10000000.0), "1,00,00,000");
        assert_eq!(format_indian_number(1234567.5), "12,34,567.5");
        assert_eq!(format_indian_number(1234.05), "1,234.05");
        assert_eq!(format_indian_number(-2500.0), "-2,500");
        assert_eq!(format_indian_number(f64::NAN), "-");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(14850.0), "₹14,850");
        assert_eq!(format_inr(193050.0), "₹1,93,050");
        assert_eq!(format_inr(-120.5), "-₹120.5");
    }

    #[test]
    fn test_out_of_range_amounts_are_missing() {
        assert_eq!(format_indian_number(1e20), "-");
        assert_eq!(format_indian_number(-1e20), "-");
        assert_eq!(format_inr(1e20), "-");
        assert_eq!(format_inr(f64::INFINITY), "-");
        assert_eq!(format_inr(f64::MAX), "-");
        assert_eq!(format_inr(1e15), "₹1,00,00,00,00,00,00,000");
    }
}

//! Report formatting utilities for terminal output
//!
//! Every rendered amount goes through these helpers, which round to two
//! decimal places. Analyses themselves never round.

use crate::models::Money;

/// Width of report rules and headers
pub const REPORT_WIDTH: usize = 60;

/// Format a floating-point amount with a currency symbol, rounded to 2 places
pub fn format_amount(value: f64, symbol: &str) -> String {
    let rounded = format!("{:.2}", value.abs());
    // -0.004 rounds to 0.00 and should not keep its sign
    if value < 0.0 && rounded != "0.00" {
        format!("-{}{}", symbol, rounded)
    } else {
        format!("{}{}", symbol, rounded)
    }
}

/// Format a Money amount with a currency symbol
pub fn format_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format a title line followed by a double rule
pub fn format_title(title: &str) -> String {
    format!("{}\n{}\n", title, double_separator(REPORT_WIDTH))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_rounds_to_two_places() {
        assert_eq!(format_amount(1234.5678, "GH₵"), "GH₵1234.57");
        assert_eq!(format_amount(-20.0, "$"), "-$20.00");
        assert_eq!(format_amount(-0.004, "$"), "$0.00");
        assert_eq!(format_amount(100.0 / 3.0, ""), "33.33");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(25.0), "25.0%");
        assert_eq!(format_percentage(33.333), "33.3%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Ghacem", 2), "..");
    }

    #[test]
    fn test_format_title() {
        let title = format_title("Report");
        assert!(title.starts_with("Report\n"));
        assert_eq!(title.lines().nth(1).unwrap().chars().count(), REPORT_WIDTH);
    }
}

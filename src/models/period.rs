//! Calendar month keys
//!
//! Month buckets are keyed by a `(year, month)` pair so that ordered maps
//! iterate in true chronological order. The "Mon-YYYY" label is derived only
//! for display.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month, ordered by year then month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; `month` is 1-based and must be in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following calendar month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Short display label, e.g. "Jan-2025"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = MONTH_ABBREVIATIONS[(self.month - 1) as usize];
        write!(f, "{}-{}", name, self.year)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(MonthKey::from_date(date).label(), "Mar-2024");
    }

    #[test]
    fn test_chronological_order_across_years() {
        let dec = MonthKey::new(2023, 12).unwrap();
        let jan = MonthKey::new(2024, 1).unwrap();
        let feb = MonthKey::new(2023, 2).unwrap();

        let mut keys = vec![jan, dec, feb];
        keys.sort();
        assert_eq!(keys, vec![feb, dec, jan]);

        // The labels alone would sort "Dec-2023" < "Feb-2023" < "Jan-2024"
        assert!(dec.label() < feb.label());
    }

    #[test]
    fn test_next_rolls_over_year() {
        let dec = MonthKey::new(2025, 12).unwrap();
        assert_eq!(dec.next(), MonthKey::new(2026, 1).unwrap());
        assert_eq!(
            MonthKey::new(2025, 6).unwrap().next(),
            MonthKey::new(2025, 7).unwrap()
        );
    }

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(MonthKey::new(2025, 0).is_none());
        assert!(MonthKey::new(2025, 13).is_none());
    }

    #[test]
    fn test_serializes_as_label() {
        let key = MonthKey::new(2025, 10).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"Oct-2025\"");
    }
}

//! Cash Needs Forecast
//!
//! Flat projection of the current burn rate over the coming months. No trend
//! or seasonality is modelled: every projected month needs the same amount.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::report::{format_amount, format_title, separator, REPORT_WIDTH};
use crate::models::MonthKey;

/// Projected cash needs per future month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashForecast {
    /// Burn rate used for every projected month
    pub burn_rate: f64,
    /// Projected need per month, starting the month after "today"
    pub months: BTreeMap<MonthKey, f64>,
}

impl CashForecast {
    /// Project `burn_rate` over the `months_to_project` months following `today`
    ///
    /// A non-positive horizon yields an empty forecast.
    pub fn project(burn_rate: f64, months_to_project: i32, today: NaiveDate) -> Self {
        let mut months = BTreeMap::new();
        let mut month = MonthKey::from_date(today);

        for _ in 0..months_to_project.max(0) {
            month = month.next();
            months.insert(month, burn_rate);
        }

        Self { burn_rate, months }
    }

    /// Number of projected months
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Check if nothing was projected
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Total cash needed over the whole horizon
    pub fn total(&self) -> f64 {
        self.months.values().sum()
    }

    /// Format for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return "No months to forecast".to_string();
        }

        let mut output = format_title(&format!("Cash Needs Forecast ({} months)", self.len()));
        output.push_str(&format!("{:<12} {:>15}\n", "Month-Year", "Projected"));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');

        for (month, need) in &self.months {
            output.push_str(&format!(
                "{:<12} {:>15}\n",
                month.label(),
                format_amount(*need, symbol)
            ));
        }

        output.push_str(&format!(
            "\nTotal Projected Need: {}",
            format_amount(self.total(), symbol)
        ));
        output
    }
}

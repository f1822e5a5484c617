//! Material Cost Impact
//!
//! Measures how much of total expense cost is attributable to one category
//! (typically a building material such as cement). Income never enters this
//! analysis.

use serde::Serialize;
use tracing::debug;

use crate::display::report::{format_money, format_percentage};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Money, Transaction};

/// Share of expense cost attributable to one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialImpactReport {
    /// The category analysed, as supplied by the caller
    pub material_category: String,
    /// Sum of absolute expense amounts in the material category
    pub material_cost: Money,
    /// Sum of absolute amounts of every other expense
    pub other_costs: Money,
    /// Number of expenses in the material category
    pub material_transaction_count: usize,
    /// `material_cost / (material_cost + other_costs) * 100`, 0 with no expenses
    pub percentage: f64,
}

impl MaterialImpactReport {
    /// Partition expenses into the material category and everything else
    ///
    /// The category comparison ignores case. Expenses with no category count
    /// towards `other_costs`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when no material category is given.
    pub fn generate(
        transactions: &[Transaction],
        material_category: Option<&str>,
    ) -> CashflowResult<Self> {
        let material_category = material_category.ok_or_else(|| {
            CashflowError::InvalidArgument("a material category is required".into())
        })?;
        let target = material_category.to_lowercase();

        let mut material_cost = Money::zero();
        let mut other_costs = Money::zero();
        let mut material_transaction_count = 0;

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let is_material = txn
                .category()
                .is_some_and(|c| c.to_lowercase() == target);

            if is_material {
                material_cost += txn.amount.abs();
                material_transaction_count += 1;
            } else {
                other_costs += txn.amount.abs();
            }
        }

        let total_costs = material_cost + other_costs;
        let percentage = if total_costs.is_zero() {
            0.0
        } else {
            material_cost.cents() as f64 / total_costs.cents() as f64 * 100.0
        };

        debug!(
            category = material_category,
            material_transaction_count, percentage, "material impact computed"
        );

        Ok(Self {
            material_category: material_category.to_string(),
            material_cost,
            other_costs,
            material_transaction_count,
            percentage,
        })
    }

    /// Total expense cost the percentage is measured against
    pub fn total_costs(&self) -> Money {
        self.material_cost + self.other_costs
    }

    /// Format for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        format!(
            "Material: {}\nTotal Cost: {} ({} transactions)\nPercentage of Total Costs: {}",
            self.material_category,
            format_money(self.material_cost, symbol),
            self.material_transaction_count,
            format_percentage(self.percentage)
        )
    }
}

//! Category display formatting

use crate::models::Category;

use super::report::{format_money, truncate};

/// Format categories as a table ordered by code
pub fn format_category_list(categories: &[Category], symbol: &str) -> String {
    if categories.is_empty() {
        return "No categories yet.\n\nAdd one with 'cashflow category add <CODE> <NAME>'.".to_string();
    }

    let code_width = categories
        .iter()
        .map(|c| c.code.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<code_width$}  {:<24}  {:>14}\n",
        "Code",
        "Name",
        "Budget Limit",
        code_width = code_width,
    ));
    output.push_str(&format!(
        "{:-<code_width$}  {:-<24}  {:->14}\n",
        "",
        "",
        "",
        code_width = code_width,
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<code_width$}  {:<24}  {:>14}\n",
            category.code,
            truncate(&category.name, 24),
            format_money(category.budget_limit, symbol),
            code_width = code_width,
        ));
    }

    output
}

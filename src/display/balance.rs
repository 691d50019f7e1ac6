//! Balance display formatting

use crate::models::Balance;

/// Format a balance summary for display
pub fn format_balance(balance: &Balance) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:  {:>12}\n", balance.income.to_string()));
    output.push_str(&format!("Outcome: {:>12}\n", balance.outcome.to_string()));
    output.push_str(&format!("Total:   {:>12}\n", balance.total.to_string()));
    output
}

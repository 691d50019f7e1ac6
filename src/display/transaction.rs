//! Transaction display formatting

use std::collections::HashMap;

use crate::models::{Category, CategoryId, Transaction, TransactionKind};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, category_title: Option<&str>) -> String {
    let direction = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Outcome => "-",
    };

    format!(
        "{} {:20} {:10} {:>12}  {}",
        txn.id,
        truncate(&txn.title, 20),
        txn.kind,
        format!("{}{}", direction, txn.value),
        category_title.unwrap_or("(unknown)"),
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    categories: &[Category],
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let titles: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.title.as_str()))
        .collect();

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:20} {:10} {:>13}  {}\n",
        "Id", "Title", "Type", "Value", "Category"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for txn in transactions {
        let category_title = titles.get(&txn.category_id).copied();
        output.push_str(&format_transaction_row(txn, category_title));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

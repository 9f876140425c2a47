//! Expense display formatting
//!
//! Table and one-line views of the ledger, numbered with the 1-based
//! positions used by edit and delete.

use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use super::report::truncate;
use crate::models::{Expense, Ledger};

const DESCRIPTION_WIDTH: usize = 30;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Month")]
    month: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the whole ledger as a table followed by the total
pub fn format_expense_table(ledger: &Ledger, symbol: &str, date_format: &str) -> String {
    if ledger.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = ledger.numbered().map(|(index, expense)| ExpenseRow {
        index,
        date: expense.date.format(date_format).to_string(),
        month: expense.month(),
        category: expense.category.clone(),
        description: truncate(&expense.description, DESCRIPTION_WIDTH),
        amount: expense.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::last(), Alignment::right());

    format!(
        "{}\n\nTotal: {} ({} expense{})\n",
        table,
        ledger.total().format_with_symbol(symbol),
        ledger.len(),
        if ledger.len() == 1 { "" } else { "s" }
    )
}

/// Format a single numbered expense on one line
pub fn format_expense_row(index: usize, expense: &Expense, symbol: &str) -> String {
    let mut line = format!(
        "{}. {} | {} | {}",
        index,
        expense.date,
        expense.category,
        expense.amount.format_with_symbol(symbol)
    );
    if !expense.description.is_empty() {
        line.push_str(&format!(" | {}", expense.description));
    }
    line
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Date:        {}\n", expense.date));
    output.push_str(&format!("Month:       {}\n", expense.month()));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

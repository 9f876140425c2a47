//! Expense CLI commands
//!
//! One-shot versions of the add, view, edit and delete menu entries.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_row, format_expense_table};
use crate::error::TrackerResult;
use crate::services::{ExpenseService, NewExpenseInput};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount (e.g., "500" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (e.g., Food, Travel)
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List all expenses with their numbers
    #[command(alias = "ls")]
    List,

    /// Edit an expense; omitted fields keep their value
    Edit {
        /// Expense number as shown by `list`
        #[arg(allow_negative_numbers = true)]
        index: i64,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense number as shown by `list`
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let input = NewExpenseInput {
                amount,
                category,
                description,
                date,
            };
            let added = ExpenseService::new(storage).add(&input)?;
            println!("Expense added successfully!");
            print!("{}", format_expense_details(&added.value, symbol));
            added.saved?;
        }

        ExpenseCommands::List => {
            print!(
                "{}",
                format_expense_table(&storage.state().expenses, symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Edit {
            index,
            amount,
            category,
            description,
        } => {
            let edited = ExpenseService::new(storage).edit(
                index,
                amount.as_deref().unwrap_or_default(),
                category.as_deref().unwrap_or_default(),
                description.as_deref().unwrap_or_default(),
            )?;
            println!("Expense updated successfully!");
            print!("{}", format_expense_details(&edited.value, symbol));
            edited.saved?;
        }

        ExpenseCommands::Delete { index } => {
            let removed = ExpenseService::new(storage).delete(index)?;
            println!(
                "Deleted: {}",
                format_expense_row(index as usize, &removed.value, symbol)
            );
            removed.saved?;
        }
    }

    Ok(())
}

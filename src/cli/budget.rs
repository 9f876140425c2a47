//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the budget for a month (e.g., "June") or a category (e.g., "Food")
    Set {
        /// Month or category name
        key: String,
        /// Limit (e.g., "1500")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List all budgets in the order they were first set
    #[command(alias = "ls")]
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { key, amount } => {
            let set = BudgetService::new(storage).set(&key, &amount)?;
            println!(
                "Budget set for {}: {}",
                set.value.key,
                set.value.limit.format_with_symbol(symbol)
            );
            set.saved?;
        }

        BudgetCommands::List => {
            let budgets = &storage.state().budgets;
            if budgets.is_empty() {
                println!("No budgets set.");
                return Ok(());
            }

            let width = budgets.iter().map(|b| b.key.chars().count()).max().unwrap_or(0);
            for entry in budgets.iter() {
                println!(
                    "{:width$}  {}",
                    entry.key,
                    entry.limit.format_with_symbol(symbol),
                    width = width
                );
            }
        }
    }

    Ok(())
}

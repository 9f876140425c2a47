//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::reports::{BudgetStatusReport, MonthlyReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending for one month with a category breakdown
    Month {
        /// Month name (e.g., "June" or "jun")
        month: String,
    },

    /// Every budget compared with all-time spending in its category
    Budgets,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Month { month } => {
            let report = MonthlyReport::generate(storage.state(), &month)?;
            print!("{}", report.format_terminal(symbol));
        }
        ReportCommands::Budgets => {
            let report = BudgetStatusReport::generate(storage.state());
            println!("===== Budget Status =====");
            print!("{}", report.format_terminal(symbol));
        }
    }

    Ok(())
}

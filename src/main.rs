use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::audit::AuditLogger;
use expense_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_history_command,
    handle_report_command,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::shell::Shell;
use expense_tracker::storage::{LoadStatus, Storage};

/// Environment variable holding the log filter (e.g. "debug")
const LOG_ENV_VAR: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses, set monthly or per-category budgets and see \
                  where your money went. Run without a command for the \
                  interactive menu."
)]
struct Cli {
    /// Data file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    #[command(alias = "menu")]
    Shell,

    #[command(flatten)]
    Expense(expense_tracker::cli::ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(expense_tracker::cli::BudgetCommands),

    /// Reports
    #[command(subcommand)]
    Report(expense_tracker::cli::ReportCommands),

    /// Export expenses to CSV
    Export {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = settings.resolve_data_file(&paths, cli.file);

    if let Some(Commands::Config { init }) = cli.command {
        if init {
            settings.save(&paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
            println!();
        }
        print_config(&paths, &settings, &data_file);
        return Ok(());
    }

    // Load storage
    let (storage, status) = Storage::open(data_file);
    let mut storage = if settings.audit_enabled {
        storage.with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        storage
    };

    let interactive = matches!(cli.command, None | Some(Commands::Shell));
    if interactive {
        println!("{}", status.message());
    } else if let LoadStatus::Recovered(_) = status {
        eprintln!("{}", status.message());
    }

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            Shell::new(&mut storage, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export { output }) => {
            handle_export_command(&storage, output)?;
        }
        Some(Commands::History { count }) => {
            handle_history_command(&storage, count)?;
        }
        Some(Commands::Config { .. }) => {}
    }

    Ok(())
}

fn print_config(paths: &ExpensePaths, settings: &Settings, data_file: &std::path::Path) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Data file:      {}", data_file.display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  Audit enabled:   {}", settings.audit_enabled);
}

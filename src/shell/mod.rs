//! Interactive menu shell
//!
//! Reads one menu choice per iteration, runs it against the storage and goes
//! back to the menu. Every error other than a broken terminal is printed as
//! `Error: <message>` and the loop continues. Choosing Exit, or reaching the
//! end of input, saves one last time and stops.

mod menu;

pub use menu::MenuChoice;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Settings;
use crate::display::{format_expense_row, format_expense_table, format_header, separator};
use crate::error::{TrackerError, TrackerResult};
use crate::reports::{BudgetStatusReport, MonthlyReport};
use crate::services::expense::parse_index;
use crate::services::{BudgetService, ExpenseService, NewExpenseInput};
use crate::storage::Storage;

const MENU_WIDTH: usize = 32;

/// The interactive expense tracker
pub struct Shell<'a, R, W> {
    storage: &'a mut Storage,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
        }
    }

    /// Run the menu loop until Exit or end of input
    ///
    /// Only failures to read from or write to the terminal are returned.
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            self.print_menu()?;

            let line = match self.read_line("Enter your choice: ") {
                Ok(Some(line)) => line,
                Ok(None) => {
                    writeln!(self.output)?;
                    return self.exit();
                }
                Err(err @ TrackerError::Io(_)) => return Err(err),
                Err(err) => {
                    self.print_error(&err)?;
                    continue;
                }
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(err) => {
                    self.print_error(&err)?;
                    continue;
                }
            };

            debug!(?choice, "menu choice");
            if choice == MenuChoice::Exit {
                return self.exit();
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(err @ TrackerError::Io(_)) => return Err(err),
                Err(err) => self.print_error(&err)?,
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> TrackerResult<()> {
        match choice {
            MenuChoice::AddExpense => self.add_expense(),
            MenuChoice::ViewExpenses => self.view_expenses(),
            MenuChoice::EditExpense => self.edit_expense(),
            MenuChoice::DeleteExpense => self.delete_expense(),
            MenuChoice::SetBudget => self.set_budget(),
            MenuChoice::MonthlyReport => self.monthly_report(),
            MenuChoice::BudgetStatus => self.budget_status(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", format_header("Expense Tracker Menu", MENU_WIDTH))?;
        writeln!(self.output, "{}", separator(MENU_WIDTH))?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    fn add_expense(&mut self) -> TrackerResult<()> {
        let input = NewExpenseInput {
            amount: self.prompt("Enter amount: ")?,
            category: self.prompt("Enter category (Food, Travel, etc.): ")?,
            description: self.prompt("Enter description: ")?,
            date: Some(self.prompt("Enter date (YYYY-MM-DD, blank for today): ")?),
        };

        let added = ExpenseService::new(&mut *self.storage).add(&input)?;
        writeln!(self.output, "Expense added successfully!")?;
        self.print_save_outcome(&added.saved)
    }

    fn view_expenses(&mut self) -> TrackerResult<()> {
        let table = format_expense_table(
            &self.storage.state().expenses,
            &self.settings.currency_symbol,
            &self.settings.date_format,
        );
        writeln!(self.output)?;
        write!(self.output, "{}", table)?;
        Ok(())
    }

    fn edit_expense(&mut self) -> TrackerResult<()> {
        if !self.list_numbered()? {
            return Ok(());
        }

        let index = parse_index(&self.prompt("Enter the expense number to edit: ")?)?;
        let current = self.storage.state().expenses.get(index)?.clone();

        writeln!(self.output, "\nEditing Expense:")?;
        writeln!(self.output, "Leave blank to keep old value.")?;
        writeln!(
            self.output,
            "Current Amount: {}",
            current.amount.format_with_symbol(&self.settings.currency_symbol)
        )?;
        writeln!(self.output, "Current Category: {}", current.category)?;
        writeln!(self.output, "Current Description: {}\n", current.description)?;

        let amount = self.prompt("New Amount: ")?;
        let category = self.prompt("New Category: ")?;
        let description = self.prompt("New Description: ")?;

        let edited =
            ExpenseService::new(&mut *self.storage).edit(index, &amount, &category, &description)?;
        writeln!(self.output, "Expense updated successfully!")?;
        self.print_save_outcome(&edited.saved)
    }

    fn delete_expense(&mut self) -> TrackerResult<()> {
        if !self.list_numbered()? {
            return Ok(());
        }

        let index = parse_index(&self.prompt("Enter the expense number to delete: ")?)?;
        let removed = ExpenseService::new(&mut *self.storage).delete(index)?;

        writeln!(
            self.output,
            "Deleted: {}",
            format_expense_row(index as usize, &removed.value, &self.settings.currency_symbol)
        )?;
        self.print_save_outcome(&removed.saved)
    }

    fn set_budget(&mut self) -> TrackerResult<()> {
        let key = self.prompt("Enter month or category name: ")?;
        let amount = self.prompt("Enter budget amount: ")?;

        let set = BudgetService::new(&mut *self.storage).set(&key, &amount)?;
        writeln!(
            self.output,
            "Budget set for {}: {}",
            set.value.key,
            set.value.limit.format_with_symbol(&self.settings.currency_symbol)
        )?;
        self.print_save_outcome(&set.saved)
    }

    fn monthly_report(&mut self) -> TrackerResult<()> {
        let month = self.prompt("Enter month name to view report: ")?;
        let report = MonthlyReport::generate(self.storage.state(), &month)?;

        writeln!(self.output)?;
        write!(
            self.output,
            "{}",
            report.format_terminal(&self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn budget_status(&mut self) -> TrackerResult<()> {
        let report = BudgetStatusReport::generate(self.storage.state());

        writeln!(self.output, "\n===== Budget Status =====")?;
        write!(
            self.output,
            "{}",
            report.format_terminal(&self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn exit(&mut self) -> TrackerResult<()> {
        writeln!(self.output, "Exiting...")?;
        match self.storage.save() {
            Ok(()) => writeln!(self.output, "Data saved. Goodbye!")?,
            Err(err) => writeln!(self.output, "Error saving file: {}", err)?,
        }
        self.output.flush()?;
        Ok(())
    }

    /// Print the numbered expenses; false when there is nothing to choose
    fn list_numbered(&mut self) -> TrackerResult<bool> {
        let ledger = &self.storage.state().expenses;
        if ledger.is_empty() {
            writeln!(self.output, "No expenses found.")?;
            return Ok(false);
        }

        writeln!(self.output, "\n---- All Expenses ----")?;
        for (index, expense) in ledger.numbered() {
            writeln!(
                self.output,
                "{}",
                format_expense_row(index, expense, &self.settings.currency_symbol)
            )?;
        }
        Ok(true)
    }

    fn print_save_outcome(&mut self, saved: &TrackerResult<()>) -> TrackerResult<()> {
        match saved {
            Ok(()) => writeln!(self.output, "Auto-saved successfully.")?,
            Err(err) => writeln!(self.output, "Error saving file: {}", err)?,
        }
        Ok(())
    }

    fn print_error(&mut self, err: &TrackerError) -> TrackerResult<()> {
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    /// Prompt for an answer that must be given
    fn prompt(&mut self, prompt: &str) -> TrackerResult<String> {
        self.read_line(prompt)?
            .ok_or_else(|| TrackerError::Input("no answer given before end of input".into()))
    }

    /// Prompt and read one line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8(bytes)
            .map_err(|_| TrackerError::Input("input is not valid UTF-8 text".into()))?;
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::load_state;
    use rust_decimal_macros::dec;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct Session {
        temp_dir: TempDir,
        storage: Storage,
        settings: Settings,
    }

    impl Session {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let (storage, _) = Storage::open(temp_dir.path().join("expenses.json"));
            Self {
                temp_dir,
                storage,
                settings: Settings::default(),
            }
        }

        fn run(&mut self, script: &str) -> String {
            self.run_bytes(script.as_bytes())
        }

        fn run_bytes(&mut self, script: &[u8]) -> String {
            let mut output = Vec::new();
            Shell::new(&mut self.storage, &self.settings, Cursor::new(script), &mut output)
                .run()
                .unwrap();
            String::from_utf8(output).unwrap()
        }

        fn data_file(&self) -> std::path::PathBuf {
            self.temp_dir.path().join("expenses.json")
        }
    }

    #[test]
    fn test_add_view_and_exit() {
        let mut session = Session::new();

        let output = session.run("1\n500\nfood\nLunch\n2024-06-01\n2\n8\n");

        assert!(output.contains("Expense added successfully!"));
        assert!(output.contains("Auto-saved successfully."));
        assert!(output.contains("Lunch"));
        assert!(output.contains("Total: Rs.500 (1 expense)"));
        assert!(output.contains("Data saved. Goodbye!"));

        let (on_disk, _) = load_state(&session.data_file());
        assert_eq!(on_disk.expenses.get(1).unwrap().category, "Food");
    }

    #[test]
    fn test_invalid_choice_keeps_looping() {
        let mut session = Session::new();

        let output = session.run("9\nabc\n8\n");

        assert_eq!(output.matches("Error: Invalid input").count(), 2);
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_end_of_input_exits_and_saves() {
        let mut session = Session::new();

        let output = session.run("5\nJune\n1500\n");

        assert!(output.contains("Budget set for June: Rs.1500"));
        assert!(output.contains("Data saved. Goodbye!"));
        let (on_disk, _) = load_state(&session.data_file());
        assert_eq!(on_disk.budgets.get("June"), Some(Money::new(dec!(1500))));
    }

    #[test]
    fn test_bad_amount_is_reported() {
        let mut session = Session::new();

        let output = session.run("1\nlots\nFood\n\n\n2\n");

        assert!(output.contains("Error: Invalid input: 'lots' is not a valid amount"));
        assert!(output.contains("No expenses found."));
        assert!(session.storage.state().expenses.is_empty());
    }

    #[test]
    fn test_edit_keeps_blank_fields() {
        let mut session = Session::new();

        let output = session.run("1\n500\nFood\nLunch\n2024-06-01\n3\n1\n\nGroceries\n\n8\n");

        assert!(output.contains("Current Amount: Rs.500"));
        assert!(output.contains("Expense updated successfully!"));
        let expense = session.storage.state().expenses.get(1).unwrap();
        assert_eq!(expense.amount, Money::new(dec!(500)));
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.description, "Lunch");
    }

    #[test]
    fn test_delete_out_of_range_changes_nothing() {
        let mut session = Session::new();

        let output = session.run("1\n500\nFood\n\n2024-06-01\n4\n5\n4\n1\n8\n");

        assert!(output.contains("Error: Invalid expense number 5"));
        assert!(output.contains("Deleted: 1. 2024-06-01 | Food | Rs.500"));
        assert!(session.storage.state().expenses.is_empty());
    }

    #[test]
    fn test_edit_and_delete_with_no_expenses() {
        let mut session = Session::new();

        let output = session.run("3\n4\n8\n");

        assert_eq!(output.matches("No expenses found.").count(), 2);
    }

    #[test]
    fn test_reports() {
        let mut session = Session::new();
        let script = concat!(
            "1\n500\nFood\n\n2024-06-01\n",
            "1\n300\nTravel\n\n2024-06-15\n",
            "5\nfood\n400\n",
            "6\njune\n",
            "7\n",
            "6\nSmarch\n",
            "8\n",
        );

        let output = session.run(script);

        assert!(output.contains("Total Spent: Rs.800"));
        assert!(output.contains("Food: Rs.500"));
        assert!(output.contains("Travel: Rs.300"));
        assert!(output.contains("No budget set for this month."));
        assert!(output.contains("-Rs.100"));
        assert!(output.contains("Error: Invalid input"));
    }

    #[test]
    fn test_invalid_utf8_is_reported_and_loop_continues() {
        let mut session = Session::new();

        let output = session.run_bytes(b"\xff\xfe\n1\n500\n\xffood\n\n2024-06-01\n8\n");

        assert_eq!(
            output
                .matches("Error: Invalid input: input is not valid UTF-8 text")
                .count(),
            2
        );
        assert!(output.contains("Data saved. Goodbye!"));
        assert!(session.storage.state().expenses.is_empty());
    }

    #[test]
    fn test_abbreviated_month_budget_shows_in_report() {
        let mut session = Session::new();

        let output = session.run("1\n500\nFood\n\n2024-06-01\n5\njun\n1000\n6\nJune\n8\n");

        assert!(output.contains("Budget set for June: Rs.1000"));
        assert!(output.contains("Budget: Rs.1000"));
        assert!(!output.contains("No budget set for this month."));
    }

    #[test]
    fn test_end_of_input_mid_prompt() {
        let mut session = Session::new();

        let output = session.run("1\n500\n");

        assert!(output.contains("Error: Invalid input: no answer given before end of input"));
        assert!(output.contains("Data saved. Goodbye!"));
        assert!(session.storage.state().expenses.is_empty());
    }
}

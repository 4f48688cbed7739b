//! Interactive menu shell
//!
//! A blocking read-eval loop: show the menu, read a choice, run the matching
//! ledger operation, repeat until the user exits or input ends.

pub mod prompt;

pub use prompt::Prompter;

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_expense_list, format_summary};
use crate::error::ExpenseResult;
use crate::export::export_expenses_csv_file;
use crate::services::{ExpenseFilter, ExpenseService, CLEAR_CONFIRMATION};
use crate::storage::Storage;

/// The menu shown before every choice
pub const MENU: &str = "
Choose:
1. Add expense
2. List all expenses
3. List by category
4. Delete expense (by id)
5. Summary (totals)
6. Export CSV
7. Clear all data (danger!)
8. Exit
";

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ListAll,
    ListByCategory,
    Delete,
    Summary,
    Export,
    ClearAll,
    Exit,
}

impl MenuChoice {
    /// Parse the text typed at the choice prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::ListAll),
            "3" => Some(Self::ListByCategory),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Summary),
            "6" => Some(Self::Export),
            "7" => Some(Self::ClearAll),
            "8" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive shell
pub struct Shell<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    service: ExpenseService<'a>,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell reading from `input` and writing to `output`
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            service: ExpenseService::new(storage),
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.prompter.say(MENU)?;

            let Some(choice) = self.prompter.prompt("Enter choice: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&choice) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.prompter.say("Invalid choice, try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ExpenseResult<Flow> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::ListAll => self.list(ExpenseFilter::new()),
            MenuChoice::ListByCategory => {
                let Some(category) = self.prompter.prompt_nonempty("Category to filter: ")? else {
                    return Ok(Flow::Exit);
                };
                self.list(ExpenseFilter::new().category(category))
            }
            MenuChoice::Delete => self.delete(),
            MenuChoice::Summary => {
                let summary = self.service.summary()?;
                self.prompter.write_block(&format_summary(&summary))?;
                Ok(Flow::Continue)
            }
            MenuChoice::Export => self.export(),
            MenuChoice::ClearAll => self.clear_all(),
            MenuChoice::Exit => {
                self.prompter.say("Bye.")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add(&mut self) -> ExpenseResult<Flow> {
        let Some(amount) = self.prompter.prompt_nonempty("Amount: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.prompter.prompt_nonempty("Category: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(note) = self.prompter.prompt("Note (optional): ")? else {
            return Ok(Flow::Exit);
        };

        match self.service.add(&amount, &category, &note) {
            Ok(_) => self.prompter.say("Expense added.")?,
            Err(e) if e.is_invalid_amount() => {
                self.prompter.say("Invalid amount. Use numbers like 120.50")?
            }
            Err(e) if e.is_validation() => self.prompter.say(&e.to_string())?,
            Err(e) => return Err(e),
        }

        Ok(Flow::Continue)
    }

    fn list(&mut self, filter: ExpenseFilter) -> ExpenseResult<Flow> {
        let expenses = self.service.list(&filter)?;
        self.prompter.write_block(&format_expense_list(&expenses))?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> ExpenseResult<Flow> {
        let Some(id) = self.prompter.prompt_nonempty("Enter ID to delete: ")? else {
            return Ok(Flow::Exit);
        };

        if self.service.delete(&id)? > 0 {
            self.prompter.say("Deleted.")?;
        } else {
            self.prompter.say("Not found.")?;
        }

        Ok(Flow::Continue)
    }

    fn export(&mut self) -> ExpenseResult<Flow> {
        let default_file = self.settings.default_export_file.clone();
        let Some(answer) = self
            .prompter
            .prompt(&format!("Filename (default {}): ", default_file))?
        else {
            return Ok(Flow::Exit);
        };

        let filename = match answer.trim() {
            "" => default_file,
            name => name.to_string(),
        };

        let expenses = self.service.list(&ExpenseFilter::new())?;
        let path = self.storage.paths().export_file(&filename);
        let count = export_expenses_csv_file(&expenses, &path)?;

        self.prompter
            .say(&format!("Exported {} rows to {}", count, filename))?;
        Ok(Flow::Continue)
    }

    fn clear_all(&mut self) -> ExpenseResult<Flow> {
        let Some(confirmation) = self.prompter.prompt(&format!(
            "Type {} to permanently delete all data: ",
            CLEAR_CONFIRMATION
        ))?
        else {
            return Ok(Flow::Exit);
        };

        match self.service.clear_all(&confirmation)? {
            Some(_) => self.prompter.say("All data cleared.")?,
            None => self.prompter.say("Cancelled.")?,
        }

        Ok(Flow::Continue)
    }
}

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::shell::Shell;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Interactive terminal expense tracker",
    long_about = "Records expenses with a category, note and timestamp in expenses.json \
                  and lets you list, filter, delete, summarize and export them to CSV \
                  from a numbered menu."
)]
struct Cli {
    /// Directory holding expenses.json (defaults to the current directory)
    #[arg(long, env = "EXPENSES_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths)?.with_audit(settings.audit_enabled);
    storage.load_all()?;

    let stdin = io::stdin();
    let mut shell = Shell::new(&storage, &settings, stdin.lock(), io::stdout());
    shell.run()?;

    Ok(())
}

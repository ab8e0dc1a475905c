//! Terminal entry point for the bookstore inventory manager.
//!
//! # Responsibility
//! - Resolve configuration, start file logging and open the catalog store.
//! - Hand stdin/stdout to the interactive menu shell.

mod config;
mod display;
mod prompt;
mod shell;

use bookstore_core::{init_logging, open_store, BookService, SqliteBookRepository};
use config::AppConfig;
use log::info;
use prompt::Prompter;
use shell::{report_fatal, CliError, CliResult, Shell};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_fatal(&err);
            eprintln!("bookstore: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let config = AppConfig::from_current_dir()?;
    // Logging failure is reported but not fatal.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("bookstore: logging disabled: {err}");
    }
    info!(
        "event=shell_start module=cli status=ok core_version={} db_path={}",
        bookstore_core::core_version(),
        config.db_path.display()
    );

    let conn = open_store(&config.db_path).map_err(|err| CliError::Repo(err.into()))?;
    let service = BookService::new(SqliteBookRepository::new(&conn));
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());

    Shell::new(service, prompter).run()
}

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pocket_ledger::cli::{
    handle_add, handle_config, handle_export, handle_history, handle_remove, handle_report,
    handle_status, run_shell, ExportFormat, Session,
};
use pocket_ledger::config::{LedgerPaths, Settings};
use pocket_ledger::logging::init_tracing;
use pocket_ledger::TransactionType;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal finance ledger",
    long_about = "Records income and expenses in a JSON file, shows running totals, \
                  the transaction history and a per-category expense report."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(short, long, global = true, env = "POCKET_LEDGER_FILE")]
    file: Option<PathBuf>,

    /// Print debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommand),

    /// Show current configuration and paths
    Config {
        /// Write the settings file if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

/// Commands that operate on the loaded ledger
#[derive(Subcommand)]
enum LedgerCommand {
    /// Record an income
    Income {
        /// Amount, must be positive
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category label
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Record an expense
    Expense {
        /// Amount, must be positive
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Category label
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Remove the transaction at a history position
    #[command(alias = "delete")]
    Remove {
        /// Position shown in the `#` column of `history`
        index: usize,
    },

    /// Show total income, total expense and balance
    #[command(alias = "balance")]
    Status,

    /// Show the transaction history
    History {
        /// Show only the most recent N transactions (0 = all)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show expense totals per category
    #[command(alias = "categories")]
    Report,

    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Interactive menu
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_file = settings.resolve_ledger_file(&paths, cli.file);

    let Some(command) = cli.command else {
        println!("pocket-ledger - personal finance ledger");
        println!();
        println!("Run 'ledger --help' for usage information.");
        println!("Run 'ledger shell' for the interactive menu.");
        return Ok(());
    };

    match command {
        Commands::Config { init } => {
            let stdout = io::stdout();
            handle_config(&paths, &settings, &ledger_file, init, &mut stdout.lock())?;
        }
        Commands::Ledger(command) => {
            let mut session = Session::open(ledger_file, settings)
                .context("Failed to load the ledger file")?;
            run_ledger_command(command, &mut session)?;
        }
    }

    Ok(())
}

/// Run one command; mutating commands save the ledger afterwards
fn run_ledger_command(command: LedgerCommand, session: &mut Session) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        LedgerCommand::Income {
            amount,
            category,
            date,
        } => {
            handle_add(
                session,
                &mut out,
                TransactionType::Income,
                amount,
                category,
                date.as_deref(),
            )?;
            session.save()?;
        }
        LedgerCommand::Expense {
            amount,
            category,
            date,
        } => {
            handle_add(
                session,
                &mut out,
                TransactionType::Expense,
                amount,
                category,
                date.as_deref(),
            )?;
            session.save()?;
        }
        LedgerCommand::Remove { index } => {
            handle_remove(session, &mut out, index)?;
            session.save()?;
        }
        LedgerCommand::Status => handle_status(session, &mut out)?,
        LedgerCommand::History { limit } => handle_history(session, &mut out, limit)?,
        LedgerCommand::Report => handle_report(session, &mut out)?,
        LedgerCommand::Export {
            output,
            format,
            pretty,
        } => handle_export(session, &mut out, &output, format, pretty)?,
        LedgerCommand::Shell => {
            let stdin = io::stdin();
            run_shell(session, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use kasku::cli::{
    friendly, handle_add, handle_balance, handle_categories, handle_delete, handle_month,
    handle_today, handle_undo, session::run_session,
};
use kasku::config::{KaskuPaths, Settings};
use kasku::ledger::UndoBuffer;
use kasku::storage::JsonLedger;

#[derive(Parser)]
#[command(name = "kasku")]
#[command(about = "Free-text expense ledger", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a transaction from a free-text message
    #[command(alias = "catat")]
    Add {
        /// The message, e.g. "kopi 5k"
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Show today's expenses
    #[command(alias = "hariini")]
    Today,

    /// Show this month's summary
    #[command(alias = "bulanini")]
    Month,

    /// Show the running balance
    #[command(alias = "saldo")]
    Balance,

    /// Show this month's category breakdown
    #[command(alias = "kategori")]
    Categories,

    /// Delete the last transaction
    #[command(alias = "hapus")]
    Delete,

    /// Restore the last deleted transaction
    Undo,

    /// Create the data directories and default settings
    Init,

    /// Show paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = KaskuPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut store = JsonLedger::new(paths.ledger_file());

    let result = match cli.command {
        Some(Commands::Add { text }) => {
            let text = text.join(" ");
            handle_add(&mut store, &text, &settings)
        }
        Some(Commands::Today) => handle_today(&store),
        Some(Commands::Month) => handle_month(&store),
        Some(Commands::Balance) => handle_balance(&store),
        Some(Commands::Categories) => handle_categories(&store, &settings),
        Some(Commands::Delete) => {
            // The buffer dies with this process; only a session can undo.
            let mut undo = UndoBuffer::new();
            let result = handle_delete(&mut store, &mut undo);
            if result.is_ok() {
                println!("Note: undo works within an interactive session only.");
            }
            result
        }
        Some(Commands::Undo) => {
            let mut undo = UndoBuffer::new();
            handle_undo(&mut store, &mut undo)
        }
        Some(Commands::Init) => init(&paths, &settings),
        Some(Commands::Config) => show_config(&paths, &settings),
        None => run_session(&mut store, &settings),
    };

    if let Err(err) = result {
        if err.is_recoverable() {
            println!("{}", friendly(&err));
        } else {
            return Err(err.into());
        }
    }

    Ok(())
}

fn init(paths: &KaskuPaths, settings: &Settings) -> kasku::KaskuResult<()> {
    paths.ensure_directories()?;
    settings.save(paths)?;
    println!("Initialized data directory at {}", paths.base_dir().display());
    Ok(())
}

fn show_config(paths: &KaskuPaths, settings: &Settings) -> kasku::KaskuResult<()> {
    println!("Data directory:  {}", paths.base_dir().display());
    println!("Ledger file:     {}", paths.ledger_file().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Income keywords: {}", settings.income_keywords.join(", "));
    println!("Category limit:  {}", settings.category_limit);
    Ok(())
}

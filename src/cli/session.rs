//! Interactive session
//!
//! A read-eval loop on stdin standing in for a chat transport: plain lines
//! are recorded as transactions, slash commands run reports and the
//! delete/undo pair. The undo buffer lives for exactly one session, which
//! is why delete and undo only compose here.

use std::io::{self, BufRead, Write};

use crate::cli::{
    friendly, handle_add, handle_balance, handle_categories, handle_delete, handle_month,
    handle_today, handle_undo,
};
use crate::config::Settings;
use crate::error::KaskuResult;
use crate::ledger::{LedgerStore, UndoBuffer};

const HELP: &str = "\
Type a transaction to record it, e.g. \"kopi 5k\" or \"gaji 5jt\".
Commands:
  /hariini   (/today)       expenses for today
  /bulanini  (/month)       summary for this month
  /saldo     (/balance)     running balance
  /kategori  (/categories)  category breakdown for this month
  /hapus     (/delete)      delete the last transaction
  /undo                     restore the last deleted transaction
  /help                     show this help
  /quit                     exit
";

/// Run the interactive loop until `/quit` or EOF.
///
/// Per-command errors are printed and the loop continues; only I/O failure
/// on stdin itself ends the session with an error.
pub fn run_session<S: LedgerStore>(store: &mut S, settings: &Settings) -> KaskuResult<()> {
    let mut undo = UndoBuffer::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("kasku - type /help for commands, /quit to exit");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match line {
            "/quit" | "/exit" => break,
            "/help" => print!("{}", HELP),
            "/hariini" | "/today" => report(handle_today(store)),
            "/bulanini" | "/month" => report(handle_month(store)),
            "/saldo" | "/balance" => report(handle_balance(store)),
            "/kategori" | "/categories" => report(handle_categories(store, settings)),
            "/hapus" | "/delete" => report(handle_delete(store, &mut undo)),
            "/undo" => report(handle_undo(store, &mut undo)),
            other if other.starts_with('/') => {
                println!("Unknown command {}. Type /help for the list.", other);
            }
            text => report(handle_add(store, text, settings)),
        }
    }

    Ok(())
}

/// Print a friendly message for a failed command; the session keeps going.
fn report(result: KaskuResult<()>) {
    if let Err(err) = result {
        println!("{}", friendly(&err));
    }
}

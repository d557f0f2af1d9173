use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::{
    config::STORE_ENV,
    csv_utils::write_csv,
    dto::{Account, AccountRow},
    error::{Error, Result},
    stores::{AccountsStore, KeyValueStore},
};

/// Keeps a list of accounts in a local JSON store.
#[derive(Debug, Parser)]
#[command(name = "account-keeper", version)]
pub struct Cli {
    /// Storage file [default: accounts.json]
    #[arg(long, global = true, env = STORE_ENV, value_name = "PATH", value_parser = non_empty_path)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Print the stored accounts
    List,
    /// Append an account
    Add {
        label: String,
        login: String,
        #[arg(value_name = "TYPE")]
        account_type: String,
        password: Option<String>,
    },
    /// Remove the account at INDEX
    Remove { index: usize },
}

fn non_empty_path(value: &str) -> std::result::Result<PathBuf, String> {
    if value.is_empty() {
        Err("path must not be empty".to_string())
    } else {
        Ok(PathBuf::from(value))
    }
}

/// Loads the store, applies `command` and writes the resulting account list
/// to `writer` as CSV.
///
/// # Errors
/// Returns an error if:
/// * The persisted list cannot be read or parsed
/// * Persisting after a mutation fails
/// * Writing to the output fails
pub fn run<S, W>(store: &mut AccountsStore<S>, command: Command, writer: W) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    store.load()?;

    match command {
        Command::List => {}
        Command::Add {
            label,
            login,
            account_type,
            password,
        } => store.add(Account::new(label, login, password, account_type))?,
        Command::Remove { index } => {
            if store.remove(index)?.is_none() {
                return Err(Error::IndexOutOfRange {
                    index,
                    len: store.len(),
                });
            }
        }
    }

    let rows = store
        .iter()
        .enumerate()
        .map(|(index, account)| AccountRow::new(index, account));
    write_csv(writer, rows)?;
    Ok(())
}

use clap::Parser;
use std::io;
use std::process;

use account_keeper::runner::Cli;
use account_keeper::{run, AccountsStore, Config, JsonFileStorage, Result};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run_app(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.store);
    log::debug!("using store {}", config.store_path.display());

    let mut store = AccountsStore::new(JsonFileStorage::open(&config.store_path)?);
    run(&mut store, cli.command, io::stdout().lock())
}

pub mod config;
mod csv_utils;
mod dto;
pub mod error;
pub mod runner;
pub mod stores;

pub use config::Config;
pub use dto::{Account, AccountRow};
pub use error::{Error, Result};
pub use runner::{run, Cli, Command};
pub use stores::{AccountsStore, JsonFileStorage, KeyValueStore, MemoryStorage};

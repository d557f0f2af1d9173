//! Storage layer for the account keeper. Provides:
//! - The in-memory account list with write-through persistence ([`AccountsStore`])
//! - The string-keyed text storage it persists into ([`KeyValueStore`]), backed
//!   either by memory ([`MemoryStorage`]) or by a JSON file ([`JsonFileStorage`])
//!
//! Every access is synchronous; a store owns or exclusively borrows its
//! storage handle.

mod accounts;
mod file;
mod memory;

pub use accounts::{AccountsStore, ACCOUNTS_KEY};
pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// String-keyed persistent text storage.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing was stored.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

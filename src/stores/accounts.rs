use log::{debug, warn};

use super::KeyValueStore;
use crate::dto::Account;
use crate::error::Result;

/// Storage key the serialized account list lives under.
pub const ACCOUNTS_KEY: &str = "accounts";

/// Ordered list of accounts, written through to `S` after every mutation.
pub struct AccountsStore<S> {
    accounts: Vec<Account>,
    storage: S,
}

impl<S: KeyValueStore> AccountsStore<S> {
    /// Creates an empty store. Storage is not read until [`load`](Self::load).
    pub fn new(storage: S) -> Self {
        Self {
            accounts: Vec::new(),
            storage,
        }
    }

    /// Appends an account and persists the whole list.
    /// If the write fails the account stays in memory.
    pub fn add(&mut self, account: Account) -> Result<()> {
        self.accounts.push(account);
        self.save()
    }

    /// Removes the account at `index` and persists the whole list.
    /// An out-of-range index leaves the list unchanged but still persists it.
    pub fn remove(&mut self, index: usize) -> Result<Option<Account>> {
        let removed = if index < self.accounts.len() {
            Some(self.accounts.remove(index))
        } else {
            warn!(
                "remove: index {} out of range for {} accounts",
                index,
                self.accounts.len()
            );
            None
        };
        self.save()?;
        Ok(removed)
    }

    /// Replaces the in-memory list with the persisted one. With nothing
    /// persisted (no value, or an empty one) the list is left as it is. A
    /// malformed value is returned as an error and the list is left as it is.
    pub fn load(&mut self) -> Result<()> {
        match self.storage.get_item(ACCOUNTS_KEY)? {
            Some(text) if !text.is_empty() => {
                self.accounts = serde_json::from_str(&text)?;
                debug!("loaded {} accounts", self.accounts.len());
            }
            _ => debug!("no persisted accounts"),
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let text = serde_json::to_string(&self.accounts)?;
        self.storage.set_item(ACCOUNTS_KEY, &text)?;
        debug!("persisted {} accounts", self.accounts.len());
        Ok(())
    }
}

impl<S> AccountsStore<S> {
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

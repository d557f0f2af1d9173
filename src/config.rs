//! Resolution of where the account list is stored.

use std::path::PathBuf;

/// Environment variable naming the storage file. Read by the command line
/// parser as the fallback for `--store`.
pub const STORE_ENV: &str = "ACCOUNT_KEEPER_STORE";
/// Storage file used when neither the flag nor the environment names one.
pub const DEFAULT_STORE_FILE: &str = "accounts.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    /// Uses the path taken from `--store` or `ACCOUNT_KEEPER_STORE`, falling
    /// back to `accounts.json` in the working directory.
    pub fn resolve(store: Option<PathBuf>) -> Self {
        let store_path = store
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));
        Self { store_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_path_is_used() {
        let config = Config::resolve(Some(PathBuf::from("flag.json")));
        assert_eq!(config.store_path, PathBuf::from("flag.json"));
    }

    #[test]
    fn test_default_file() {
        let config = Config::resolve(None);
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_FILE));
    }

    #[test]
    fn test_empty_path_falls_back_to_default() {
        let config = Config::resolve(Some(PathBuf::new()));
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_FILE));
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::{Chain, Language};
use dotenvy::var;
use std::{str::FromStr, sync::OnceLock};
use tracing::warn;

// NOTE - if these values change make sure the [Config] documentation
// matches...
const DEFAULT_DB_URL: &str = "sqlite::memory:";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 1;

static CONFIG: OnceLock<Config> = OnceLock::new();
/// This library's configuration Singleton.
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// A structure that provides the current configuration settings.
///
/// Values are read from the environment (and a `.env` file if one is found)
/// the first time [config()] is called:
///
/// * `LANGS_DB_URL`: URL of the SQLite store. Defaults to an in-memory one.
/// * `LANGS_DB_MAX_CONNECTIONS`: size of the store's connection pool.
///   Defaults to 1.
/// * `LANGS_FALLBACK`: comma separated language codes forming this project's
///   default fallback [Chain]. Defaults to `en`.
#[derive(Debug)]
pub struct Config {
    pub(crate) db_url: String,
    pub(crate) db_max_connections: u32,
    fallback: Chain,
}

impl Default for Config {
    fn default() -> Self {
        let db_url = var("LANGS_DB_URL").unwrap_or(DEFAULT_DB_URL.to_string());

        let db_max_connections = match var("LANGS_DB_MAX_CONNECTIONS") {
            Ok(x) => match x.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(
                        "Invalid LANGS_DB_MAX_CONNECTIONS ({}). Using {}",
                        x, DEFAULT_DB_MAX_CONNECTIONS
                    );
                    DEFAULT_DB_MAX_CONNECTIONS
                }
            },
            Err(_) => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let fallback = match var("LANGS_FALLBACK") {
            Ok(x) => Chain::from_str(&x).unwrap_or_else(|e| {
                warn!("Invalid LANGS_FALLBACK ({}). Using 'en'", e);
                Chain::new([Language::EN])
            }),
            Err(_) => Chain::new([Language::EN]),
        };

        Self {
            db_url,
            db_max_connections,
            fallback,
        }
    }
}

impl Config {
    /// Return this project's default fallback [Chain].
    pub fn fallback(&self) -> &Chain {
        &self.fallback
    }

    /// Return the URL of the SQLite store.
    pub fn db_url(&self) -> &str {
        &self.db_url
    }
}

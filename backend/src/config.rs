//! Server settings read from the environment.
//!
//! | variable               | default                |
//! |------------------------|------------------------|
//! | `COMPARE_HOST`         | `127.0.0.1`            |
//! | `COMPARE_PORT`         | `8080`                 |
//! | `COMPARE_CATALOG`      | `catalog/vendors.json` |
//! | `COMPARE_OPEN_BROWSER` | `true`                 |
//!
//! Values that fail to parse are logged and replaced by their default so a
//! typo never keeps the server from starting.

use log::warn;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CATALOG: &str = "catalog/vendors.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("COMPARE_HOST")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, "COMPARE_PORT", defaults.port),
            catalog_path: lookup("COMPARE_CATALOG")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            open_browser: parse_or(&lookup, "COMPARE_OPEN_BROWSER", defaults.open_browser),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::book::DEFAULT_BOOK_PATH;
use crate::error::{Error, Result};

pub const BOOK_PATH_VAR: &str = "ADDRESS_BOOK_PATH";
pub const BIND_VAR: &str = "ADDRESS_BOOK_BIND";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Runtime settings for the address book server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file the book is loaded from and saved to
    pub book_path: PathBuf,
    /// address the web server listens on
    pub bind: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

impl Config {
    /// load settings from environment variables
    ///
    /// ADDRESS_BOOK_PATH=`file`, ADDRESS_BOOK_BIND=`host:port`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let book_path = lookup(BOOK_PATH_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_PATH));
        let bind = lookup(BIND_VAR)
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
            .parse::<SocketAddr>()
            .map_err(|e: std::net::AddrParseError| Error::InvalidConfig {
                key: BIND_VAR,
                message: e.to_string(),
            })?;
        Ok(Self { book_path, bind })
    }
}

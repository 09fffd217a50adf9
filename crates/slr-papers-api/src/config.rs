//! Configuration for the papers API.

use std::time::Duration;

/// Default connection and pagination settings.
pub mod defaults {
    use std::time::Duration;

    /// Database host.
    pub const DB_HOST: &str = "localhost";

    /// Database port.
    pub const DB_PORT: u16 = 5432;

    /// Database user.
    pub const DB_USER: &str = "postgres";

    /// Database name.
    pub const DB_NAME: &str = "openalex_db";

    /// Table holding the curated papers.
    pub const DB_TABLE: &str = "ibd_rcts";

    /// Timeout for opening a store connection.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Default page size for list endpoints.
    pub const PAGE_LIMIT: u32 = 15;

    /// Largest page size a client may request.
    pub const MAX_PAGE_LIMIT: u32 = 100;
}

/// Backing store connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Server host name.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Login role.
    pub user: String,

    /// Password (empty means none).
    pub password: String,

    /// Database name.
    pub database: String,

    /// Table holding the papers. Must be a plain SQL identifier.
    pub table: String,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: defaults::DB_HOST.to_string(),
            port: defaults::DB_PORT,
            user: defaults::DB_USER.to_string(),
            password: String::new(),
            database: defaults::DB_NAME.to_string(),
            table: defaults::DB_TABLE.to_string(),
            connect_timeout: defaults::CONNECT_TIMEOUT,
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Backing store settings.
    pub database: DatabaseConfig,
}

impl Config {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to [`defaults`].
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut database = DatabaseConfig::default();

        if let Some(host) = lookup("DB_HOST") {
            database.host = host;
        }
        if let Some(port) = lookup("DB_PORT") {
            database.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("DB_PORT must be a port number, got {port:?}: {e}"))?;
        }
        if let Some(user) = lookup("DB_USER") {
            database.user = user;
        }
        if let Some(password) = lookup("DB_PASSWORD") {
            database.password = password;
        }
        if let Some(name) = lookup("DB_NAME") {
            database.database = name;
        }
        if let Some(table) = lookup("DB_TABLE") {
            database.table = table;
        }
        if let Some(secs) = lookup("DB_CONNECT_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                anyhow::anyhow!("DB_CONNECT_TIMEOUT_SECS must be whole seconds, got {secs:?}: {e}")
            })?;
            database.connect_timeout = Duration::from_secs(secs);
        }

        Ok(Self { database })
    }
}

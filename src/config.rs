use std::env;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Settings required to open the catalog database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite database path or URL.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub max_pool_size: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl StoreConfig {
    /// Build the configuration from `DATABASE_URL` and `DATABASE_POOL_SIZE`.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let max_pool_size = lookup("DATABASE_POOL_SIZE")
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_POOL_SIZE);

        Self {
            database_url,
            max_pool_size,
        }
    }

    /// Override the database location.
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }
}

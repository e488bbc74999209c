use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

/// Configuration for the dashboard data layer
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// MongoDB connection string
    pub mongodb_uri: String,

    /// Name of the MongoDB database holding the dashboard collections
    #[serde(default = "default_database")]
    pub mongodb_database: String,

    /// PostgreSQL URL for the legacy SQL tables. Legacy reads are disabled when unset.
    #[serde(default)]
    pub postgres_url: Option<String>,

    #[serde(default = "default_max_connections")]
    pub postgres_max_connections: u32,
}

fn default_database() -> String {
    "dashboard".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize environment variables into Config struct
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Build a configuration from explicit key/value pairs instead of the process environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs.into_iter().map(|(k, v)| (k.into(), v.into()));
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    pub fn mongodb_uri(&self) -> &str {
        &self.mongodb_uri
    }

    pub fn postgres_url(&self) -> Option<&str> {
        self.postgres_url.as_deref()
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    dotenv().ok();

    Config::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_defaults() {
        let config = Config::from_pairs([("MONGODB_URI", "mongodb://localhost:27017")]).unwrap();

        assert_eq!(config.mongodb_uri(), "mongodb://localhost:27017");
        assert_eq!(config.mongodb_database, "dashboard");
        assert_eq!(config.postgres_url(), None);
        assert_eq!(config.postgres_max_connections, 5);
    }

    #[test]
    fn reads_legacy_settings() {
        let config = Config::from_pairs([
            ("MONGODB_URI", "mongodb://db:27017"),
            ("MONGODB_DATABASE", "acme"),
            ("POSTGRES_URL", "postgres://user:pass@pg/acme"),
            ("POSTGRES_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();

        assert_eq!(config.mongodb_database, "acme");
        assert_eq!(config.postgres_url(), Some("postgres://user:pass@pg/acme"));
        assert_eq!(config.postgres_max_connections, 12);
    }

    #[test]
    fn requires_mongodb_uri() {
        let result = Config::from_pairs([("MONGODB_DATABASE", "acme")]);
        assert!(result.is_err());
    }
}
